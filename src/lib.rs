// SPDX-License-Identifier: GPL-3.0-or-later
//! Peripheral configuration helpers for SAMD21 parts.
//!
//! [`EventCounter`] binds a GPIO input to a 16-bit TC through the EIC and EVSYS so that edges
//! on the pin are counted without CPU involvement. [`PwmSingle`] drives one TCC0 waveform
//! output and [`ControlState`] holds the state of a motor control loop.
//!
//! All register access goes through [`reg::Registers`], which is implemented for the real
//! peripherals by `samd21::Samd21` (with the `firmware` feature).
#![cfg_attr(not(test), no_std)]

mod const_assert;

pub mod config;
pub mod control;
pub mod eic;
pub mod error;
pub mod event_counter;
pub mod evsys;
pub mod gclk;
pub mod pin_map;
pub mod pm;
pub mod port;
pub mod pwm;
pub mod reg;
pub mod tc;
pub mod tcc;

#[cfg(feature = "firmware")]
pub mod logger;
#[cfg(feature = "firmware")]
pub mod samd21;

#[cfg(test)]
mod mock;

pub use config::Config;
pub use control::ControlState;
pub use eic::SenseMode;
pub use error::{Error, Peripheral};
pub use event_counter::EventCounter;
pub use pwm::PwmSingle;
