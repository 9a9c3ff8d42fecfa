// SPDX-License-Identifier: GPL-3.0-or-later
use crate::const_assert::const_assert;
use crate::eic;
use crate::tc::Timer;

pub use channel::*;

mod channel;

pub struct EventSystem;

impl EventSystem {
    pub const NUM_CHANNELS: u8 = 12;
}

// Every eligible TC gets a channel of its own
const_assert!((Timer::Tc5 as u8 - Timer::Tc3 as u8) < EventSystem::NUM_CHANNELS);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum User {
    Tc3 = 0x12,
    Tc4 = 0x13,
    Tc5 = 0x14,
}

impl From<Timer> for User {
    fn from(timer: Timer) -> Self {
        match timer {
            Timer::Tc3 => User::Tc3,
            Timer::Tc4 => User::Tc4,
            Timer::Tc5 => User::Tc5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Path {
    Synchronous = 0x0,
    Resynchronized = 0x1,
    Asynchronous = 0x2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventGenerator {
    EicExtint(u8),
}

impl EventGenerator {
    const EIC_EXTINT_0: u8 = 0x0c;

    pub fn id(self) -> u8 {
        match self {
            EventGenerator::EicExtint(line) => {
                debug_assert!(line < eic::NUM_CHANNELS);
                Self::EIC_EXTINT_0 + line
            }
        }
    }
}
