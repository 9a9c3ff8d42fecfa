// SPDX-License-Identifier: GPL-3.0-or-later
//! Single channel PWM on a TCC0 waveform output.
//!
//! TCC0 outputs by pin (port A only):
//!
//! | WO | CC | pins             |
//! |----|----|------------------|
//! | 0  | 0  | PA04, PA08       |
//! | 1  | 1  | PA05, PA09       |
//! | 2  | 2  | PA10, PA18       |
//! | 3  | 3  | PA11, PA19       |
//! | 4  | 0  | PA14, PA22       |
//! | 5  | 1  | PA15, PA23       |
//! | 6  | 2  | PA12, PA16, PA20 |
//! | 7  | 3  | PA13, PA17, PA21 |
use log::{debug, info};
use num_rational::Ratio;

use crate::config::Config;
use crate::error::Error;
use crate::gclk::{self, ClockId};
use crate::pm;
use crate::port::{self, Function, Group};
use crate::reg::{Reg, Registers};
use crate::tcc;

/// Waveform output and compare channel driving `pin` of port A.
pub fn pin_to_wo(pin: u8) -> Option<(u8, u8)> {
    let wo_cc = match pin {
        4 | 8 => (0, 0),
        5 | 9 => (1, 1),
        10 | 18 => (2, 2),
        11 | 19 => (3, 3),
        14 | 22 => (4, 0),
        15 | 23 => (5, 1),
        12 | 16 | 20 => (6, 2),
        13 | 17 | 21 => (7, 3),
        _ => return None,
    };
    Some(wo_cc)
}

pub struct PwmSingle {
    pin: u8,
    wo: u8,
    cc: u8,
    freq_hz: u32,
    duty: u8,
    running: bool,
}

impl Default for PwmSingle {
    fn default() -> Self {
        Self::new()
    }
}

impl PwmSingle {
    pub const MIN_FREQ_HZ: u32 = 100;
    pub const MAX_FREQ_HZ: u32 = 10_000;
    pub const MAX_DUTY: u8 = 100;

    /// GCLK0 runs at 48 MHz, TCC0 divides it by 8.
    const TIMER_HZ: u32 = 48_000_000 / 8;

    pub const fn new() -> Self {
        Self {
            pin: 0,
            wo: 0,
            cc: 0,
            freq_hz: 1000,
            duty: 10,
            running: false,
        }
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Waveform output index the pin is muxed to.
    pub fn wo(&self) -> u8 {
        self.wo
    }

    pub fn frequency(&self) -> u32 {
        self.freq_hz
    }

    pub fn duty_cycle(&self) -> u8 {
        self.duty
    }

    /// PER and CC values for `freq_hz` at `duty` percent.
    pub fn period_and_compare(freq_hz: u32, duty: u8) -> (u32, u32) {
        let top = (Self::TIMER_HZ / freq_hz.max(1))
            .saturating_sub(1)
            .min(tcc::PER_MAX);
        let duty = duty.min(Self::MAX_DUTY) as u32;
        let cc = (Ratio::new(duty, 100) * Ratio::from_integer(top + 1)).to_integer();
        (top, cc)
    }

    fn check_frequency(freq_hz: u32) -> Result<(), Error> {
        if (Self::MIN_FREQ_HZ..=Self::MAX_FREQ_HZ).contains(&freq_hz) {
            Ok(())
        } else {
            Err(Error::FrequencyOutOfRange)
        }
    }

    /// Routes PA`pin` to TCC0 and starts a `freq_hz` waveform at `duty` percent.
    pub fn begin<R>(
        &mut self,
        regs: &mut R,
        config: &Config,
        pin: u8,
        freq_hz: u32,
        duty: u8,
    ) -> Result<(), Error>
    where
        R: Registers + ?Sized,
    {
        let (wo, cc) = pin_to_wo(pin).ok_or(Error::UnsupportedPin)?;
        Self::check_frequency(freq_hz)?;

        self.pin = pin;
        self.wo = wo;
        self.cc = cc;
        self.freq_hz = freq_hz;
        self.duty = duty.min(Self::MAX_DUTY);

        self.init_tcc0(regs, config)?;
        self.running = true;
        self.update_period_and_cc(regs, config)?;

        info!("PWM on PA{:02} (WO[{}]) at {} Hz", self.pin, self.wo, self.freq_hz);
        Ok(())
    }

    pub fn set_duty_cycle<R>(&mut self, regs: &mut R, config: &Config, duty: u8) -> Result<(), Error>
    where
        R: Registers + ?Sized,
    {
        if !self.running {
            return Err(Error::NotConfigured);
        }
        self.duty = duty.min(Self::MAX_DUTY);
        self.update_period_and_cc(regs, config)
    }

    /// Out of range frequencies are rejected and the output keeps running unchanged.
    pub fn set_frequency<R>(&mut self, regs: &mut R, config: &Config, freq_hz: u32) -> Result<(), Error>
    where
        R: Registers + ?Sized,
    {
        if !self.running {
            return Err(Error::NotConfigured);
        }
        Self::check_frequency(freq_hz)?;
        self.freq_hz = freq_hz;
        self.update_period_and_cc(regs, config)
    }

    fn init_tcc0<R>(&self, regs: &mut R, config: &Config) -> Result<(), Error>
    where
        R: Registers + ?Sized,
    {
        let limit = config.sync_poll_limit;

        port::route_output(regs, Group::A, self.pin, Function::F);

        // Power on TCC0
        pm::enable_apbc(regs, pm::APBCMASK_TCC0);
        gclk::attach(regs, ClockId::Tcc0Tcc1, config.generator, limit)?;

        // Reset TCC0
        regs.write(Reg::TccCtrla, tcc::CTRLA_SWRST);
        tcc::sync(regs, tcc::SYNCBUSY_SWRST, limit)?;

        regs.write(Reg::TccCtrla, tcc::CTRLA_PRESCALER_DIV8);

        // Normal PWM
        regs.write(Reg::TccWave, tcc::WAVE_WAVEGEN_NPWM);
        tcc::sync(regs, tcc::SYNCBUSY_WAVE, limit)?;

        tcc::set_enabled(regs, true, limit)
    }

    fn update_period_and_cc<R>(&self, regs: &mut R, config: &Config) -> Result<(), Error>
    where
        R: Registers + ?Sized,
    {
        let limit = config.sync_poll_limit;
        let (top, cc) = Self::period_and_compare(self.freq_hz, self.duty);
        debug!("TCC0 PER {} CC{} {}", top, self.cc, cc);

        tcc::set_enabled(regs, false, limit)?;

        regs.write(Reg::TccPer, top);
        tcc::sync(regs, tcc::SYNCBUSY_PER, limit)?;

        regs.write(Reg::TccCc(self.cc), cc);
        tcc::sync(regs, tcc::syncbusy_cc(self.cc), limit)?;

        tcc::set_enabled(regs, true, limit)
    }
}
