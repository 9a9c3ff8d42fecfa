// SPDX-License-Identifier: GPL-3.0-or-later
//! TCC0 register fields.
use crate::error::Error;
use crate::reg::{self, Reg, Registers};

pub const NUM_CC: u8 = 4;

/// `ctrla.swrst()`
pub const CTRLA_SWRST: u32 = 1 << 0;
/// `ctrla.enable()`
pub const CTRLA_ENABLE: u32 = 1 << 1;
/// `ctrla.prescaler().div8()`
pub const CTRLA_PRESCALER_DIV8: u32 = 0x3 << 8;

/// `syncbusy.swrst()`
pub const SYNCBUSY_SWRST: u32 = 1 << 0;
/// `syncbusy.enable()`
pub const SYNCBUSY_ENABLE: u32 = 1 << 1;
/// `syncbusy.wave()`
pub const SYNCBUSY_WAVE: u32 = 1 << 6;
/// `syncbusy.per()`
pub const SYNCBUSY_PER: u32 = 1 << 7;
/// `syncbusy.cc0()`, CCn follow at `CC0 << n`
pub const SYNCBUSY_CC0: u32 = 1 << 8;

/// `wave.wavegen().npwm()`
pub const WAVE_WAVEGEN_NPWM: u32 = 0x2;

pub const PER_MAX: u32 = 0xffff;

pub fn syncbusy_cc(cc: u8) -> u32 {
    SYNCBUSY_CC0 << cc
}

pub fn sync<R: Registers + ?Sized>(regs: &R, mask: u32, limit: Option<u32>) -> Result<(), Error> {
    reg::wait_sync(regs, Reg::TccSyncbusy, mask, limit)
}

pub fn set_enabled<R: Registers + ?Sized>(
    regs: &mut R,
    enable: bool,
    limit: Option<u32>,
) -> Result<(), Error> {
    regs.modify(Reg::TccCtrla, |r| {
        if enable {
            r | CTRLA_ENABLE
        } else {
            r & !CTRLA_ENABLE
        }
    });
    sync(regs, SYNCBUSY_ENABLE, limit)
}
