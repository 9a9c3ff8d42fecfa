// SPDX-License-Identifier: GPL-3.0-or-later
//! Power manager: APB bus clock gating.
use crate::reg::{Reg, Registers};

/// `apbamask.eic_()`
pub const APBAMASK_EIC: u32 = 1 << 6;

/// `apbcmask.evsys_()`
pub const APBCMASK_EVSYS: u32 = 1 << 1;
/// `apbcmask.tcc0_()`
pub const APBCMASK_TCC0: u32 = 1 << 8;
/// `apbcmask.tc3_()`
pub const APBCMASK_TC3: u32 = 1 << 11;
/// `apbcmask.tc4_()`
pub const APBCMASK_TC4: u32 = 1 << 12;
/// `apbcmask.tc5_()`
pub const APBCMASK_TC5: u32 = 1 << 13;

pub fn enable_apba<R: Registers + ?Sized>(regs: &mut R, mask: u32) {
    regs.modify(Reg::PmApbamask, |r| r | mask);
}

pub fn enable_apbc<R: Registers + ?Sized>(regs: &mut R, mask: u32) {
    regs.modify(Reg::PmApbcmask, |r| r | mask);
}
