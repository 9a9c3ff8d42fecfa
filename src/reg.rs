// SPDX-License-Identifier: GPL-3.0-or-later
//! Raw register access.
//!
//! Drivers in this crate never touch memory-mapped registers directly. They compute register
//! words with the field helpers of each peripheral module and hand them to a [`Registers`]
//! implementation, which is the PAC on hardware and a recording mock in tests.
use crate::error::{Error, Peripheral};
use crate::port::Group;
use crate::tc::Timer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg {
    PmApbamask,
    PmApbcmask,

    GclkClkctrl,
    GclkStatus,

    PortDirclr(Group),
    PortPincfg(Group, u8),
    PortPmux(Group, u8),

    EicCtrl,
    EicStatus,
    EicEvctrl,
    EicIntenclr,
    EicConfig(u8),

    EvsysChannel,
    EvsysUser,

    TcCtrla(Timer),
    TcEvctrl(Timer),
    TcCount(Timer),
    TcReadreq(Timer),
    TcStatus(Timer),

    TccCtrla,
    TccSyncbusy,
    TccWave,
    TccPer,
    TccCc(u8),
}

impl Reg {
    pub fn peripheral(self) -> Peripheral {
        match self {
            Reg::PmApbamask | Reg::PmApbcmask => Peripheral::Pm,
            Reg::GclkClkctrl | Reg::GclkStatus => Peripheral::Gclk,
            Reg::PortDirclr(_) | Reg::PortPincfg(..) | Reg::PortPmux(..) => Peripheral::Port,
            Reg::EicCtrl
            | Reg::EicStatus
            | Reg::EicEvctrl
            | Reg::EicIntenclr
            | Reg::EicConfig(_) => Peripheral::Eic,
            Reg::EvsysChannel | Reg::EvsysUser => Peripheral::Evsys,
            Reg::TcCtrla(t)
            | Reg::TcEvctrl(t)
            | Reg::TcCount(t)
            | Reg::TcReadreq(t)
            | Reg::TcStatus(t) => Peripheral::Tc(t),
            Reg::TccCtrla | Reg::TccSyncbusy | Reg::TccWave | Reg::TccPer | Reg::TccCc(_) => {
                Peripheral::Tcc0
            }
        }
    }
}

/// Word-level access to the peripheral registers. Narrower registers use the low bits.
pub trait Registers {
    fn read(&self, reg: Reg) -> u32;

    fn write(&mut self, reg: Reg, value: u32);

    fn modify<F>(&mut self, reg: Reg, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }
}

/// Busy-waits until all bits of `mask` in `reg` read as zero.
///
/// With `limit == None` this never gives up, otherwise it fails after `limit` polls.
pub fn wait_sync<R>(regs: &R, reg: Reg, mask: u32, limit: Option<u32>) -> Result<(), Error>
where
    R: Registers + ?Sized,
{
    let mut polls = 0u32;
    while regs.read(reg) & mask != 0 {
        if let Some(limit) = limit {
            polls += 1;
            if polls >= limit {
                log::error!("{:?} stuck at {:#x}", reg, regs.read(reg));
                return Err(Error::SyncTimeout(reg.peripheral()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRegisters;

    #[test]
    fn wait_sync_returns_once_flag_clears() {
        let regs = MockRegisters::new();
        assert_eq!(wait_sync(&regs, Reg::GclkStatus, 1 << 7, Some(10)), Ok(()));
    }

    #[test]
    fn wait_sync_gives_up_after_limit() {
        let mut regs = MockRegisters::new();
        regs.stick(Reg::EicStatus);
        assert_eq!(
            wait_sync(&regs, Reg::EicStatus, 1 << 7, Some(10)),
            Err(Error::SyncTimeout(Peripheral::Eic))
        );
        assert!(regs.polls(Reg::EicStatus) >= 10);
    }

    #[test]
    fn modify_reads_back_before_writing() {
        let mut regs = MockRegisters::new();
        regs.write(Reg::EicEvctrl, 0b0100);
        regs.modify(Reg::EicEvctrl, |r| r | 0b0001);
        assert_eq!(regs.read(Reg::EicEvctrl), 0b0101);
    }
}
