// SPDX-License-Identifier: GPL-3.0-or-later
//! 16-bit timer/counters TC3 to TC5.
use crate::error::Error;
use crate::gclk::ClockId;
use crate::pm;
use crate::reg::{self, Reg, Registers};

/// `ctrla.enable()`
pub const CTRLA_ENABLE: u32 = 1 << 1;
/// `ctrla.mode().count16()`
pub const CTRLA_MODE_COUNT16: u32 = 0x0 << 2;
/// `evctrl.evact()`
pub const EVCTRL_EVACT_MASK: u32 = 0x7;
/// `evctrl.evact().count()`
pub const EVCTRL_EVACT_COUNT: u32 = 0x2;
/// `evctrl.tcei()`
pub const EVCTRL_TCEI: u32 = 1 << 5;
/// `readreq.addr()`, offset of COUNT
pub const READREQ_ADDR_COUNT: u32 = 0x10;
/// `readreq.rreq()`
pub const READREQ_RREQ: u32 = 1 << 15;
/// `status.syncbusy()`
pub const STATUS_SYNCBUSY: u32 = 1 << 7;

/// The TCs that can count EVSYS events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Timer {
    Tc3 = 3,
    Tc4 = 4,
    Tc5 = 5,
}

impl Timer {
    pub const ALL: [Timer; 3] = [Timer::Tc3, Timer::Tc4, Timer::Tc5];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Position among the eligible TCs, TC3 is 0.
    pub fn ordinal(self) -> u8 {
        self as u8 - Timer::Tc3 as u8
    }

    pub fn clock_id(self) -> ClockId {
        match self {
            Timer::Tc3 => ClockId::Tcc2Tc3,
            Timer::Tc4 | Timer::Tc5 => ClockId::Tc4Tc5,
        }
    }

    pub fn apbc_mask(self) -> u32 {
        match self {
            Timer::Tc3 => pm::APBCMASK_TC3,
            Timer::Tc4 => pm::APBCMASK_TC4,
            Timer::Tc5 => pm::APBCMASK_TC5,
        }
    }
}

impl TryFrom<u8> for Timer {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            3 => Ok(Timer::Tc3),
            4 => Ok(Timer::Tc4),
            5 => Ok(Timer::Tc5),
            _ => Err(Error::InvalidConfig),
        }
    }
}

/// A TC in COUNT16 mode.
pub struct Counter16 {
    timer: Timer,
    limit: Option<u32>,
}

impl Counter16 {
    pub fn new(timer: Timer, limit: Option<u32>) -> Self {
        Self { timer, limit }
    }

    pub fn sync<R: Registers + ?Sized>(&self, regs: &R) -> Result<(), Error> {
        reg::wait_sync(regs, Reg::TcStatus(self.timer), STATUS_SYNCBUSY, self.limit)
    }

    pub fn set_enabled<R: Registers + ?Sized>(&self, regs: &mut R, enable: bool) -> Result<(), Error> {
        regs.modify(Reg::TcCtrla(self.timer), |r| {
            if enable {
                r | CTRLA_ENABLE
            } else {
                r & !CTRLA_ENABLE
            }
        });
        self.sync(regs)
    }

    /// Reconfigures the TC to count one per input event, starting from zero.
    pub fn count_events<R: Registers + ?Sized>(&self, regs: &mut R) -> Result<(), Error> {
        self.set_enabled(regs, false)?;

        regs.write(Reg::TcCtrla(self.timer), CTRLA_MODE_COUNT16);
        regs.write(Reg::TcEvctrl(self.timer), EVCTRL_TCEI | EVCTRL_EVACT_COUNT);
        regs.write(Reg::TcCount(self.timer), 0);

        self.set_enabled(regs, true)
    }

    /// Requests a synchronized read of COUNT and returns it once the sync completes.
    pub fn count<R: Registers + ?Sized>(&self, regs: &mut R) -> Result<u16, Error> {
        regs.write(Reg::TcReadreq(self.timer), READREQ_RREQ | READREQ_ADDR_COUNT);
        self.sync(regs)?;
        Ok(regs.read(Reg::TcCount(self.timer)) as u16)
    }

    pub fn set_count<R: Registers + ?Sized>(&self, regs: &mut R, count: u16) {
        regs.write(Reg::TcCount(self.timer), count as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Peripheral;
    use crate::mock::MockRegisters;

    #[test]
    fn only_tc3_to_tc5_are_accepted() {
        assert_eq!(Timer::try_from(2), Err(Error::InvalidConfig));
        assert_eq!(Timer::try_from(6), Err(Error::InvalidConfig));
        let ordinals: Vec<u8> = Timer::ALL.iter().map(|t| t.ordinal()).collect();
        assert_eq!(ordinals, [0, 1, 2]);
    }

    #[test]
    fn count_requests_a_synchronized_read() {
        let mut regs = MockRegisters::new();
        let counter = Counter16::new(Timer::Tc5, Some(10));
        counter.set_count(&mut regs, 42);
        regs.clear_writes();

        assert_eq!(counter.count(&mut regs), Ok(42));
        assert_eq!(regs.writes(), [(Reg::TcReadreq(Timer::Tc5), 0x8010)]);
        assert!(regs.polls(Reg::TcStatus(Timer::Tc5)) >= 1);
    }

    #[test]
    fn count_gives_up_when_the_read_never_syncs() {
        let mut regs = MockRegisters::new();
        regs.stick(Reg::TcStatus(Timer::Tc4));
        let counter = Counter16::new(Timer::Tc4, Some(10));
        assert_eq!(
            counter.count(&mut regs),
            Err(Error::SyncTimeout(Peripheral::Tc(Timer::Tc4)))
        );
    }

    #[test]
    fn tc3_shares_its_clock_with_tcc2() {
        assert_eq!(Timer::Tc3.clock_id() as u8, 27);
        assert_eq!(Timer::Tc4.clock_id() as u8, 28);
        assert_eq!(Timer::Tc5.clock_id() as u8, 28);
    }
}
