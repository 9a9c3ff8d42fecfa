// SPDX-License-Identifier: GPL-3.0-or-later
//! [`Registers`] on the real SAMD21 peripherals.
use itsybitsy_m0::pac;
use paste::paste;

use crate::port::Group;
use crate::reg::{Reg, Registers};
use crate::tc::Timer;

pub struct Samd21 {
    pm: pac::PM,
    gclk: pac::GCLK,
    port: pac::PORT,
    eic: pac::EIC,
    evsys: pac::EVSYS,
    tc3: pac::TC3,
    tc4: pac::TC4,
    tc5: pac::TC5,
    tcc0: pac::TCC0,
}

impl Samd21 {
    /// Safety: the caller must not drive PM, GCLK, PORT, EIC, EVSYS, TC3-5 or TCC0 through
    /// another handle while the configuration sequences run.
    pub unsafe fn steal() -> Self {
        let p = pac::Peripherals::steal();
        Self {
            pm: p.PM,
            gclk: p.GCLK,
            port: p.PORT,
            eic: p.EIC,
            evsys: p.EVSYS,
            tc3: p.TC3,
            tc4: p.TC4,
            tc5: p.TC5,
            tcc0: p.TCC0,
        }
    }

    fn tc(&self, timer: Timer) -> &pac::tc3::RegisterBlock {
        match timer {
            Timer::Tc3 => &self.tc3,
            Timer::Tc4 => &self.tc4,
            Timer::Tc5 => &self.tc5,
        }
    }
}

// PORT splits its groups into separately named register sets
macro_rules! port_group {
    ($self:ident, $group:expr, |$regs:ident| $body:expr) => {
        paste! {
            match $group {
                Group::A => {
                    let $regs = ( &$self.port.[<dirclr 0>], &$self.port.[<pincfg 0 _>], &$self.port.[<pmux 0 _>] );
                    $body
                }
                Group::B => {
                    let $regs = ( &$self.port.[<dirclr 1>], &$self.port.[<pincfg 1 _>], &$self.port.[<pmux 1 _>] );
                    $body
                }
            }
        }
    };
}

impl Registers for Samd21 {
    fn read(&self, reg: Reg) -> u32 {
        match reg {
            Reg::PmApbamask => self.pm.apbamask.read().bits(),
            Reg::PmApbcmask => self.pm.apbcmask.read().bits(),

            Reg::GclkClkctrl => self.gclk.clkctrl.read().bits() as u32,
            Reg::GclkStatus => self.gclk.status.read().bits() as u32,

            Reg::PortDirclr(group) => port_group!(self, group, |r| r.0.read().bits()),
            Reg::PortPincfg(group, pin) => {
                port_group!(self, group, |r| r.1[pin as usize].read().bits() as u32)
            }
            Reg::PortPmux(group, index) => {
                port_group!(self, group, |r| r.2[index as usize].read().bits() as u32)
            }

            Reg::EicCtrl => self.eic.ctrl.read().bits() as u32,
            Reg::EicStatus => self.eic.status.read().bits() as u32,
            Reg::EicEvctrl => self.eic.evctrl.read().bits(),
            // INTENCLR reads back the enabled interrupts
            Reg::EicIntenclr => self.eic.intenclr.read().bits(),
            Reg::EicConfig(index) => self.eic.config[index as usize].read().bits(),

            Reg::EvsysChannel => self.evsys.channel.read().bits(),
            Reg::EvsysUser => self.evsys.user.read().bits() as u32,

            Reg::TcCtrla(timer) => self.tc(timer).count16().ctrla.read().bits() as u32,
            Reg::TcEvctrl(timer) => self.tc(timer).count16().evctrl.read().bits() as u32,
            // Only valid after a READREQ for COUNT has synced
            Reg::TcCount(timer) => self.tc(timer).count16().count.read().bits() as u32,
            Reg::TcReadreq(timer) => self.tc(timer).count16().readreq.read().bits() as u32,
            Reg::TcStatus(timer) => self.tc(timer).count16().status.read().bits() as u32,

            Reg::TccCtrla => self.tcc0.ctrla.read().bits(),
            Reg::TccSyncbusy => self.tcc0.syncbusy.read().bits(),
            Reg::TccWave => self.tcc0.wave.read().bits(),
            Reg::TccPer => self.tcc0.per().read().bits(),
            Reg::TccCc(cc) => self.tcc0.cc()[cc as usize].read().bits(),
        }
    }

    fn write(&mut self, reg: Reg, value: u32) {
        match reg {
            Reg::PmApbamask => self.pm.apbamask.write(|w| unsafe { w.bits(value) }),
            Reg::PmApbcmask => self.pm.apbcmask.write(|w| unsafe { w.bits(value) }),

            Reg::GclkClkctrl => self
                .gclk
                .clkctrl
                .write(|w| unsafe { w.bits(value as u16) }),

            Reg::PortDirclr(group) => {
                port_group!(self, group, |r| r.0.write(|w| unsafe { w.bits(value) }))
            }
            Reg::PortPincfg(group, pin) => port_group!(self, group, |r| r.1[pin as usize]
                .write(|w| unsafe { w.bits(value as u8) })),
            Reg::PortPmux(group, index) => port_group!(self, group, |r| r.2[index as usize]
                .write(|w| unsafe { w.bits(value as u8) })),

            Reg::EicCtrl => self.eic.ctrl.write(|w| unsafe { w.bits(value as u8) }),
            Reg::EicEvctrl => self.eic.evctrl.write(|w| unsafe { w.bits(value) }),
            Reg::EicIntenclr => self.eic.intenclr.write(|w| unsafe { w.bits(value) }),
            Reg::EicConfig(index) => {
                self.eic.config[index as usize].write(|w| unsafe { w.bits(value) })
            }

            Reg::EvsysChannel => self.evsys.channel.write(|w| unsafe { w.bits(value) }),
            Reg::EvsysUser => self.evsys.user.write(|w| unsafe { w.bits(value as u16) }),

            Reg::TcCtrla(timer) => self
                .tc(timer)
                .count16()
                .ctrla
                .write(|w| unsafe { w.bits(value as u16) }),
            Reg::TcEvctrl(timer) => self
                .tc(timer)
                .count16()
                .evctrl
                .write(|w| unsafe { w.bits(value as u16) }),
            Reg::TcCount(timer) => self
                .tc(timer)
                .count16()
                .count
                .write(|w| unsafe { w.bits(value as u16) }),
            Reg::TcReadreq(timer) => self
                .tc(timer)
                .count16()
                .readreq
                .write(|w| unsafe { w.bits(value as u16) }),

            Reg::TccCtrla => self.tcc0.ctrla.write(|w| unsafe { w.bits(value) }),
            Reg::TccWave => self.tcc0.wave.write(|w| unsafe { w.bits(value) }),
            Reg::TccPer => self.tcc0.per().write(|w| unsafe { w.bits(value) }),
            Reg::TccCc(cc) => self.tcc0.cc()[cc as usize].write(|w| unsafe { w.bits(value) }),

            // Status registers are read-only
            Reg::GclkStatus | Reg::EicStatus | Reg::TcStatus(_) | Reg::TccSyncbusy => {}
        }
    }
}
