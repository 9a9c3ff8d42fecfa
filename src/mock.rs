// SPDX-License-Identifier: GPL-3.0-or-later
//! Register file for host tests.
//!
//! Records every write and models just enough of the EIC, EVSYS and TC for pin transitions
//! to be counted the way the silicon would count them.
use std::cell::RefCell;
use std::collections::HashMap;

use crate::eic::{self, SenseMode};
use crate::evsys::EventSystem;
use crate::pin_map;
use crate::port::{self, Group};
use crate::reg::{Reg, Registers};
use crate::tc::{self, Timer};

const SYNCBUSY_STUCK: u32 = 0xffff_ffff;

#[derive(Default)]
pub struct MockRegisters {
    regs: HashMap<Reg, u32>,
    writes: Vec<(Reg, u32)>,
    stuck: Vec<Reg>,
    polls: RefCell<HashMap<Reg, u32>>,
    /// CHANNEL words per EVSYS channel.
    evsys_channels: [u32; EventSystem::NUM_CHANNELS as usize],
    /// USER.CHANNEL per user id.
    evsys_users: HashMap<u8, u8>,
    levels: HashMap<(Group, u8), bool>,
}

impl MockRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every read of `reg` return all ones, as a sync flag that never clears would.
    pub fn stick(&mut self, reg: Reg) {
        self.stuck.push(reg);
    }

    pub fn polls(&self, reg: Reg) -> u32 {
        self.polls.borrow().get(&reg).copied().unwrap_or(0)
    }

    pub fn writes(&self) -> &[(Reg, u32)] {
        &self.writes
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    pub fn evsys_channel(&self, id: u8) -> u32 {
        self.evsys_channels[id as usize]
    }

    pub fn evsys_user(&self, user: u8) -> Option<u8> {
        self.evsys_users.get(&user).copied()
    }

    /// Drives the pin to `level`, producing an event if the EIC is set up to see it.
    pub fn set_level(&mut self, group: Group, pin: u8, level: bool) {
        let previous = self.levels.insert((group, pin), level).unwrap_or(false);
        if let Some(line) = self.extint_line(group, pin) {
            if self.detects(line, previous, level) {
                self.fire(line);
            }
        }
    }

    /// One low-high-low cycle on the pin.
    pub fn pulse(&mut self, group: Group, pin: u8) {
        self.set_level(group, pin, false);
        self.set_level(group, pin, true);
        self.set_level(group, pin, false);
    }

    fn value(&self, reg: Reg) -> u32 {
        self.regs.get(&reg).copied().unwrap_or(0)
    }

    fn extint_line(&self, group: Group, pin: u8) -> Option<u8> {
        let pincfg = self.value(Reg::PortPincfg(group, pin));
        let wanted = port::PINCFG_PMUXEN | port::PINCFG_INEN;
        let pmux = self.value(Reg::PortPmux(group, port::pmux_index(pin)));
        if pincfg & wanted != wanted || port::function(pmux, pin) != port::Function::A as u8 {
            return None;
        }
        pin_map::lookup(group, pin)
    }

    fn detects(&self, line: u8, previous: bool, level: bool) -> bool {
        if self.value(Reg::EicCtrl) & eic::CTRL_ENABLE == 0
            || self.value(Reg::EicEvctrl) & 1 << line == 0
        {
            return false;
        }
        let config = self.value(Reg::EicConfig(eic::config_index(line)));
        match eic::sense(config, line) {
            Some(SenseMode::Rise) | Some(SenseMode::High) => !previous && level,
            Some(SenseMode::Fall) | Some(SenseMode::Low) => previous && !level,
            Some(SenseMode::Both) => previous != level,
            Some(SenseMode::None) | None => false,
        }
    }

    fn fire(&mut self, line: u8) {
        let evgen = crate::evsys::EventGenerator::EicExtint(line).id() as u32;
        for id in 0..EventSystem::NUM_CHANNELS {
            if (self.evsys_channels[id as usize] >> 16) & 0x7f != evgen {
                continue;
            }
            for timer in Timer::ALL {
                let user = crate::evsys::User::from(timer) as u8;
                if self.evsys_user(user) == Some(id + 1) {
                    self.count(timer);
                }
            }
        }
    }

    fn count(&mut self, timer: Timer) {
        let ctrla = self.value(Reg::TcCtrla(timer));
        let evctrl = self.value(Reg::TcEvctrl(timer));
        if ctrla & tc::CTRLA_ENABLE != 0
            && evctrl & tc::EVCTRL_TCEI != 0
            && evctrl & tc::EVCTRL_EVACT_MASK == tc::EVCTRL_EVACT_COUNT
        {
            let count = self.value(Reg::TcCount(timer));
            self.regs
                .insert(Reg::TcCount(timer), (count + 1) & 0xffff);
        }
    }
}

impl Registers for MockRegisters {
    fn read(&self, reg: Reg) -> u32 {
        *self.polls.borrow_mut().entry(reg).or_insert(0) += 1;
        if self.stuck.contains(&reg) {
            return SYNCBUSY_STUCK;
        }
        self.value(reg)
    }

    fn write(&mut self, reg: Reg, value: u32) {
        self.writes.push((reg, value));
        match reg {
            Reg::EvsysChannel => {
                if let Some(slot) = self.evsys_channels.get_mut((value & 0xf) as usize) {
                    *slot = value;
                }
            }
            Reg::EvsysUser => {
                self.evsys_users
                    .insert((value & 0x1f) as u8, ((value >> 8) & 0x1f) as u8);
            }
            _ => {}
        }
        self.regs.insert(reg, value);
    }
}
