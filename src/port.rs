// SPDX-License-Identifier: GPL-3.0-or-later
//! PORT pin configuration and peripheral multiplexing.
use crate::error::Error;
use crate::reg::{Reg, Registers};

pub const NUM_PINS: u8 = 32;

/// `pincfg.pmuxen()`
pub const PINCFG_PMUXEN: u32 = 1 << 0;
/// `pincfg.inen()`
pub const PINCFG_INEN: u32 = 1 << 1;
/// `pincfg.pullen()`
pub const PINCFG_PULLEN: u32 = 1 << 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Group {
    A = 0,
    B = 1,
}

impl TryFrom<u8> for Group {
    type Error = Error;

    fn try_from(port: u8) -> Result<Self, Self::Error> {
        match port {
            0 => Ok(Group::A),
            1 => Ok(Group::B),
            _ => Err(Error::InvalidConfig),
        }
    }
}

/// Peripheral function selected through PMUX.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Function {
    A = 0x0,
    B = 0x1,
    C = 0x2,
    D = 0x3,
    E = 0x4,
    F = 0x5,
    G = 0x6,
    H = 0x7,
}

/// PMUX register shared by a pin and its odd/even neighbour.
pub fn pmux_index(pin: u8) -> u8 {
    pin >> 1
}

/// Odd pins use PMUXO (high nibble), even pins PMUXE (low nibble).
pub fn pmux_shift(pin: u8) -> u32 {
    4 * (pin as u32 & 1)
}

pub fn with_function(pmux: u32, pin: u8, function: Function) -> u32 {
    let shift = pmux_shift(pin);
    (pmux & !(0xf << shift)) | (function as u32) << shift
}

pub fn function(pmux: u32, pin: u8) -> u8 {
    ((pmux >> pmux_shift(pin)) & 0xf) as u8
}

/// Turns `pin` into a floating input routed to `function`.
pub fn route_input<R: Registers + ?Sized>(regs: &mut R, group: Group, pin: u8, function: Function) {
    regs.write(Reg::PortDirclr(group), 1 << pin);
    regs.modify(Reg::PortPincfg(group, pin), |r| r & !PINCFG_PULLEN);
    regs.modify(Reg::PortPincfg(group, pin), |r| r | PINCFG_INEN);
    regs.modify(Reg::PortPincfg(group, pin), |r| r | PINCFG_PMUXEN);
    regs.modify(Reg::PortPmux(group, pmux_index(pin)), |r| {
        with_function(r, pin, function)
    });
}

/// Hands `pin` over to `function` without touching direction or input buffer.
pub fn route_output<R: Registers + ?Sized>(regs: &mut R, group: Group, pin: u8, function: Function) {
    regs.modify(Reg::PortPincfg(group, pin), |r| r | PINCFG_PMUXEN);
    regs.modify(Reg::PortPmux(group, pmux_index(pin)), |r| {
        with_function(r, pin, function)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRegisters;

    #[test]
    fn function_lands_in_correct_nibble() {
        assert_eq!(with_function(0x00, 18, Function::F), 0x05);
        assert_eq!(with_function(0x00, 19, Function::F), 0x50);
        assert_eq!(with_function(0x55, 19, Function::A), 0x05);
        assert_eq!(function(0x50, 19), 5);
        assert_eq!(function(0x50, 18), 0);
    }

    #[test]
    fn route_input_clears_pull_and_enables_mux() {
        let mut regs = MockRegisters::new();
        regs.write(Reg::PortPincfg(Group::A, 3), PINCFG_PULLEN);
        regs.write(Reg::PortPmux(Group::A, 1), 0x3f);
        route_input(&mut regs, Group::A, 3, Function::A);

        assert_eq!(regs.read(Reg::PortDirclr(Group::A)), 1 << 3);
        assert_eq!(
            regs.read(Reg::PortPincfg(Group::A, 3)),
            PINCFG_INEN | PINCFG_PMUXEN
        );
        assert_eq!(regs.read(Reg::PortPmux(Group::A, 1)), 0x0f);
    }

    #[test]
    fn group_rejects_unknown_port() {
        assert_eq!(Group::try_from(1), Ok(Group::B));
        assert_eq!(Group::try_from(2), Err(Error::InvalidConfig));
    }
}
