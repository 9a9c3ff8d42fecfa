// SPDX-License-Identifier: GPL-3.0-or-later
//! External interrupt controller, used only as an event generator.
use crate::error::Error;
use crate::reg::{self, Reg, Registers};

pub const NUM_CHANNELS: u8 = 16;

/// `ctrl.enable()`
pub const CTRL_ENABLE: u32 = 1 << 1;
/// `status.syncbusy()`
pub const STATUS_SYNCBUSY: u32 = 1 << 7;

/// SENSEx[2:0] plus FILTENx.
const CONFIG_FIELD_MASK: u32 = 0xf;
const SENSE_MASK: u32 = 0x7;

/// How transitions on an EXTINT line are recognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum SenseMode {
    None = 0x0,
    Rise = 0x1,
    Fall = 0x2,
    Both = 0x3,
    #[default]
    High = 0x4,
    Low = 0x5,
}

impl SenseMode {
    pub const ALL: [SenseMode; 6] = [
        SenseMode::None,
        SenseMode::Rise,
        SenseMode::Fall,
        SenseMode::Both,
        SenseMode::High,
        SenseMode::Low,
    ];

    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| *s as u8 == bits)
    }
}

/// CONFIG register holding the field of `channel`. Eight channels per register.
pub fn config_index(channel: u8) -> u8 {
    channel / 8
}

pub fn config_shift(channel: u8) -> u32 {
    (channel as u32 % 8) * 4
}

/// Replaces the 4-bit field of `channel` in a CONFIG word. Filtering is left disabled.
pub fn with_sense(config: u32, channel: u8, sense: SenseMode) -> u32 {
    let shift = config_shift(channel);
    (config & !(CONFIG_FIELD_MASK << shift)) | (sense as u32) << shift
}

pub fn sense(config: u32, channel: u8) -> Option<SenseMode> {
    SenseMode::from_bits(((config >> config_shift(channel)) & SENSE_MASK) as u8)
}

pub fn set_enabled<R: Registers + ?Sized>(
    regs: &mut R,
    enable: bool,
    limit: Option<u32>,
) -> Result<(), Error> {
    regs.modify(Reg::EicCtrl, |r| {
        if enable {
            r | CTRL_ENABLE
        } else {
            r & !CTRL_ENABLE
        }
    });
    reg::wait_sync(regs, Reg::EicStatus, STATUS_SYNCBUSY, limit)
}

/// Makes `channel` emit an event on every transition matching `sense`, never an interrupt.
///
/// The controller is disabled while CONFIG is written and enabled again afterwards.
pub fn configure_event<R: Registers + ?Sized>(
    regs: &mut R,
    channel: u8,
    sense: SenseMode,
    limit: Option<u32>,
) -> Result<(), Error> {
    set_enabled(regs, false, limit)?;

    regs.modify(Reg::EicConfig(config_index(channel)), |r| {
        with_sense(r, channel, sense)
    });
    regs.write(Reg::EicIntenclr, 1 << channel);
    regs.modify(Reg::EicEvctrl, |r| r | 1 << channel);

    set_enabled(regs, true, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sense_round_trips_for_every_channel() {
        for channel in 0..NUM_CHANNELS {
            for mode in SenseMode::ALL {
                let config = with_sense(0, channel, mode);
                assert_eq!(sense(config, channel), Some(mode));
                assert_eq!(config >> config_shift(channel), mode as u32);
            }
        }
    }

    #[test]
    fn channel_layout() {
        assert_eq!((config_index(0), config_shift(0)), (0, 0));
        assert_eq!((config_index(7), config_shift(7)), (0, 28));
        assert_eq!((config_index(8), config_shift(8)), (1, 0));
        assert_eq!((config_index(13), config_shift(13)), (1, 20));
    }

    #[test]
    fn with_sense_leaves_neighbours_alone() {
        let config = with_sense(0xffff_ffff, 3, SenseMode::Rise);
        assert_eq!(config, 0xffff_1fff);
        assert_eq!(with_sense(config, 3, SenseMode::Low), 0xffff_5fff);
    }

    #[test]
    fn default_is_level_high() {
        assert_eq!(SenseMode::default(), SenseMode::High);
        assert_eq!(SenseMode::from_bits(6), None);
    }
}
