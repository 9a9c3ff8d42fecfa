// SPDX-License-Identifier: GPL-3.0-or-later
//! Pin to EXTINT line mapping of the SAMD21G18A.
use crate::const_assert::const_assert;
use crate::eic;
use crate::port::Group;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinChannel {
    pub group: Group,
    pub pin: u8,
    pub channel: u8,
}

const fn entry(group: Group, pin: u8, channel: u8) -> PinChannel {
    PinChannel {
        group,
        pin,
        channel,
    }
}

// Both port groups multiplex into the same 16 lines
pub static PIN_MAP: [PinChannel; 28] = [
    entry(Group::A, 0, 0),
    entry(Group::A, 1, 1),
    entry(Group::A, 2, 2),
    entry(Group::A, 3, 3),
    entry(Group::A, 4, 4),
    entry(Group::A, 5, 5),
    entry(Group::A, 6, 6),
    entry(Group::A, 7, 7),
    entry(Group::A, 8, 8),
    entry(Group::A, 9, 9),
    entry(Group::A, 10, 10),
    entry(Group::A, 11, 11),
    entry(Group::A, 12, 12),
    entry(Group::A, 13, 13),
    entry(Group::A, 14, 14),
    entry(Group::A, 15, 15),
    entry(Group::A, 16, 0),
    entry(Group::A, 17, 1),
    entry(Group::A, 18, 2),
    entry(Group::A, 19, 3),
    entry(Group::B, 0, 0),
    entry(Group::B, 1, 1),
    entry(Group::B, 2, 2),
    entry(Group::B, 3, 3),
    entry(Group::B, 4, 4),
    entry(Group::B, 5, 5),
    entry(Group::B, 6, 6),
    entry(Group::B, 7, 7),
];

const_assert!(eic::NUM_CHANNELS == 16);

/// EXTINT line of `pin` in `group`, if it has one.
pub fn lookup(group: Group, pin: u8) -> Option<u8> {
    PIN_MAP
        .iter()
        .find(|m| m.group == group && m.pin == pin)
        .map(|m| m.channel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_resolves_to_its_channel() {
        for m in PIN_MAP.iter() {
            assert_eq!(lookup(m.group, m.pin), Some(m.channel));
            assert!(m.channel < eic::NUM_CHANNELS);
        }
    }

    #[test]
    fn at_most_one_entry_per_pin() {
        for (i, a) in PIN_MAP.iter().enumerate() {
            for b in &PIN_MAP[i + 1..] {
                assert!(a.group != b.group || a.pin != b.pin, "{:?} duplicated", a);
            }
        }
    }

    #[test]
    fn unmapped_pins() {
        assert_eq!(lookup(Group::A, 20), None);
        assert_eq!(lookup(Group::A, 31), None);
        assert_eq!(lookup(Group::B, 8), None);
        assert_eq!(lookup(Group::B, 31), None);
        assert_eq!(lookup(Group::A, 18), Some(2));
    }
}
