// SPDX-License-Identifier: GPL-3.0-or-later
use crate::reg::{Reg, Registers};

use super::super::Path;

const CHANNEL_EVGEN_SHIFT: u32 = 16;
const CHANNEL_PATH_SHIFT: u32 = 24;
const USER_CHANNEL_SHIFT: u32 = 8;

pub fn channel_word(id: u8, path: Path, evgen: u8) -> u32 {
    (id as u32 & 0xf)
        | (evgen as u32 & 0x7f) << CHANNEL_EVGEN_SHIFT
        | (path as u32) << CHANNEL_PATH_SHIFT
}

/// USER.CHANNEL counts from one, zero disconnects the user.
pub fn user_word(id: u8, user: u8) -> u32 {
    (user as u32 & 0x1f) | ((id as u32 + 1) & 0x1f) << USER_CHANNEL_SHIFT
}

pub(super) struct User<'a, R: ?Sized> {
    regs: &'a mut R,
    id: u8,
}

impl<'a, R: Registers + ?Sized> User<'a, R> {
    pub fn write(self, user: u8) {
        self.regs.write(Reg::EvsysUser, user_word(self.id, user));
    }
}

pub(super) struct Channel<'a, R: ?Sized> {
    regs: &'a mut R,
    id: u8,
}

impl<'a, R: Registers + ?Sized> Channel<'a, R> {
    pub fn write(self, path: Path, evgen: u8) {
        self.regs
            .write(Reg::EvsysChannel, channel_word(self.id, path, evgen));
    }
}

pub(super) struct RegisterBlock {
    id: u8,
}

impl RegisterBlock {
    pub fn new(id: u8) -> Self {
        Self { id }
    }

    pub fn user<'a, R: Registers + ?Sized>(&self, regs: &'a mut R) -> User<'a, R> {
        User { regs, id: self.id }
    }

    pub fn channel<'a, R: Registers + ?Sized>(&self, regs: &'a mut R) -> Channel<'a, R> {
        Channel { regs, id: self.id }
    }
}
