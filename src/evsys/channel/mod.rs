// SPDX-License-Identifier: GPL-3.0-or-later
use crate::reg::Registers;
use crate::tc::Timer;

use super::{EventGenerator, Path, User};

mod reg;

pub use reg::{channel_word, user_word};

/// One EVSYS channel. CHANNEL and USER are indirect registers, so writing them only ever
/// affects the channel selected by the written word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel {
    id: u8,
}

impl Channel {
    /// The channel reserved for counting into `timer`: TC3 uses channel 0.
    pub fn for_timer(timer: Timer) -> Self {
        Self { id: timer.ordinal() }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn user<R: Registers + ?Sized>(&self, regs: &mut R, user: User) {
        reg::RegisterBlock::new(self.id).user(regs).write(user as u8);
    }

    pub fn config<R: Registers + ?Sized>(
        &self,
        regs: &mut R,
        path: Path,
        event_generator: EventGenerator,
    ) {
        reg::RegisterBlock::new(self.id)
            .channel(regs)
            .write(path, event_generator.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRegisters;
    use crate::reg::Reg;

    #[test]
    fn user_registration_is_one_based() {
        for timer in Timer::ALL {
            let channel = Channel::for_timer(timer);
            assert_eq!(channel.id(), timer.ordinal());

            let mut regs = MockRegisters::new();
            channel.user(&mut regs, timer.into());
            let user = regs.read(Reg::EvsysUser);
            assert_eq!(user & 0x1f, 15 + timer.number() as u32);
            assert_eq!(user >> 8, timer.ordinal() as u32 + 1);
        }
    }

    #[test]
    fn channel_word_selects_zero_based_channel() {
        let mut regs = MockRegisters::new();
        Channel::for_timer(Timer::Tc5).config(
            &mut regs,
            Path::Asynchronous,
            EventGenerator::EicExtint(2),
        );
        assert_eq!(regs.read(Reg::EvsysChannel), 2 | 14 << 16 | 2 << 24);
    }
}
