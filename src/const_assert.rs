// SPDX-License-Identifier: GPL-3.0-or-later

/// Fails compilation when `$cond` does not hold.
macro_rules! const_assert {
    ($cond:expr $(,)?) => {
        const _: () = assert!($cond);
    };
}

pub(crate) use const_assert;
