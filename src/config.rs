// SPDX-License-Identifier: GPL-3.0-or-later
use crate::gclk::Generator;

// A misconfigured clock tree never clears SYNCBUSY
pub const MAX_SYNC_POLLS: u32 = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Generator feeding the EIC, TC and TCC clock consumers.
    pub generator: Generator,
    /// Number of sync-busy polls before giving up, `None` to wait forever.
    pub sync_poll_limit: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: Generator::Gclk0,
            sync_poll_limit: if cfg!(feature = "unbounded-sync") {
                None
            } else {
                Some(MAX_SYNC_POLLS)
            },
        }
    }
}
