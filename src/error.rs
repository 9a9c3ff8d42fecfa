// SPDX-License-Identifier: GPL-3.0-or-later
use core::fmt;

use crate::tc::Timer;

/// Peripheral a register belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Peripheral {
    Pm,
    Gclk,
    Port,
    Eic,
    Evsys,
    Tc(Timer),
    Tcc0,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Port, pin or TC number outside of the supported range.
    InvalidConfig,
    /// The pin has no external interrupt line.
    UnmappedPin,
    /// The driver has not been successfully initialized.
    NotConfigured,
    /// A sync-busy flag did not clear within the configured number of polls.
    SyncTimeout(Peripheral),
    /// The pin is not connected to a TCC0 waveform output.
    UnsupportedPin,
    /// PWM frequency outside of 100 Hz to 10 kHz.
    FrequencyOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig => f.write_str("invalid port/pin/TC number"),
            Error::UnmappedPin => f.write_str("pin has no EIC channel"),
            Error::NotConfigured => f.write_str("peripheral not configured"),
            Error::SyncTimeout(p) => write!(f, "{:?} did not finish synchronizing", p),
            Error::UnsupportedPin => f.write_str("pin has no TCC0 waveform output"),
            Error::FrequencyOutOfRange => f.write_str("frequency out of range"),
        }
    }
}

impl core::error::Error for Error {}
