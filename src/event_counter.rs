// SPDX-License-Identifier: GPL-3.0-or-later
//! Counting GPIO transitions in hardware.
//!
//! The pin is routed to its EXTINT line, the EIC turns matching transitions into events, an
//! asynchronous EVSYS channel carries them to a TC and the TC counts them. No interrupt is
//! raised along the way.
use log::{debug, error, info, trace, warn};

use crate::config::Config;
use crate::eic::{self, SenseMode};
use crate::error::Error;
use crate::evsys::{self, EventGenerator, Path};
use crate::gclk::{self, ClockId};
use crate::pin_map;
use crate::pm;
use crate::port::{self, Function, Group};
use crate::reg::Registers;
use crate::tc::{Counter16, Timer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Unconfigured,
    Failed,
    Running,
}

pub struct EventCounter {
    port: u8,
    pin: u8,
    tc: u8,
    sense: SenseMode,
    channel: Option<u8>,
    state: State,
}

impl EventCounter {
    /// Stores the configuration only. Nothing is validated or written until [`Self::begin`],
    /// as clocks are usually not running yet when a counter is created.
    pub const fn new(port: u8, pin: u8, tc: u8, sense: SenseMode) -> Self {
        Self {
            port,
            pin,
            tc,
            sense,
            channel: None,
            state: State::Unconfigured,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// EXTINT line the pin was resolved to, `None` until that succeeded.
    pub fn channel(&self) -> Option<u8> {
        self.channel
    }

    pub fn sense(&self) -> SenseMode {
        self.sense
    }

    /// Configures PM, GCLK, PORT, EIC, EVSYS and the TC, in that order.
    ///
    /// Must be called after the clock system is up. Invalid or unmapped pins are rejected
    /// before any register is written. Calling this again re-applies the whole sequence.
    pub fn begin<R>(&mut self, regs: &mut R, config: &Config) -> Result<(), Error>
    where
        R: Registers + ?Sized,
    {
        info!("EventCounter.begin()");
        if self.state == State::Running {
            warn!("TC{} already counting, configuring again", self.tc);
        }

        let result = self.configure(regs, config);
        self.state = match result {
            Ok(()) => State::Running,
            Err(_) => State::Failed,
        };
        result?;

        info!(
            "Initialized using port {}, pin {}, TC{}, EIC channel {}",
            self.port,
            self.pin,
            self.tc,
            self.channel.unwrap_or(0xff)
        );
        Ok(())
    }

    /// Current count of the TC.
    pub fn read<R>(&self, regs: &mut R, config: &Config) -> Result<u32, Error>
    where
        R: Registers + ?Sized,
    {
        trace!("Reading TC counter value");
        let counter = self.counter(config)?;
        let count = counter.count(regs)?;
        counter.sync(regs)?;
        Ok(count as u32)
    }

    pub fn reset<R>(&self, regs: &mut R, config: &Config) -> Result<(), Error>
    where
        R: Registers + ?Sized,
    {
        debug!("Resetting TC counter");
        let counter = self.counter(config)?;
        counter.set_count(regs, 0);
        counter.sync(regs)
    }

    fn counter(&self, config: &Config) -> Result<Counter16, Error> {
        if self.state != State::Running {
            warn!("TC{} used before a successful begin()", self.tc);
            return Err(Error::NotConfigured);
        }
        let timer = Timer::try_from(self.tc)?;
        Ok(Counter16::new(timer, config.sync_poll_limit))
    }

    fn validate(&self) -> Result<(Group, Timer), Error> {
        debug!("Validating inputs");
        if self.pin >= port::NUM_PINS {
            return Err(Error::InvalidConfig);
        }
        Ok((Group::try_from(self.port)?, Timer::try_from(self.tc)?))
    }

    fn configure<R>(&mut self, regs: &mut R, config: &Config) -> Result<(), Error>
    where
        R: Registers + ?Sized,
    {
        let (group, timer) = self.validate().map_err(|e| {
            error!("Invalid port/pin/TC number");
            e
        })?;

        debug!("Mapping EIC channel");
        self.channel = pin_map::lookup(group, self.pin);
        let channel = self.channel.ok_or_else(|| {
            error!("Failed to map EIC channel");
            Error::UnmappedPin
        })?;

        let limit = config.sync_poll_limit;

        debug!("Configuring PM");
        pm::enable_apba(regs, pm::APBAMASK_EIC);
        pm::enable_apbc(regs, pm::APBCMASK_EVSYS | timer.apbc_mask());
        debug!("TC{} selected", timer.number());

        debug!("Configuring GCLK");
        gclk::attach(regs, ClockId::Eic, config.generator, limit)?;
        gclk::attach(regs, timer.clock_id(), config.generator, limit)?;

        debug!("Configuring GPIO");
        port::route_input(regs, group, self.pin, Function::A);

        debug!("Configuring EIC");
        eic::configure_event(regs, channel, self.sense, limit)?;

        debug!("Configuring EVSYS");
        let evsys_channel = evsys::Channel::for_timer(timer);
        evsys_channel.config(regs, Path::Asynchronous, EventGenerator::EicExtint(channel));
        evsys_channel.user(regs, timer.into());

        debug!("Configuring TC");
        Counter16::new(timer, limit).count_events(regs)
    }
}
