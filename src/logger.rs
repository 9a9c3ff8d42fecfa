// SPDX-License-Identifier: GPL-3.0-or-later
//! `log` backend writing lines to a byte sink, usually a UART.
use core::cell::RefCell;
use core::fmt::Write;

use cortex_m::interrupt::{self, Mutex};
use heapless::String;

const LINE_LENGTH: usize = 128;

/// Blocking byte output.
pub trait Sink {
    fn write_bytes(&mut self, bytes: &[u8]);
}

type SinkRef = &'static mut (dyn Sink + Send);

static SINK: Mutex<RefCell<Option<SinkRef>>> = Mutex::new(RefCell::new(None));

struct UartLogger;

static LOGGER: UartLogger = UartLogger;

impl log::Log for UartLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        // Filtered by `log` already
        true
    }

    fn log(&self, record: &log::Record) {
        let mut line: String<LINE_LENGTH> = String::new();
        // Overlong lines are cut off
        write!(line, "{} - {}", record.level(), record.args()).ok();

        interrupt::free(|cs| {
            if let Some(sink) = SINK.borrow(cs).borrow_mut().as_mut() {
                sink.write_bytes(line.as_bytes());
                sink.write_bytes(b"\r\n");
            }
        });
    }

    fn flush(&self) {}
}

/// Installs the logger. Only the first call has an effect on the logger itself.
pub fn init(sink: SinkRef, level: log::LevelFilter) {
    interrupt::free(|cs| {
        SINK.borrow(cs).replace(Some(sink));
    });
    unsafe {
        log::set_logger_racy(&LOGGER).ok();
        log::set_max_level_racy(level);
    }
}
