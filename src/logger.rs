//! Console logger
//!
//! Routes the `log` facade to the console UART. Lines are written as
//! `[LEVEL] target: message` followed by CRLF.
//!
//! `spin::Mutex` is not reentrant. A record logged while the console is
//! already locked on this hart would spin forever, so it is dropped instead.

use core::fmt::{self, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config;
use crate::console::CONSOLE;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(mut console) = CONSOLE.try_lock() {
            let _ = write_record(&mut *console, record);
        }
    }

    fn flush(&self) {}
}

/// Format one log record.
pub fn write_record<W: Write>(w: &mut W, record: &Record) -> fmt::Result {
    write!(
        w,
        "[{:<5}] {}: {}\r\n",
        record.level(),
        record.target(),
        record.args()
    )
}

/// Install the console logger at `config::LOG_LEVEL`.
///
/// Fails if a logger is already installed.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(config::LOG_LEVEL)
}

/// Install the console logger at `level`.
pub fn init_with_level(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
