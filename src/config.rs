//! Platform configuration
//!
//! Everything here is fixed at compile time: there is no command line,
//! environment or filesystem on bare metal. Platforms are selected with
//! cargo features.

use log::LevelFilter;

/// QEMU `virt` machine: NS16550A UART0
#[cfg(feature = "qemu-virt")]
pub const UART_BASE: usize = 0x1000_0000;

#[cfg(not(feature = "qemu-virt"))]
compile_error!("no platform selected: enable the `qemu-virt` feature");

/// Size of the echo program's line buffer, terminator included
pub const LINE_CAPACITY: usize = 100;

/// Console log level
#[cfg(not(feature = "verbose"))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Warn;
#[cfg(feature = "verbose")]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Trace;

/// Printed before reading the line
pub const PROMPT: &str = "type something:";
/// Printed before echoing the captured line
pub const RESPONSE_PREFIX: &str = "\r\nyou type:";
/// Printed after the captured line
pub const LINE_END: &str = "\r\n";
