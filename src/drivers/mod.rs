//! Device drivers
//!
//! The UART driver is split from its register binding so the polling logic
//! runs unchanged against device memory or a simulated register file.

pub mod mmio;
pub mod uart;

#[cfg(test)]
pub(crate) mod sim;

pub use mmio::Mmio16550;
pub use uart::{LineStatus, Uart, UartError, UartRegisters};
