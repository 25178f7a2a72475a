//! System console
//!
//! The UART at `config::UART_BASE` shared behind a spinlock, plus the
//! `kprint!`/`kprintln!` macros. There is a single hart and no interrupts, so
//! the lock is never contended; it only makes the global safe to mutate.

use spin::Mutex;

use crate::config::UART_BASE;
use crate::drivers::{Mmio16550, Uart};

/// Global console UART
///
/// SAFETY AUDIT: 2026-10-18
/// - `UART_BASE` is fixed by the platform feature (QEMU virt UART0)
/// - No other `Mmio16550` is created for that address
// SAFETY: UART_BASE is the platform's UART0 register block, mapped for the
// whole run, and this is the only binding created for it.
// Audited: 2026-10-18
pub static CONSOLE: Mutex<Uart<Mmio16550>> =
    Mutex::new(Uart::new(unsafe { Mmio16550::new(UART_BASE) }));

/// Print to the console
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut console = $crate::console::CONSOLE.lock();
        let _ = write!(console, $($arg)*);
    }};
}

/// Print to the console, ending with CRLF
#[macro_export]
macro_rules! kprintln {
    () => {
        $crate::kprint!("\r\n")
    };
    ($($arg:tt)*) => {{
        $crate::kprint!($($arg)*);
        $crate::kprint!("\r\n");
    }};
}
