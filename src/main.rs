//! uart-echo entry point
//!
//! On the `virt` machine (`target_os = "none"`) this is the firmware image:
//! `riscv-rt` sets up the stack and calls `main`, which runs one echo session
//! on UART0 and halts. On a hosted target the same session runs over
//! stdin/stdout.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(target_os = "none")]
use core::panic::PanicInfo;

#[cfg(target_os = "none")]
use uart_echo::{config, console::CONSOLE, drivers::UartError, echo, kprintln, logger};

/// Firmware entry, called by `riscv-rt` on hart 0
#[cfg(target_os = "none")]
#[riscv_rt::entry]
fn main() -> ! {
    if logger::init().is_err() {
        kprintln!("[BOOT] logger already installed");
    }
    log::info!("console on UART0 at {:#x}", config::UART_BASE);

    let mut line = [0u8; config::LINE_CAPACITY];
    // The guard must be gone before anything is logged.
    let result = {
        let mut uart = CONSOLE.lock();
        echo::run(&mut *uart, &mut line)
    };
    match result {
        Ok(len) => log::debug!("received {} byte line", len),
        Err(UartError::LineTooLong { capacity }) => {
            log::warn!("line truncated to {} bytes", capacity - 1)
        }
        Err(e) => log::error!("echo session failed: {}", e),
    }

    halt();
}

/// Park the hart forever.
#[cfg(target_os = "none")]
fn halt() -> ! {
    loop {
        // SAFETY: WFI only pauses the hart until the next interrupt; with
        // interrupts disabled it may also return immediately.
        // Audited: 2026-10-18
        unsafe {
            core::arch::asm!("wfi", options(nomem, nostack));
        }
    }
}

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    // A panic while the console is held would deadlock on `kprintln!`.
    if let Some(mut console) = CONSOLE.try_lock() {
        use core::fmt::Write;

        let _ = write!(console, "\r\n!!! PANIC !!!\r\n");
        if let Some(location) = info.location() {
            let _ = write!(
                console,
                "Location: {}:{}:{}\r\n",
                location.file(),
                location.line(),
                location.column()
            );
        }
        let _ = write!(console, "Message: {}\r\nSystem halted.\r\n", info.message());
    }

    halt();
}

#[cfg(not(target_os = "none"))]
mod hosted {
    use std::io::{self, Bytes, Read, Write};

    use uart_echo::config;
    use uart_echo::drivers::{LineStatus, Uart, UartRegisters};
    use uart_echo::echo;

    /// Register binding backed by a byte reader and writer
    ///
    /// Both directions are always ready. End of input reads as LF so the
    /// line reader terminates. The first I/O error is kept and every later
    /// access becomes a no-op: reads return LF, writes are dropped.
    pub struct StreamRegisters<I, O> {
        input: Bytes<I>,
        output: O,
        error: Option<io::Error>,
    }

    impl<I: Read, O: Write> StreamRegisters<I, O> {
        pub fn new(input: I, output: O) -> Self {
            Self {
                input: input.bytes(),
                output,
                error: None,
            }
        }

        /// Flush the output and return the first I/O error seen.
        pub fn finish(mut self) -> io::Result<()> {
            if self.error.is_none() {
                if let Err(e) = self.output.flush() {
                    self.error = Some(e);
                }
            }
            match self.error {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        fn record(&mut self, result: io::Result<()>) {
            if let Err(e) = result {
                self.error.get_or_insert(e);
            }
        }
    }

    impl<I: Read, O: Write> UartRegisters for StreamRegisters<I, O> {
        fn read_status(&mut self) -> LineStatus {
            LineStatus::THR_EMPTY | LineStatus::DATA_READY
        }

        fn write_byte(&mut self, byte: u8) {
            if self.error.is_none() {
                let result = self.output.write_all(&[byte]);
                self.record(result);
            }
        }

        fn read_byte(&mut self) -> u8 {
            if self.error.is_some() {
                return b'\n';
            }
            // The prompt must be visible before blocking on input.
            let flushed = self.output.flush();
            self.record(flushed);

            match self.input.next() {
                Some(Ok(byte)) => byte,
                Some(Err(e)) => {
                    self.error.get_or_insert(e);
                    b'\n'
                }
                None => b'\n',
            }
        }
    }

    pub fn main() {
        let mut uart = Uart::new(StreamRegisters::new(io::stdin(), io::stdout()));
        let mut line = [0u8; config::LINE_CAPACITY];
        let result = echo::run(&mut uart, &mut line);

        if let Err(e) = uart.into_registers().finish() {
            eprintln!("uart-echo: {}", e);
            std::process::exit(1);
        }
        if let Err(e) = result {
            eprintln!("uart-echo: {}", e);
            std::process::exit(1);
        }
    }

}

#[cfg(not(target_os = "none"))]
fn main() {
    hosted::main();
}
