//! Polled 16550 UART driver
//!
//! Byte-level transmit and receive over the three registers of an
//! NS16550-compatible serial port. There are no interrupts and no buffering:
//! every operation spins on the line status register until the hardware is
//! ready, then moves exactly one byte.
//!
//! # Register Map
//! | Offset | Register | Access |
//! |--------|----------|--------|
//! | +0x00  | THR      | write  |
//! | +0x00  | RHR      | read   |
//! | +0x05  | LSR      | read   |
//!
//! # Blocking
//! `send_byte`, `recv_byte` and `recv_line` have no timeout. If the device
//! never signals readiness the caller spins forever; on bare metal there is
//! nothing else to schedule, so the only way out is a reset.

use core::fmt::{self, Write};

use bitflags::bitflags;

/// Register offsets from the UART base address
pub mod regs {
    /// Transmit Holding Register (write)
    pub const THR: usize = 0x00;
    /// Receive Holding Register (read, aliases THR)
    pub const RHR: usize = 0x00;
    /// Line Status Register (read-only)
    pub const LSR: usize = 0x05;
}

bitflags! {
    /// Line Status Register bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LineStatus: u8 {
        /// A received byte is waiting in RHR.
        const DATA_READY = 1 << 0;
        /// THR is empty and can accept the next byte.
        const THR_EMPTY = 1 << 6;

        // Overrun, parity, framing and break bits are reported but not acted on.
        const _ = !0;
    }
}

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Errors reported by the line reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartError {
    /// The line buffer has no room for the NUL terminator.
    EmptyBuffer,
    /// The line did not fit; `capacity - 1` bytes were stored.
    LineTooLong { capacity: usize },
}

impl fmt::Display for UartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UartError::EmptyBuffer => write!(f, "line buffer has no room for a terminator"),
            UartError::LineTooLong { capacity } => {
                write!(f, "line exceeds buffer capacity of {} bytes", capacity)
            }
        }
    }
}

/// Access to the three UART registers.
///
/// Implementations must perform every call as an observable device access:
/// no caching, merging or reordering.
pub trait UartRegisters {
    /// Read the Line Status Register.
    fn read_status(&mut self) -> LineStatus;

    /// Write a byte to the Transmit Holding Register.
    fn write_byte(&mut self, byte: u8);

    /// Read a byte from the Receive Holding Register.
    fn read_byte(&mut self) -> u8;
}

/// Polled UART driver over a register binding
pub struct Uart<R> {
    regs: R,
}

impl<R: UartRegisters> Uart<R> {
    /// Wrap a register binding.
    pub const fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Borrow the register binding.
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Release the register binding.
    pub fn into_registers(self) -> R {
        self.regs
    }

    /// Poll the status register once for THR_EMPTY.
    pub fn is_transmit_empty(&mut self) -> bool {
        self.regs.read_status().contains(LineStatus::THR_EMPTY)
    }

    /// Poll the status register once for DATA_READY.
    pub fn is_data_ready(&mut self) -> bool {
        self.regs.read_status().contains(LineStatus::DATA_READY)
    }

    /// Transmit one byte.
    ///
    /// Spins until THR is empty, then writes `byte` exactly once.
    pub fn send_byte(&mut self, byte: u8) {
        while !self.is_transmit_empty() {
            core::hint::spin_loop();
        }
        self.regs.write_byte(byte);
    }

    /// Transmit `bytes` in order, stopping at the first NUL.
    ///
    /// The NUL itself is never sent.
    pub fn send_string(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().take_while(|&&b| b != 0) {
            self.send_byte(byte);
        }
    }

    /// Transmit a string slice.
    pub fn send_str(&mut self, s: &str) {
        self.send_string(s.as_bytes());
    }

    /// Receive one byte.
    ///
    /// Spins until DATA_READY is set, then reads RHR. The read clears
    /// DATA_READY in hardware.
    pub fn recv_byte(&mut self) -> u8 {
        while !self.is_data_ready() {
            core::hint::spin_loop();
        }
        self.regs.read_byte()
    }

    /// Receive one byte if one is waiting, without spinning.
    pub fn try_recv_byte(&mut self) -> Option<u8> {
        if self.is_data_ready() {
            Some(self.regs.read_byte())
        } else {
            None
        }
    }

    /// Receive a line into `buf`, echoing every byte as it arrives.
    ///
    /// CR and LF both end the line. The terminator is echoed but not stored,
    /// and only the first one is consumed: after CRLF the LF is still pending.
    /// The stored bytes are always followed by a NUL.
    ///
    /// Returns the number of data bytes stored. If a data byte arrives when
    /// `buf.len() - 1` bytes are already stored, that byte is echoed and
    /// dropped, the buffer is terminated, and `LineTooLong` is returned; the
    /// rest of the line stays unread.
    pub fn recv_line(&mut self, buf: &mut [u8]) -> Result<usize, UartError> {
        let capacity = buf.len();
        if capacity == 0 {
            return Err(UartError::EmptyBuffer);
        }

        let mut len = 0;
        loop {
            let byte = self.recv_byte();
            self.send_byte(byte);

            if byte == CR || byte == LF {
                break;
            }
            if len == capacity - 1 {
                buf[len] = 0;
                return Err(UartError::LineTooLong { capacity });
            }

            buf[len] = byte;
            len += 1;
        }

        buf[len] = 0;
        Ok(len)
    }
}

impl<R: UartRegisters> Write for Uart<R> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.send_str(s);
        Ok(())
    }
}
