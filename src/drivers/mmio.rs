//! Memory-mapped 16550 register binding
//!
//! Binds `UartRegisters` to real device memory. Every access is a single
//! volatile byte read or write so the compiler can neither elide nor reorder
//! it.

use core::ptr::{read_volatile, write_volatile};

use super::uart::{regs, LineStatus, UartRegisters};

/// 16550 register block at a fixed physical address
#[derive(Debug)]
pub struct Mmio16550 {
    base: usize,
}

impl Mmio16550 {
    /// Bind the register block at `base`.
    ///
    /// # Safety
    /// `base` must map an NS16550-compatible register block for the lifetime
    /// of the returned value, and nothing else may drive the same registers.
    ///
    /// SAFETY AUDIT: 2026-10-18
    /// - The only firmware caller is `console::CONSOLE`, at `config::UART_BASE`
    /// - QEMU virt maps UART0 at 0x1000_0000 for the whole run
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Base address of the register block.
    pub const fn base(&self) -> usize {
        self.base
    }

    #[inline(always)]
    fn reg(&self, offset: usize) -> *mut u8 {
        (self.base + offset) as *mut u8
    }
}

impl UartRegisters for Mmio16550 {
    #[inline]
    fn read_status(&mut self) -> LineStatus {
        // SAFETY: `new` guarantees the block is mapped; LSR reads have no
        // side effects on the 16550.
        // Audited: 2026-10-18
        LineStatus::from_bits_retain(unsafe { read_volatile(self.reg(regs::LSR)) })
    }

    #[inline]
    fn write_byte(&mut self, byte: u8) {
        // SAFETY: `new` guarantees the block is mapped.
        // Audited: 2026-10-18
        unsafe { write_volatile(self.reg(regs::THR), byte) }
    }

    #[inline]
    fn read_byte(&mut self) -> u8 {
        // SAFETY: `new` guarantees the block is mapped. The read pops the RX
        // holding register.
        // Audited: 2026-10-18
        unsafe { read_volatile(self.reg(regs::RHR)) }
    }
}
