//! uart-echo - polled serial I/O for the RISC-V `virt` machine
//!
//! A driver for the single NS16550A UART of QEMU's `virt` board and the
//! echo program that uses it.
//!
//! # Layout
//! - `drivers::uart`: the polling protocol over a register-access trait
//! - `drivers::mmio`: volatile binding of that trait to device memory
//! - `console`: the global console UART and `kprint!`/`kprintln!`
//! - `logger`: `log` facade backend on the console
//! - `echo`: prompt, read a line, send it back
//!
//! The library builds `no_std`; unit tests run on the host against a
//! simulated register file.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod console;
pub mod drivers;
pub mod echo;
pub mod logger;
