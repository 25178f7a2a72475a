//! Simulated 16550 register file for host tests
//!
//! Stands in for the MMIO block: received bytes come from a scripted queue,
//! transmitted bytes are logged, and either direction can be held "not ready"
//! for a number of status polls to exercise the busy-wait loops.

use std::collections::VecDeque;
use std::vec::Vec;

use super::uart::{LineStatus, UartRegisters};

#[derive(Debug, Default)]
pub struct SimRegisters {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
    /// Polls left before THR reports empty.
    tx_busy: usize,
    /// Polls THR stays busy after each write.
    tx_latency: usize,
    /// Polls left before a queued byte reports ready.
    rx_idle: usize,
    /// Polls each queued byte takes to arrive.
    rx_latency: usize,
    status_reads: usize,
    writes_while_busy: usize,
    reads_while_empty: usize,
}

impl SimRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes as if they arrived on the wire.
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Hold THR busy for `polls` status reads now and after every write.
    pub fn set_tx_busy_polls(&mut self, polls: usize) {
        self.tx_busy = polls;
        self.tx_latency = polls;
    }

    /// Hold DATA_READY low for `polls` status reads before each byte.
    pub fn set_rx_idle_polls(&mut self, polls: usize) {
        self.rx_idle = polls;
        self.rx_latency = polls;
    }

    pub fn transmitted(&self) -> &[u8] {
        &self.tx
    }

    pub fn tx_writes(&self) -> usize {
        self.tx.len()
    }

    pub fn pending_input(&self) -> usize {
        self.rx.len()
    }

    pub fn status_reads(&self) -> usize {
        self.status_reads
    }

    pub fn writes_while_busy(&self) -> usize {
        self.writes_while_busy
    }

    pub fn reads_while_empty(&self) -> usize {
        self.reads_while_empty
    }

    fn thr_empty(&self) -> bool {
        self.tx_busy == 0
    }

    fn data_ready(&self) -> bool {
        self.rx_idle == 0 && !self.rx.is_empty()
    }
}

impl UartRegisters for SimRegisters {
    fn read_status(&mut self) -> LineStatus {
        self.status_reads += 1;

        let mut lsr = LineStatus::empty();
        if self.thr_empty() {
            lsr |= LineStatus::THR_EMPTY;
        } else {
            self.tx_busy -= 1;
        }
        if self.data_ready() {
            lsr |= LineStatus::DATA_READY;
        } else if self.rx_idle > 0 && !self.rx.is_empty() {
            self.rx_idle -= 1;
        }
        lsr
    }

    fn write_byte(&mut self, byte: u8) {
        if !self.thr_empty() {
            self.writes_while_busy += 1;
        }
        self.tx.push(byte);
        self.tx_busy = self.tx_latency;
    }

    fn read_byte(&mut self) -> u8 {
        if !self.data_ready() {
            self.reads_while_empty += 1;
            return 0;
        }
        self.rx_idle = self.rx_latency;
        self.rx.pop_front().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_busy_counts_down() {
        let mut sim = SimRegisters::new();
        sim.set_tx_busy_polls(2);

        assert!(!sim.read_status().contains(LineStatus::THR_EMPTY));
        assert!(!sim.read_status().contains(LineStatus::THR_EMPTY));
        assert!(sim.read_status().contains(LineStatus::THR_EMPTY));

        sim.write_byte(b'a');
        assert_eq!(sim.writes_while_busy(), 0);
        assert!(!sim.read_status().contains(LineStatus::THR_EMPTY));
    }

    #[test]
    fn test_rx_idle_line() {
        let mut sim = SimRegisters::new();
        assert!(!sim.read_status().contains(LineStatus::DATA_READY));
        assert_eq!(sim.read_byte(), 0);
        assert_eq!(sim.reads_while_empty(), 1);
    }
}
