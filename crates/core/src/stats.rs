//! Decode statistics collection and reporting.
//!
//! This module tracks handshake activity for the decode stage. It provides:
//! 1. **Cycle accounting:** Total cycles split into transfers, stalls, and bubbles.
//! 2. **Instruction accounting:** Records accepted, records drained, and
//!    illegal encodings observed.
//! 3. **Derived metrics:** Acceptance throughput over the run.

/// Decode statistics structure tracking all handshake activity.
#[derive(Clone, Debug, Default)]
pub struct DecodeStats {
    /// Total clock cycles evaluated.
    pub cycles: u64,
    /// Instructions accepted from the fetch side.
    pub accepted: u64,
    /// Records accepted by the execute side.
    pub drained: u64,
    /// Cycles an instruction was offered but held out by backpressure.
    pub stall_cycles: u64,
    /// Cycles with no instruction offered.
    pub bubble_cycles: u64,
    /// Accepted instructions flagged illegal.
    pub illegal: u64,
}

impl DecodeStats {
    /// Instructions accepted per evaluated cycle (0.0 for an idle run).
    pub fn throughput(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.accepted as f64 / self.cycles as f64
        }
    }

    /// Prints a summary of the collected counters to stdout.
    pub fn report(&self) {
        println!("=== Decode Statistics ===");
        println!("Cycles:        {}", self.cycles);
        println!("Accepted:      {}", self.accepted);
        println!("Drained:       {}", self.drained);
        println!("Stall cycles:  {}", self.stall_cycles);
        println!("Bubble cycles: {}", self.bubble_cycles);
        println!("Illegal:       {}", self.illegal);
        println!("Throughput:    {:.3} inst/cycle", self.throughput());
    }
}
