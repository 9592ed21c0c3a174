//! Decode Unit definition and clocking.
//!
//! This module defines the `DecodeUnit` structure, the enclosing object for
//! the whole stage. It coordinates the following once per cycle:
//! 1. **Handshake Evaluation:** Decides whether a new instruction enters and
//!    whether the held record leaves, from the two ready/valid signal pairs.
//! 2. **Decode Evaluation:** Runs the combinational decode at the moment an
//!    instruction is admitted.
//! 3. **Write-Back Commit:** Applies the collaborator's register write every
//!    cycle, independent of the handshake, with same-cycle read forwarding.
//!
//! Collaborators read `output()` and `input_ready()` before the clock edge and
//! present the next cycle's inputs to `clock()`; this mirrors the
//! evaluate-then-latch ordering of the hardware.

use tracing::trace;

use crate::config::Config;
use crate::core::arch::{Gpr, Writeback};
use crate::core::pipeline::latches::{FetchBundle, MicroOp};
use crate::core::pipeline::slot::PipelineSlot;
use crate::core::pipeline::stages;
use crate::stats::DecodeStats;

/// The instruction-decode unit: register file, pipeline slot, and statistics.
///
/// The register file is owned here and threaded explicitly into each decode
/// evaluation; there is no ambient mutable state.
#[derive(Debug)]
pub struct DecodeUnit {
    /// General-purpose register file.
    pub regs: Gpr,
    /// Handshake activity counters.
    pub stats: DecodeStats,
    slot: PipelineSlot,
    trace: bool,
}

impl DecodeUnit {
    /// Creates a new decode unit with an empty slot and zeroed registers.
    ///
    /// # Arguments
    ///
    /// * `config` - Model configuration (observability switches).
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            stats: DecodeStats::default(),
            slot: PipelineSlot::new(),
            trace: config.trace_decode,
        }
    }

    /// Whether the stage can accept an instruction this cycle (input-ready).
    ///
    /// Combinational in `output_ready`: a new instruction may enter the same
    /// cycle the held record is accepted downstream.
    pub const fn input_ready(&self, output_ready: bool) -> bool {
        self.slot.input_ready(output_ready)
    }

    /// The decoded record currently offered downstream (output-valid + payload).
    pub fn output(&self) -> Option<&MicroOp> {
        self.slot.output()
    }

    /// Advances the unit by one clock cycle.
    ///
    /// `input` models the fetch interface: `Some` carries input-valid plus the
    /// instruction/PC payload. `output_ready` is the execute stage's ready
    /// signal for the record currently offered. `wb` is the write-back bus,
    /// applied every cycle regardless of the handshake; a write this cycle
    /// forwards into any same-cycle register read of the same index.
    pub fn clock(&mut self, input: Option<&FetchBundle>, output_ready: bool, wb: &Writeback) {
        self.stats.cycles += 1;

        let fire_in = input.is_some() && self.slot.input_ready(output_ready);
        let fire_out = self.slot.output().is_some() && output_ready;

        if fire_out {
            self.stats.drained += 1;
        }

        match input {
            Some(bundle) if fire_in => {
                let op = stages::decode(bundle, &self.regs, wb);
                if self.trace {
                    trace!(
                        pc = op.pc,
                        inst = op.inst,
                        illegal = op.illegal,
                        refill = fire_out,
                        "decode: latch"
                    );
                }
                self.stats.accepted += 1;
                if op.illegal {
                    self.stats.illegal += 1;
                }
                self.slot.latch(op);
            }
            Some(bundle) => {
                // Offered but not admitted: pure backpressure, the record holds.
                if self.trace {
                    trace!(pc = bundle.pc, "decode: stall");
                }
                self.stats.stall_cycles += 1;
            }
            None => {
                self.stats.bubble_cycles += 1;
                if fire_out {
                    self.slot.drain();
                }
            }
        }

        self.regs.write_back(wb);
    }
}

impl Default for DecodeUnit {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
