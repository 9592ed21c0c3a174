//! Decode pipeline implementation.
//!
//! This module contains the pieces the decode stage is built from:
//! 1. **Signals:** ALU control flags generated during instruction decode.
//! 2. **Latches:** The inter-stage records carried into and out of the stage.
//! 3. **Slot:** The single-entry pipeline register and its ready/valid handshake.
//! 4. **Stages:** The combinational decode evaluation.

/// Inter-stage records (fetch bundle in, micro-operation out).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Single-entry pipeline register with ready/valid flow control.
pub mod slot;

/// Pipeline stage implementations (decode).
pub mod stages;
