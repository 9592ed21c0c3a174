//! Trap definitions.
//!
//! This module defines the trap representation produced by the decode stage. It provides:
//! 1. **Trap Representation:** The single synchronous exception this stage can flag.
//! 2. **Error Handling:** Integration with standard Rust error traits for reporting.
//!
//! The decode stage never raises a trap itself: illegality is encoded in the decoded
//! record and converted to a [`Trap`] only by (or on behalf of) the downstream
//! collaborator, which typically responds by trapping.

use thiserror::Error;

/// Trap types visible to the decode stage.
///
/// Covers the decode-local subset of the RISC-V synchronous exceptions; faults raised
/// by the fetch and memory collaborators are defined by those collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Illegal instruction exception.
    ///
    /// Raised when an instruction encoding is invalid or not implemented.
    /// The associated value is the instruction encoding.
    #[error("IllegalInstruction({0:#010x})")]
    IllegalInstruction(u32),
}
