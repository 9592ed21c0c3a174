//! RV32I base integer instruction set constants.
//!
//! Opcode groups and function codes for the base integer instruction set.
//! The decode stage validates only the arithmetic and upper-immediate groups;
//! the remaining groups are classified for the downstream collaborators but
//! decode as illegal here.

/// Function code (funct3) constants.
pub mod funct3;

/// Extended function code (funct7) constants.
pub mod funct7;

/// Opcode-group constants (opcode bits 6:2).
pub mod opcodes;
