//! RV32I extended function codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes between operations that share
//! the same `funct3`. Only two values are architecturally permitted in the base
//! integer set; any other value decodes as illegal.

/// Default operation (ADD, SRL, SLL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
/// Used to distinguish SUB from ADD, and SRA from SRL.
pub const SUB: u32 = 0b0100000;
/// Alias for SUB (used for Shift Right Arithmetic).
pub const SRA: u32 = 0b0100000;
