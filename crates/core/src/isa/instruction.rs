//! Instruction field extraction utilities.
//!
//! Provides bit extraction functions for decoding RISC-V instruction fields
//! from 32-bit instruction encodings.

use crate::common::constants::{
    FUNCT3_MASK, FUNCT3_SHIFT, FUNCT7_MASK, FUNCT7_SHIFT, GROUP_MASK, GROUP_SHIFT, OPCODE_MASK,
    RD_SHIFT, REG_MASK, RS1_SHIFT, RS2_SHIFT,
};

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract all standard RISC-V instruction fields
/// from a 32-bit instruction encoding.
pub trait InstructionBits {
    /// Extracts the full opcode field (bits 0-6).
    ///
    /// The low two bits must hold the uncompressed-encoding pattern `0b11`
    /// or the instruction is illegal.
    fn opcode(&self) -> u32;

    /// Extracts the 5-bit opcode-group selector (bits 2-6).
    ///
    /// The group selects the instruction's broad category (arithmetic-immediate,
    /// register-register arithmetic, upper-immediate, etc.) and drives both the
    /// format selection and the control decoder.
    fn group(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Returns the 5-bit register index (0-31). Register 0 (x0) is hardwired
    /// to zero and writes are discarded.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between different operations within the same opcode group.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Used to distinguish between standard and alternate encodings
    /// (e.g., ADD vs SUB, SRL vs SRA).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn group(&self) -> u32 {
        (self >> GROUP_SHIFT) & GROUP_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}
