//! Instruction format classification and immediate reconstruction.
//!
//! This module rebuilds the sign-extended 32-bit immediate encoded in a RISC-V
//! instruction word. The base ISA scatters immediate bits across the word in
//! format-dependent positions; instead of one extraction routine per format,
//! the immediate is assembled from six bit-segments, each independently
//! selected by the instruction format. This is the canonical way to decode the
//! overlapping immediate encodings without format-specific special-casing
//! downstream.

use crate::isa::rv32i::opcodes;

/// Instruction format, selected by the opcode group.
///
/// Determines which instruction-word bits feed each segment of the
/// reconstructed immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Register-register format; carries no immediate.
    R,
    /// Immediate format (loads, JALR, immediate arithmetic).
    I,
    /// Store format.
    S,
    /// Conditional-branch format.
    B,
    /// Upper-immediate format (LUI, AUIPC).
    U,
    /// Jump format (JAL).
    J,
}

/// Classifies an opcode group into its instruction format.
///
/// Groups outside the base set default to [`Format::R`] (no immediate).
pub fn format_of(group: u32) -> Format {
    match group {
        opcodes::GROUP_LOAD | opcodes::GROUP_OP_IMM | opcodes::GROUP_JALR => Format::I,
        opcodes::GROUP_STORE => Format::S,
        opcodes::GROUP_BRANCH => Format::B,
        opcodes::GROUP_LUI | opcodes::GROUP_AUIPC => Format::U,
        opcodes::GROUP_JAL => Format::J,
        _ => Format::R,
    }
}

/// Reconstructs the sign-extended 32-bit immediate for an instruction.
///
/// Assembles the result from six bit-segments, each selected by `format`.
/// The concatenation (highest segment first) yields the final signed value;
/// [`Format::R`] instructions carry no immediate and yield 0.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding.
/// * `format` - The instruction format selecting the segment sources.
pub fn immediate(inst: u32, format: Format) -> i32 {
    if format == Format::R {
        return 0;
    }

    // All non-U formats sign-extend from instruction bit 31.
    let sign = (inst >> 31) & 1;

    // imm[0]: instruction bit 20 (I) or bit 7 (S); B/U/J immediates have no bit 0.
    let bit_0 = match format {
        Format::I => (inst >> 20) & 1,
        Format::S => (inst >> 7) & 1,
        _ => 0,
    };

    // imm[4:1]: instruction bits 24:21 (I/J) or bits 11:8 (S/B); zero for U.
    let bits_4_1 = match format {
        Format::U => 0,
        Format::I | Format::J => (inst >> 21) & 0xF,
        _ => (inst >> 8) & 0xF,
    };

    // imm[10:5]: instruction bits 30:25 for every format except U.
    let bits_10_5 = match format {
        Format::U => 0,
        _ => (inst >> 25) & 0x3F,
    };

    // imm[11]: instruction bit 7 (B), bit 20 (J), the sign bit (I/S); zero for U.
    let bit_11 = match format {
        Format::U => 0,
        Format::B => (inst >> 7) & 1,
        Format::J => (inst >> 20) & 1,
        _ => sign,
    };

    // imm[19:12]: instruction bits 19:12 verbatim (U/J); else 8 copies of the sign bit.
    let bits_19_12 = match format {
        Format::U | Format::J => (inst >> 12) & 0xFF,
        _ => 0xFF * sign,
    };

    // imm[31:20]: instruction bits 31:20 verbatim (U); else 12 copies of the sign bit.
    let bits_31_20 = match format {
        Format::U => (inst >> 20) & 0xFFF,
        _ => 0xFFF * sign,
    };

    let value = (bits_31_20 << 20)
        | (bits_19_12 << 12)
        | (bit_11 << 11)
        | (bits_10_5 << 5)
        | (bits_4_1 << 1)
        | bit_0;

    value as i32
}
