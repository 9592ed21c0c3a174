//! RV32I opcode groups.
//!
//! Defines the 5-bit opcode-group selectors (opcode bits 6:2) for the base
//! integer instruction set.

/// Load instructions (LB, LH, LW, LBU, LHU).
pub const GROUP_LOAD: u32 = 0b00000;

/// Memory ordering instructions (FENCE).
pub const GROUP_MISC_MEM: u32 = 0b00011;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const GROUP_OP_IMM: u32 = 0b00100;

/// Add Upper Immediate to PC (AUIPC).
pub const GROUP_AUIPC: u32 = 0b00101;

/// Store instructions (SB, SH, SW).
pub const GROUP_STORE: u32 = 0b01000;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const GROUP_OP: u32 = 0b01100;

/// Load Upper Immediate (LUI).
pub const GROUP_LUI: u32 = 0b01101;

/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const GROUP_BRANCH: u32 = 0b11000;

/// Jump and Link Register (JALR).
pub const GROUP_JALR: u32 = 0b11001;

/// Jump and Link (JAL).
pub const GROUP_JAL: u32 = 0b11011;

/// System instructions (ECALL, EBREAK, CSR access).
pub const GROUP_SYSTEM: u32 = 0b11100;
