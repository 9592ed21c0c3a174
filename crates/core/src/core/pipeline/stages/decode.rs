//! Instruction Decode (ID) Stage.
//!
//! This module implements the combinational half of the decode stage. It
//! performs the following, all as pure functions of the fetch bundle and the
//! current register-file state:
//! 1. **Legality:** Checks the uncompressed-encoding pattern and maps the
//!    opcode group and function codes to a recognized operation or flags the
//!    record illegal.
//! 2. **Control Generation:** Produces the arithmetic-unit control flags for
//!    the execute stage.
//! 3. **Register Read:** Reads the enabled source operands with same-cycle
//!    write forwarding.
//! 4. **Operand Staging:** Wires the four operand slots and the hazard and
//!    write-back metadata of the micro-operation record.

use crate::common::constants::{OPCODE_LOW_MASK, OPCODE_LOW_UNCOMPRESSED, PC_STEP};
use crate::core::arch::{Gpr, Writeback};
use crate::core::pipeline::latches::{FetchBundle, MicroOp};
use crate::core::pipeline::signals::{AluFn, ControlSignals, MemWidth};
use crate::isa::decode::{format_of, immediate};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Decodes the arithmetic-unit control flags for one instruction.
///
/// Pure total function of the opcode group and function codes. Unrecognized
/// combinations leave the default control state with `valid` clear; together
/// with the opcode low-bit check in [`decode`], that is how malformed
/// instructions are flagged illegal. This function has no error path and
/// never faults itself.
///
/// # Arguments
///
/// * `group` - 5-bit opcode-group selector (opcode bits 6:2).
/// * `funct3` - 3-bit function code.
/// * `funct7` - 7-bit extended function code.
pub fn control(group: u32, funct3: u32, funct7: u32) -> ControlSignals {
    let mut c = ControlSignals::default();

    match group {
        // Plain add/pass-through; operand wiring supplies the immediate.
        opcodes::GROUP_LUI | opcodes::GROUP_AUIPC => {
            c.valid = true;
        }
        opcodes::GROUP_OP_IMM => match funct3 {
            funct3::ADD_SUB => {
                c.valid = true;
            }
            funct3::SLT => {
                c.carry_in = true;
                c.op = AluFn::Compare;
                c.valid = true;
            }
            funct3::SLTU => {
                c.carry_in = true;
                c.unsigned = true;
                c.op = AluFn::Compare;
                c.valid = true;
            }
            funct3::XOR => {
                c.op = AluFn::Xor;
                c.valid = true;
            }
            funct3::OR => {
                c.op = AluFn::Or;
                c.valid = true;
            }
            funct3::AND => {
                c.op = AluFn::And;
                c.valid = true;
            }
            // Left shifts run reversed through the right shifter; the shift
            // amount lives in the immediate field, so funct7 must be clear.
            funct3::SLL => {
                c.reverse = true;
                c.unsigned = true;
                c.op = AluFn::Shift;
                c.valid = funct7 == funct7::DEFAULT;
            }
            funct3::SRL_SRA => match funct7 {
                funct7::DEFAULT => {
                    c.unsigned = true;
                    c.op = AluFn::Shift;
                    c.valid = true;
                }
                funct7::SRA => {
                    c.op = AluFn::Shift;
                    c.valid = true;
                }
                _ => {}
            },
            _ => {}
        },
        // Same eight sub-operations, but every funct3 additionally validates
        // funct7: ADD/SUB and SRL/SRA accept the alternate encoding, the rest
        // require exactly zero.
        opcodes::GROUP_OP => match funct3 {
            funct3::ADD_SUB => match funct7 {
                funct7::DEFAULT => {
                    c.valid = true;
                }
                funct7::SUB => {
                    c.carry_in = true;
                    c.valid = true;
                }
                _ => {}
            },
            funct3::SLL => {
                c.reverse = true;
                c.unsigned = true;
                c.op = AluFn::Shift;
                c.valid = funct7 == funct7::DEFAULT;
            }
            funct3::SLT => {
                c.carry_in = true;
                c.op = AluFn::Compare;
                c.valid = funct7 == funct7::DEFAULT;
            }
            funct3::SLTU => {
                c.carry_in = true;
                c.unsigned = true;
                c.op = AluFn::Compare;
                c.valid = funct7 == funct7::DEFAULT;
            }
            funct3::XOR => {
                c.op = AluFn::Xor;
                c.valid = funct7 == funct7::DEFAULT;
            }
            funct3::SRL_SRA => match funct7 {
                funct7::DEFAULT => {
                    c.unsigned = true;
                    c.op = AluFn::Shift;
                    c.valid = true;
                }
                funct7::SRA => {
                    c.op = AluFn::Shift;
                    c.valid = true;
                }
                _ => {}
            },
            funct3::OR => {
                c.op = AluFn::Or;
                c.valid = funct7 == funct7::DEFAULT;
            }
            funct3::AND => {
                c.op = AluFn::And;
                c.valid = funct7 == funct7::DEFAULT;
            }
            _ => {}
        },
        _ => {}
    }

    c
}

/// Load width and sign-extension from the load-group function code.
const fn load_width(funct3: u32) -> (MemWidth, bool) {
    match funct3 {
        funct3::LB => (MemWidth::Byte, true),
        funct3::LH => (MemWidth::Half, true),
        funct3::LW => (MemWidth::Word, true),
        funct3::LBU => (MemWidth::Byte, false),
        funct3::LHU => (MemWidth::Half, false),
        _ => (MemWidth::Nop, false),
    }
}

/// Evaluates the decode stage for one accepted instruction.
///
/// Builds the complete micro-operation record from the fetch bundle, the
/// register file, and this cycle's write-back bus (for same-cycle
/// forwarding). Register read ports are only enabled when the opcode group
/// sources an operand from a register; disabled ports report index zero in
/// the hazard fields.
///
/// Malformed instructions still produce a well-formed record: classification
/// and write-back fields follow their raw combinational rules, arithmetic
/// fields hold defaults, and the `illegal` flag is set.
///
/// # Arguments
///
/// * `bundle` - The instruction word and program counter accepted this cycle.
/// * `regs` - The register file, read through the forwarding path.
/// * `wb` - This cycle's write-back bus state.
pub fn decode(bundle: &FetchBundle, regs: &Gpr, wb: &Writeback) -> MicroOp {
    let inst = bundle.inst;
    let group = inst.group();
    let imm = immediate(inst, format_of(group)) as u32;

    let ctrl = control(group, inst.funct3(), inst.funct7());

    // One or two read ports are enabled depending on the opcode group.
    let (rs1_read, rs2_read) = match group {
        opcodes::GROUP_OP_IMM => (true, false),
        opcodes::GROUP_OP => (true, true),
        _ => (false, false),
    };
    let rv1 = if rs1_read {
        regs.read_forwarded(inst.rs1(), wb)
    } else {
        0
    };
    let rv2 = if rs2_read {
        regs.read_forwarded(inst.rs2(), wb)
    } else {
        0
    };

    // Operand staging: defaults first, then the opcode-group override.
    let mut op1 = bundle.pc;
    let mut op2 = PC_STEP;
    let op3 = bundle.pc;
    let op4 = 0;
    match group {
        opcodes::GROUP_LUI => {
            op1 = 0;
            op2 = imm;
        }
        opcodes::GROUP_AUIPC => {
            op2 = imm;
        }
        opcodes::GROUP_OP_IMM => {
            op1 = rv1;
            op2 = imm;
        }
        opcodes::GROUP_OP => {
            op1 = rv1;
            op2 = rv2;
        }
        _ => {}
    }

    let (width, signed_load) = if group == opcodes::GROUP_LOAD {
        load_width(inst.funct3())
    } else {
        (MemWidth::Nop, false)
    };

    let rd = inst.rd();
    let low_bits_ok = (inst.opcode() & OPCODE_LOW_MASK) == OPCODE_LOW_UNCOMPRESSED;

    MicroOp {
        pc: bundle.pc,
        inst,
        op1,
        op2,
        op3,
        op4,
        ctrl,
        rs1: if rs1_read { inst.rs1() } else { 0 },
        rs2: if rs2_read { inst.rs2() } else { 0 },
        rs1_read,
        rs2_read,
        rd,
        // x0 is never a legal write target; writes to it are discarded by
        // convention, so the enable simply tracks a nonzero index.
        rd_write: rd != 0,
        jump: group == opcodes::GROUP_JAL || group == opcodes::GROUP_JALR,
        branch: group == opcodes::GROUP_BRANCH,
        width,
        signed_load,
        store: group == opcodes::GROUP_STORE,
        illegal: !ctrl.valid || !low_bits_ok,
    }
}
