//! Pipeline Slot and Handshake Tests.
//!
//! Verifies the two-stage ready/valid protocol: throughput, backpressure,
//! exactly-once handoff, the same-cycle drain-and-refill path, and the
//! ungated write-back port.
//!
//! Tests are organised into the following categories:
//!   1. Reset state and input-ready logic
//!   2. Latch, hold, and drain transitions
//!   3. Full-throughput streaming
//!   4. Backpressure
//!   5. Write-back independence and forwarding through the clock

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;
use pretty_assertions::assert_eq;
use rvidu_core::core::arch::Writeback;
use rvidu_core::core::pipeline::latches::FetchBundle;

/// A legal single-cycle instruction with a recognizable destination.
fn marker_inst(rd: u32) -> u32 {
    InstructionBuilder::new().addi(rd, 0, 1).build()
}

// ══════════════════════════════════════════════════════════
// 1. Reset state and input-ready logic
// ══════════════════════════════════════════════════════════

#[test]
fn empty_stage_offers_nothing_and_accepts_anything() {
    let tc = TestContext::new();

    assert!(tc.unit.output().is_none());
    assert!(tc.unit.input_ready(false), "empty: ready without downstream");
    assert!(tc.unit.input_ready(true));
}

#[test]
fn holding_stage_is_ready_only_when_drained() {
    let mut tc = TestContext::new();
    let _ = tc.decode_one(0, marker_inst(1));

    assert!(
        !tc.unit.input_ready(false),
        "holding and downstream stalled: not ready"
    );
    assert!(
        tc.unit.input_ready(true),
        "holding but draining this cycle: ready"
    );
}

// ══════════════════════════════════════════════════════════
// 2. Latch, hold, and drain transitions
// ══════════════════════════════════════════════════════════

#[test]
fn accepted_instruction_is_offered_from_the_next_cycle() {
    let mut tc = TestContext::new();
    let op = tc.decode_one(0x100, marker_inst(1));

    assert_eq!(op.pc, 0x100);
    assert_eq!(tc.unit.output(), Some(&op));
}

#[test]
fn drained_record_clears_the_slot() {
    let mut tc = TestContext::new();
    let _ = tc.decode_one(0x100, marker_inst(1));

    // Downstream accepts, nothing new offered: slot empties.
    tc.unit.clock(None, true, &Writeback::none());
    assert!(tc.unit.output().is_none());
    assert_eq!(tc.unit.stats.drained, 1);
}

#[test]
fn unaccepted_record_is_held_without_downstream_ready() {
    let mut tc = TestContext::new();
    let op = tc.decode_one(0x100, marker_inst(1));

    tc.unit.clock(None, false, &Writeback::none());
    assert_eq!(tc.unit.output(), Some(&op), "record held, not drained");
    assert_eq!(tc.unit.stats.drained, 0);
}

#[test]
fn drain_and_refill_in_the_same_cycle() {
    let mut tc = TestContext::new();
    let first = tc.decode_one(0x100, marker_inst(1));
    let second = tc.decode_one(0x104, marker_inst(2));

    assert_ne!(first, second);
    assert_eq!(tc.unit.output(), Some(&second));
    assert_eq!(tc.unit.stats.accepted, 2);
    assert_eq!(tc.unit.stats.drained, 1, "first record retired on refill");
}

// ══════════════════════════════════════════════════════════
// 3. Full-throughput streaming
// ══════════════════════════════════════════════════════════

#[test]
fn one_record_per_cycle_with_no_drops_or_duplicates() {
    let mut tc = TestContext::new();
    let count = 16u32;

    let mut seen = Vec::new();
    for i in 0..count {
        let bundle = FetchBundle {
            pc: 0x1000 + i * 4,
            inst: marker_inst(1 + (i % 8)),
        };
        tc.unit.clock(Some(&bundle), true, &Writeback::none());
        if let Some(op) = tc.unit.output() {
            seen.push(op.pc);
        }
    }
    // Final drain cycle.
    tc.unit.clock(None, true, &Writeback::none());

    let expected: Vec<u32> = (0..count).map(|i| 0x1000 + i * 4).collect();
    assert_eq!(seen, expected, "every record observed exactly once, in order");
    assert!(tc.unit.output().is_none());
    assert_eq!(tc.unit.stats.accepted, u64::from(count));
    assert_eq!(tc.unit.stats.drained, u64::from(count));
    assert_eq!(tc.unit.stats.stall_cycles, 0);
}

// ══════════════════════════════════════════════════════════
// 4. Backpressure
// ══════════════════════════════════════════════════════════

#[test]
fn held_record_is_bit_identical_across_stalled_cycles() {
    let mut tc = TestContext::new();
    tc.set_reg(5, 0xAABB_CCDD);
    let inst = InstructionBuilder::new().addi(1, 5, 3).build();
    let held = tc.decode_one(0x100, inst);

    let next = FetchBundle {
        pc: 0x104,
        inst: marker_inst(2),
    };
    for cycle in 0..5 {
        tc.unit.clock(Some(&next), false, &Writeback::none());
        assert_eq!(
            tc.unit.output(),
            Some(&held),
            "cycle {cycle}: held record must not change under backpressure"
        );
    }

    assert_eq!(tc.unit.stats.accepted, 1, "stalled input never entered");
    assert_eq!(tc.unit.stats.stall_cycles, 5);
}

#[test]
fn stalled_input_enters_once_backpressure_lifts() {
    let mut tc = TestContext::new();
    let _ = tc.decode_one(0x100, marker_inst(1));

    let next = FetchBundle {
        pc: 0x104,
        inst: marker_inst(2),
    };
    tc.unit.clock(Some(&next), false, &Writeback::none());
    tc.unit.clock(Some(&next), true, &Writeback::none());

    let op = tc.unit.output().copied();
    assert_eq!(op.map(|o| o.pc), Some(0x104));
    assert_eq!(tc.unit.stats.accepted, 2);
}

#[test]
fn stall_does_not_recompute_the_held_record() {
    // The held record was decoded at admission; register writes landing while
    // it waits must not leak into it.
    let mut tc = TestContext::new();
    tc.set_reg(5, 1);
    let inst = InstructionBuilder::new().addi(1, 5, 0).build();
    let held = tc.decode_one(0x100, inst);
    assert_eq!(held.op1, 1);

    tc.unit.clock(None, false, &Writeback::write(5, 99));
    let op = tc.unit.output().copied();
    assert_eq!(op.map(|o| o.op1), Some(1), "operand captured at admission");
    assert_eq!(tc.get_reg(5), 99, "register file still updated");
}

// ══════════════════════════════════════════════════════════
// 5. Write-back independence and forwarding
// ══════════════════════════════════════════════════════════

#[test]
fn write_back_lands_while_the_stage_is_idle() {
    let mut tc = TestContext::new();
    tc.unit.clock(None, true, &Writeback::write(9, 77));

    assert_eq!(tc.get_reg(9), 77);
    assert!(tc.unit.output().is_none());
}

#[test]
fn write_back_lands_while_the_stage_is_stalled() {
    let mut tc = TestContext::new();
    let _ = tc.decode_one(0x100, marker_inst(1));

    tc.unit.clock(None, false, &Writeback::write(9, 77));
    assert_eq!(tc.get_reg(9), 77);
}

#[test]
fn same_cycle_write_back_forwards_into_decode() {
    let mut tc = TestContext::new();
    tc.set_reg(5, 1);

    let bundle = FetchBundle {
        pc: 0x100,
        inst: InstructionBuilder::new().addi(1, 5, 0).build(),
    };
    tc.unit.clock(Some(&bundle), true, &Writeback::write(5, 2));

    let op = tc.unit.output().copied();
    assert_eq!(op.map(|o| o.op1), Some(2), "write value wins over stored");
    assert_eq!(tc.get_reg(5), 2, "and the write still commits");
}

#[test]
fn forwarding_never_resurrects_x0() {
    let mut tc = TestContext::new();

    let bundle = FetchBundle {
        pc: 0x100,
        inst: InstructionBuilder::new().addi(1, 0, 0).build(),
    };
    tc.unit.clock(Some(&bundle), true, &Writeback::write(0, 55));

    let op = tc.unit.output().copied();
    assert_eq!(op.map(|o| o.op1), Some(0));
    assert_eq!(tc.get_reg(0), 0);
}

#[test]
fn cycle_accounting_distinguishes_bubbles_from_stalls() {
    let mut tc = TestContext::new();
    tc.idle(3);
    let _ = tc.decode_one(0x100, marker_inst(1));
    let next = FetchBundle {
        pc: 0x104,
        inst: marker_inst(2),
    };
    tc.unit.clock(Some(&next), false, &Writeback::none());

    assert_eq!(tc.unit.stats.bubble_cycles, 3);
    assert_eq!(tc.unit.stats.stall_cycles, 1);
    assert_eq!(tc.unit.stats.cycles, 5);
}
