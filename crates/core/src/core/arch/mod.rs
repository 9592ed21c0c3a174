//! Architectural state.
//!
//! The general-purpose register file and the write-back bus that the
//! execute/writeback collaborator drives into it.

/// General-purpose register file.
pub mod gpr;

pub use gpr::{Gpr, Writeback};
