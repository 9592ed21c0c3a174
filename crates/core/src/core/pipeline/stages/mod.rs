//! Pipeline stage implementations.

/// Instruction decode stage (control decoding and operand staging).
pub mod decode;

pub use decode::{control, decode};
