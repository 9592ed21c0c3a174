//! Decode unit implementation.
//!
//! This module contains the stateful parts of the model: the architectural
//! register file, the pipeline slot and its handshake, the combinational
//! decode stage, and the unit that owns them and advances them by one clock
//! cycle at a time.

/// Architecture-specific components (register file, write-back bus).
pub mod arch;

/// Pipeline components (signals, latches, slot, decode stage).
pub mod pipeline;

/// The enclosing decode-unit object.
pub mod unit;

pub use self::unit::DecodeUnit;
