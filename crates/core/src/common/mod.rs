//! Common types and constants shared across the emulator.
//!
//! This module provides the building blocks every other component relies on:
//! 1. **Constants:** Memory geometry and instruction-field widths.
//! 2. **Error Handling:** The fault taxonomy and the per-step outcome type.

/// Memory and instruction-field constants.
pub mod constants;

/// Fault, outcome, and loader error definitions.
pub mod error;

pub use constants::{MEMORY_SIZE, MEMORY_WORDS};
pub use error::{Fault, LoadError, Outcome};
