//! Fault and outcome definitions.
//!
//! This module defines the error handling surface of the emulator:
//! 1. **Faults:** The two terminal fault categories a step can produce.
//! 2. **Outcomes:** The tagged result value returned from every step.
//! 3. **Loader Errors:** Failures while placing a program image in memory.
//!
//! There is no stack-unwinding control flow anywhere in the core: halting,
//! faulting, and continuing are all ordinary values.

use serde::Serialize;
use thiserror::Error;

use super::constants::MEMORY_SIZE;

/// A terminal fault raised during a step.
///
/// Every fault ends the run; there is no instruction-level retry. The
/// payload identifies the faulting entity for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
pub enum Fault {
    /// The opcode/funct combination does not name a defined instruction.
    ///
    /// The associated value is the raw instruction encoding.
    #[error("illegal instruction ({0:#010x})")]
    IllegalInstruction(u32),

    /// A memory access or program-counter value fell outside the valid
    /// range, or violated natural alignment.
    ///
    /// The associated value is the faulting byte address.
    #[error("out of bounds access ({0:#010x})")]
    OutOfBounds(u32),
}

/// Result of executing a single instruction.
///
/// `Continue` means the machine advanced (or redirected) its program
/// counter and the run loop may issue the next step. `Halt` and `Fault`
/// are terminal for the run; `Halt` is the deliberate end-of-program
/// sentinel and is not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The step completed; the next instruction may be fetched.
    Continue,
    /// The program signalled normal termination (zero-offset JAL).
    Halt,
    /// The step raised a terminal fault.
    Fault(Fault),
}

/// Failure while loading a program image, before execution starts.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("failed to read image '{path}': {source}")]
    Io {
        /// Path that was passed to the loader.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The image does not fit in memory.
    #[error("image is {len} bytes but memory holds only {MEMORY_SIZE}")]
    TooLarge {
        /// Length of the rejected image in bytes.
        len: usize,
    },
}
