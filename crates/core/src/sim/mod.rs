//! External collaborators of the core: image loading and the run loop.
//!
//! The core itself only exposes [`Cpu::step`](crate::core::Cpu::step);
//! everything here is a caller of it — the loader places a program image
//! before the first step, the runner issues steps until a terminal
//! outcome or its instruction budget runs out.

/// Raw program image loading.
pub mod loader;

/// Budgeted run loop and run reporting.
pub mod runner;

pub use loader::load_image;
pub use runner::{RunOutcome, RunReport, run};
