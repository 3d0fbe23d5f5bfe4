//! Simulation Systems
//!
//! The per-step state transition lives here.

pub mod step;

pub use step::{step, step_snapshot};
