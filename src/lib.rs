//! Shoal - Deterministic 2D Flocking Simulation Engine
//!
//! A fixed population of point fish moves in a bounded plane under three
//! local rules: cohesion toward the flock center, short-range separation,
//! and alignment to the flock's mean velocity. The engine produces a
//! deterministic time series of frames for an external renderer; it does
//! no drawing itself.
//!
//! The per-step update is sequential and in place: each fish is rewritten
//! before the next one is read, so the fixed index order is part of the
//! numeric contract. See [`systems::step`] for the details and for the
//! explicitly separate snapshot-update mode.

pub mod components;
pub mod config;
pub mod driver;
pub mod output;
pub mod setup;
pub mod systems;

pub use components::{Fish, Flock, Vec2};
pub use config::{ConfigError, SimConfig};
pub use driver::{FrameSink, SimulationDriver, UpdateMode};
pub use output::{frame_from_flock, FrameSnapshot, JsonDirectorySink};
