//! Core Components
//!
//! The value types the simulation is built from: vectors, fish, and the
//! flock that owns them.

pub mod agent;
pub mod flock;
pub mod vector;

pub use agent::Fish;
pub use flock::Flock;
pub use vector::Vec2;
