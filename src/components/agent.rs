//! Fish Agent
//!
//! A single simulated point mass. Fish have no identity of their own;
//! a fish is identified by its index within the flock, fixed at spawn.

use super::vector::Vec2;

/// One fish: a position and a velocity in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fish {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Fish {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Current speed.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}
