//! Frame Schemas
//!
//! Serialization structs for the per-step frames handed to a renderer.
//! A frame captures every fish's state, in flock index order, as it exists
//! before the tagged step's transition is applied.

use serde::{Deserialize, Serialize};

use crate::components::Flock;

/// One fish as seen by a renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishSnapshot {
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    /// Velocity heading in radians (`atan2(vy, vx)`); renderers color or
    /// orient markers by it.
    pub heading: f64,
}

/// The complete per-step snapshot of the flock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Step counter at emission time; the first frame is step 0
    pub step: u64,
    pub population: usize,
    /// Fish in flock index order, same order every frame
    pub fish: Vec<FishSnapshot>,
}

/// Build the frame for the flock's current state.
pub fn frame_from_flock(flock: &Flock) -> FrameSnapshot {
    let fish = flock
        .fish()
        .iter()
        .map(|f| FishSnapshot {
            position: [f.position.x, f.position.y],
            velocity: [f.velocity.x, f.velocity.y],
            heading: f.velocity.angle(),
        })
        .collect();

    FrameSnapshot {
        step: flock.step_count(),
        population: flock.len(),
        fish,
    }
}
