//! Step Engine
//!
//! Advances the flock by one discrete time step: the frozen center is
//! computed first, then each fish combines the three rule contributions
//! (cohesion, separation, alignment), its speed is clamped, and the
//! position is integrated with a unit time step.
//!
//! `step` writes each fish back immediately, so fish at lower indices are
//! seen post-update by later fish while higher indices are still pre-step.
//! This sequential coupling is the reference contract: the output depends
//! on the fixed index order. `step_snapshot` is the clearly separate
//! simultaneous-update variant; the two diverge after the first step
//! whenever two fish are within the neighbor radius.

use crate::components::{Fish, Flock, Vec2};

/// Advance the flock by one step with sequential in-place updates.
///
/// Fish are processed strictly in index order and each update is written
/// back before the next fish is read.
pub fn step(flock: &mut Flock) {
    flock.compute_center();
    for i in 0..flock.len() {
        let fish = flock.fish()[i];
        let updated = evolve(flock, fish);
        flock.fish_mut()[i] = updated;
    }
    flock.advance_step();
}

/// Advance the flock by one step against a frozen pre-step snapshot.
///
/// Every fish reads the same immutable start-of-step state; results are
/// written back only after all updates are computed. Numerically distinct
/// from [`step`] and never a drop-in replacement for it.
pub fn step_snapshot(flock: &mut Flock) {
    flock.compute_center();
    let frozen = flock.clone();
    for i in 0..flock.len() {
        let fish = frozen.fish()[i];
        flock.fish_mut()[i] = evolve(&frozen, fish);
    }
    flock.advance_step();
}

/// Combine the three rules, clamp, and integrate a single fish.
fn evolve(flock: &Flock, fish: Fish) -> Fish {
    let delta = cohesion(flock, fish.position)
        + separation(flock, fish.position)
        + alignment(flock, fish.velocity);
    let velocity = clamp_speed(fish.velocity + delta, flock.config().max_speed);
    Fish::new(fish.position + velocity, velocity)
}

/// Rule 1: weak pull toward the frozen flock center.
fn cohesion(flock: &Flock, position: Vec2) -> Vec2 {
    (flock.center_position() - position) * flock.config().cohesion_gain
}

/// Rule 2: unit-vector push away from every fish closer than the neighbor
/// radius. There is no inverse-distance weighting, only the hard cutoff;
/// zero distance is skipped, which also excludes the fish itself.
fn separation(flock: &Flock, position: Vec2) -> Vec2 {
    let radius = flock.config().neighbor_radius;
    let mut push = Vec2::ZERO;
    for other in flock.fish() {
        let diff = position - other.position;
        let dist = diff.norm();
        if dist > 0.0 && dist < radius {
            push += diff * (1.0 / dist);
        }
    }
    push
}

/// Rule 3: weak pull toward the frozen mean velocity.
fn alignment(flock: &Flock, velocity: Vec2) -> Vec2 {
    (flock.center_velocity() - velocity) * flock.config().alignment_gain
}

/// Rescale to exactly `max_speed` when the speed cap is exceeded,
/// preserving direction.
fn clamp_speed(velocity: Vec2, max_speed: f64) -> Vec2 {
    let speed = velocity.norm();
    if speed > max_speed {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}
