//! Population Spawning
//!
//! Seeded-random initialization of the fish population.

use rand::rngs::SmallRng;
use rand::Rng;
use std::f64::consts::TAU;

use crate::components::{Fish, Vec2};
use crate::config::SimConfig;

/// Spawn the initial population.
///
/// Draw order is fixed and part of the reproducibility contract: for each
/// fish in index order, position x, position y, speed, heading. Positions
/// are uniform in `[0, extent)` per coordinate; speed is uniform in
/// `[0, max_speed]`; heading is uniform in `[0, 2*pi)`.
pub fn spawn_fish(config: &SimConfig, rng: &mut SmallRng) -> Vec<Fish> {
    let mut fish = Vec::with_capacity(config.population);
    for _ in 0..config.population {
        let x = rng.gen_range(0.0..config.extent);
        let y = rng.gen_range(0.0..config.extent);
        let speed: f64 = rng.gen_range(0.0..=config.max_speed);
        let heading: f64 = rng.gen_range(0.0..TAU);
        let velocity = Vec2::new(heading.cos(), heading.sin()) * speed;
        fish.push(Fish::new(Vec2::new(x, y), velocity));
    }
    fish
}
