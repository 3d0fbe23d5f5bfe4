//! Flock State
//!
//! The fixed-size fish population plus its derived center. The fish vector
//! is ordered; a fish's index is its identity and also its processing order
//! during a step, which is part of the observable contract (see
//! `systems::step`).

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{ConfigError, SimConfig};
use crate::setup;

use super::agent::Fish;
use super::vector::Vec2;

/// The full population of fish plus its derived center.
///
/// `center_position` / `center_velocity` are recomputed at the start of
/// every step and frozen for that step; between steps they hold the values
/// from the most recent step and carry no other meaning.
#[derive(Debug, Clone)]
pub struct Flock {
    fish: Vec<Fish>,
    config: SimConfig,
    center_position: Vec2,
    center_velocity: Vec2,
    step_count: u64,
}

impl Flock {
    /// Build a flock by seeded-random spawning.
    ///
    /// Fail-fast: an invalid configuration produces no flock and no
    /// partial state.
    pub fn from_config(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let fish = setup::spawn_fish(&config, &mut rng);
        Ok(Self::assemble(fish, config))
    }

    /// Build a flock from explicit fish states, e.g. for hand-set scenarios.
    ///
    /// The population count is taken from `fish`; the configuration's
    /// `population` field is overridden to match.
    pub fn with_fish(mut config: SimConfig, fish: Vec<Fish>) -> Result<Self, ConfigError> {
        if fish.is_empty() {
            return Err(ConfigError::EmptyPopulation);
        }
        config.population = fish.len();
        config.validate()?;
        Ok(Self::assemble(fish, config))
    }

    fn assemble(fish: Vec<Fish>, config: SimConfig) -> Self {
        Self {
            fish,
            config,
            center_position: Vec2::ZERO,
            center_velocity: Vec2::ZERO,
            step_count: 0,
        }
    }

    /// Arithmetic mean of all positions and all velocities.
    ///
    /// Called exactly once per step, before any fish has been updated, so
    /// that every rule in the step reads the same frozen center.
    pub fn compute_center(&mut self) {
        let mut position_sum = Vec2::ZERO;
        let mut velocity_sum = Vec2::ZERO;
        for fish in &self.fish {
            position_sum += fish.position;
            velocity_sum += fish.velocity;
        }
        let inv_n = 1.0 / self.fish.len() as f64;
        self.center_position = position_sum * inv_n;
        self.center_velocity = velocity_sum * inv_n;
    }

    pub fn fish(&self) -> &[Fish] {
        &self.fish
    }

    pub(crate) fn fish_mut(&mut self) -> &mut [Fish] {
        &mut self.fish
    }

    pub(crate) fn advance_step(&mut self) {
        self.step_count += 1;
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Center of mass frozen at the start of the most recent step.
    pub fn center_position(&self) -> Vec2 {
        self.center_position
    }

    /// Mean velocity frozen at the start of the most recent step.
    pub fn center_velocity(&self) -> Vec2 {
        self.center_velocity
    }

    /// Number of completed steps.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}
