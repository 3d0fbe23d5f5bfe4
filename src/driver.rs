//! Simulation Driver
//!
//! Owns a flock and runs the emit-then-step loop. Each iteration hands the
//! current frame to a sink before applying that step's transition, so a
//! run of `n` iterations yields exactly `n` frames, the first being the
//! initial state. The driver performs no numeric work of its own.

use clap::ValueEnum;

use crate::components::Flock;
use crate::output::{frame_from_flock, FrameSnapshot};
use crate::systems::{step, step_snapshot};

/// Which per-step update semantics to run.
///
/// The two modes produce different trajectories after the first step
/// whenever any two fish are within the neighbor radius; `Snapshot` is an
/// explicit opt-in, never a silent substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UpdateMode {
    /// Sequential in-place updates in fixed index order (the reference
    /// semantics)
    #[default]
    Sequential,
    /// Simultaneous updates against a frozen pre-step snapshot
    Snapshot,
}

impl std::fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateMode::Sequential => write!(f, "sequential"),
            UpdateMode::Snapshot => write!(f, "snapshot"),
        }
    }
}

/// Consumer of emitted frames: a renderer, a file writer, a collector.
pub trait FrameSink {
    fn accept(&mut self, frame: &FrameSnapshot) -> std::io::Result<()>;
}

/// Drives a flock through a fixed number of iterations.
pub struct SimulationDriver {
    flock: Flock,
    mode: UpdateMode,
}

impl SimulationDriver {
    pub fn new(flock: Flock) -> Self {
        Self::with_mode(flock, UpdateMode::Sequential)
    }

    pub fn with_mode(flock: Flock, mode: UpdateMode) -> Self {
        Self { flock, mode }
    }

    /// Emit the current frame, then advance the flock by one step.
    pub fn step_once(&mut self, sink: &mut dyn FrameSink) -> std::io::Result<()> {
        let frame = frame_from_flock(&self.flock);
        sink.accept(&frame)?;
        match self.mode {
            UpdateMode::Sequential => step(&mut self.flock),
            UpdateMode::Snapshot => step_snapshot(&mut self.flock),
        }
        Ok(())
    }

    /// Run the full loop for `iterations` steps.
    pub fn run(&mut self, iterations: u64, sink: &mut dyn FrameSink) -> std::io::Result<()> {
        for _ in 0..iterations {
            self.step_once(sink)?;
        }
        Ok(())
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn mode(&self) -> UpdateMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    /// Test sink that keeps every frame in memory.
    #[derive(Default)]
    struct CollectSink {
        frames: Vec<FrameSnapshot>,
    }

    impl FrameSink for CollectSink {
        fn accept(&mut self, frame: &FrameSnapshot) -> std::io::Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    fn small_config() -> SimConfig {
        SimConfig {
            population: 4,
            extent: 20.0,
            max_speed: 2.0,
            neighbor_radius: 10.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_run_emits_exactly_iteration_count_frames() {
        let flock = Flock::from_config(small_config()).unwrap();
        let mut driver = SimulationDriver::new(flock);
        let mut sink = CollectSink::default();

        driver.run(5, &mut sink).unwrap();

        assert_eq!(sink.frames.len(), 5);
        assert_eq!(driver.flock().step_count(), 5);
        for (i, frame) in sink.frames.iter().enumerate() {
            assert_eq!(frame.step, i as u64);
            assert_eq!(frame.population, 4);
        }
    }

    #[test]
    fn test_first_frame_is_pre_step_state() {
        let flock = Flock::from_config(small_config()).unwrap();
        let initial: Vec<_> = flock.fish().to_vec();

        let mut driver = SimulationDriver::new(flock);
        let mut sink = CollectSink::default();
        driver.run(1, &mut sink).unwrap();

        let frame = &sink.frames[0];
        for (fish, snap) in initial.iter().zip(&frame.fish) {
            assert_eq!(snap.position, [fish.position.x, fish.position.y]);
            assert_eq!(snap.velocity, [fish.velocity.x, fish.velocity.y]);
        }
    }

    #[test]
    fn test_zero_iterations_is_a_no_op() {
        let flock = Flock::from_config(small_config()).unwrap();
        let mut driver = SimulationDriver::new(flock);
        let mut sink = CollectSink::default();
        driver.run(0, &mut sink).unwrap();
        assert!(sink.frames.is_empty());
        assert_eq!(driver.flock().step_count(), 0);
    }
}
