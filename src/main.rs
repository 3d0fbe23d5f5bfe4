//! Shoal - Deterministic 2D Flocking Simulation
//!
//! CLI driver: builds a seeded flock, runs the simulation for a fixed
//! number of iterations, and writes one JSON frame per step for an
//! external renderer.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use shoal::{ConfigError, Flock, JsonDirectorySink, SimConfig, SimulationDriver, UpdateMode};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "shoal")]
#[command(about = "A deterministic 2D flocking simulation")]
struct Args {
    /// Random seed for reproducibility (overrides the tuning file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of iterations (one frame is emitted per iteration)
    #[arg(long, default_value_t = 100)]
    iterations: u64,

    /// Number of fish in the flock (overrides the tuning file)
    #[arg(long)]
    population: Option<usize>,

    /// Side length of the square spawn region (overrides the tuning file)
    #[arg(long)]
    extent: Option<f64>,

    /// Speed cap enforced after every step (overrides the tuning file)
    #[arg(long)]
    max_speed: Option<f64>,

    /// Separation rule cutoff distance (overrides the tuning file)
    #[arg(long)]
    neighbor_radius: Option<f64>,

    /// Directory for frame output
    #[arg(long, default_value = "output/frames")]
    out_dir: PathBuf,

    /// Update semantics: sequential (reference) or snapshot
    #[arg(long, value_enum, default_value_t = UpdateMode::Sequential)]
    mode: UpdateMode,

    /// TOML tuning file; without this flag, tuning.toml is used if present
    #[arg(long)]
    tuning: Option<PathBuf>,
}

/// Resolve the run configuration: tuning file first (the default path when
/// no `--tuning` is given), then explicit CLI arguments on top.
fn resolve_config(args: &Args) -> Result<SimConfig, ConfigError> {
    let mut config = match &args.tuning {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::load_or_default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(population) = args.population {
        config.population = population;
    }
    if let Some(extent) = args.extent {
        config.extent = extent;
    }
    if let Some(max_speed) = args.max_speed {
        config.max_speed = max_speed;
    }
    if let Some(neighbor_radius) = args.neighbor_radius {
        config.neighbor_radius = neighbor_radius;
    }
    config.validate()?;
    Ok(config)
}

fn main() {
    let args = Args::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid configuration: {}", e);
            process::exit(1);
        }
    };

    println!("Shoal Flocking Simulation");
    println!("=========================");
    println!("Seed: {}", config.seed);
    println!("Population: {}", config.population);
    println!("Extent: {}", config.extent);
    println!("Max speed: {}", config.max_speed);
    println!("Neighbor radius: {}", config.neighbor_radius);
    println!("Gains: cohesion {}, alignment {}", config.cohesion_gain, config.alignment_gain);
    println!("Iterations: {}", args.iterations);
    println!("Mode: {}", args.mode);
    println!();

    let flock = match Flock::from_config(config) {
        Ok(flock) => flock,
        Err(e) => {
            eprintln!("Error: invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let mut sink = match JsonDirectorySink::new(&args.out_dir) {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!(
                "Error: could not create output directory {}: {}",
                args.out_dir.display(),
                e
            );
            process::exit(1);
        }
    };

    let mut driver = SimulationDriver::with_mode(flock, args.mode);
    println!("Starting simulation...");
    if let Err(e) = driver.run(args.iterations, &mut sink) {
        eprintln!("Error: could not write frame: {}", e);
        process::exit(1);
    }

    println!();
    println!(
        "Simulation complete. Ran {} steps, wrote {} frames to {}.",
        driver.flock().step_count(),
        sink.frames_written(),
        args.out_dir.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_tuning(dir: &std::path::Path, content: &str) -> PathBuf {
        let path = dir.join("tuning.toml");
        fs::write(&path, content).unwrap();
        path
    }

    /// A tuning file's run parameters must survive when the matching CLI
    /// flags are not given.
    #[test]
    fn test_tuning_file_sets_run_parameters() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_tuning(
            tmp.path(),
            "population = 16\nextent = 50.0\ncohesion_gain = 0.25\n",
        );

        let args = Args::parse_from(["shoal", "--tuning", path.to_str().unwrap()]);
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.population, 16);
        assert_eq!(config.extent, 50.0);
        assert_eq!(config.cohesion_gain, 0.25);
        // Fields the file omits keep their defaults
        assert_eq!(config.max_speed, 100.0);
        assert_eq!(config.seed, 42);
    }

    /// Explicit CLI flags win over the tuning file, flag by flag.
    #[test]
    fn test_cli_flags_override_tuning_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_tuning(tmp.path(), "population = 16\nextent = 50.0\nseed = 7\n");

        let args = Args::parse_from([
            "shoal",
            "--tuning",
            path.to_str().unwrap(),
            "--population",
            "32",
            "--max-speed",
            "5.0",
        ]);
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.population, 32);
        assert_eq!(config.max_speed, 5.0);
        // Untouched flags still come from the file
        assert_eq!(config.extent, 50.0);
        assert_eq!(config.seed, 7);
    }

    /// Overrides are validated after merging, not just at file load.
    #[test]
    fn test_invalid_override_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_tuning(tmp.path(), "population = 16\n");

        let args = Args::parse_from([
            "shoal",
            "--tuning",
            path.to_str().unwrap(),
            "--population",
            "0",
        ]);
        assert!(matches!(
            resolve_config(&args),
            Err(ConfigError::EmptyPopulation)
        ));
    }
}
