//! Command-line configuration.

use crate::application::{DriverOptions, SimulationConfig};
use crate::domain::{Algorithm, Pattern, presets};
use clap::{Parser, ValueEnum};
use std::time::Duration;

/// How the first generation is populated
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeedMode {
    /// A number of randomly placed cells
    Random,
    /// A canned pattern in the middle of the field
    Pattern,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    #[default]
    Serial,
    Parallel,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Serial => Algorithm::Serial,
            AlgorithmArg::Parallel => Algorithm::Parallel,
        }
    }
}

/// Conway's Game of Life in the terminal
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Seeding strategy; asked interactively when omitted
    #[arg(long, value_enum)]
    pub mode: Option<SeedMode>,

    /// Number of cells alive at start (random mode); asked when omitted
    #[arg(long)]
    pub alive: Option<i64>,

    /// Pattern used in pattern mode
    #[arg(long, default_value = "diamond", value_parser = parse_pattern)]
    pub pattern: Pattern,

    /// Seed for the random generator; OS entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between generations in milliseconds
    #[arg(long, default_value_t = 100)]
    pub interval_ms: u64,

    /// Stop after this many generations instead of running forever
    #[arg(long)]
    pub generations: Option<u64>,

    /// Number shown for the initial generation
    #[arg(long, default_value_t = 1)]
    pub first_generation: u64,

    #[arg(long, value_enum, default_value_t = AlgorithmArg::Serial)]
    pub algorithm: AlgorithmArg,

    /// Start immediately instead of waiting for Enter
    #[arg(long)]
    pub no_wait: bool,

    /// Tracing filter directive, e.g. "debug" or "terminal_life=trace"
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn parse_pattern(name: &str) -> Result<Pattern, String> {
    presets::find(name).ok_or_else(|| {
        let known: Vec<_> = presets::all_patterns().iter().map(|p| p.name.to_lowercase()).collect();
        format!("unknown pattern {name:?}, expected one of: {}", known.join(", "))
    })
}

impl Cli {
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            first_generation: self.first_generation,
            algorithm: self.algorithm.into(),
            ..SimulationConfig::default()
        }
    }

    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            interval: Duration::from_millis(self.interval_ms),
            max_generations: self.generations,
            ..DriverOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["terminal_life"]).unwrap();
        assert_eq!(cli.mode, None);
        assert_eq!(cli.pattern, presets::diamond());
        assert_eq!(cli.driver_options(), DriverOptions::default());
        assert_eq!(cli.simulation_config(), SimulationConfig::default());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_full_command_line() {
        let cli = Cli::try_parse_from([
            "terminal_life", "--mode", "random", "--alive", "30", "--seed", "5",
            "--interval-ms", "0", "--generations", "12", "--first-generation", "0",
            "--algorithm", "parallel", "--no-wait",
        ])
        .unwrap();
        assert_eq!(cli.mode, Some(SeedMode::Random));
        assert_eq!(cli.alive, Some(30));
        assert_eq!(cli.seed, Some(5));
        assert!(cli.no_wait);

        let options = cli.driver_options();
        assert!(options.interval.is_zero());
        assert_eq!(options.max_generations, Some(12));

        let config = cli.simulation_config();
        assert_eq!(config.first_generation, 0);
        assert_eq!(config.algorithm, Algorithm::Parallel);
    }

    #[test]
    fn test_negative_alive_parses_for_later_validation() {
        let cli = Cli::try_parse_from(["terminal_life", "--alive=-1"]).unwrap();
        assert_eq!(cli.alive, Some(-1));
    }

    #[test]
    fn test_pattern_lookup() {
        let cli = Cli::try_parse_from(["terminal_life", "--pattern", "Glider"]).unwrap();
        assert_eq!(cli.pattern.name, "Glider");
        assert!(Cli::try_parse_from(["terminal_life", "--pattern", "nope"]).is_err());
    }
}
