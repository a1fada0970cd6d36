//! Simulation configuration.

use crate::config::RulesConfig;
use crate::game::Difficulty;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Games still running after this many turns count as timed out
    pub max_turns: u32,

    pub difficulty: Difficulty,

    /// Spawn and ramp tuning under test
    pub rules: RulesConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_turns: 200,
            difficulty: Difficulty::Easy,
            rules: RulesConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for comparing one difficulty against the others
    pub fn difficulty_sweep(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            num_runs: 200,
            seed: Some(seed),
            difficulty,
            ..Default::default()
        }
    }
}
