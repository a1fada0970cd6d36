//! Game state and the turn engine that drives it.

pub mod logic;
pub mod types;

pub use logic::TurnEngine;
pub use types::{
    Difficulty, EnemyMove, GameState, Interaction, LossReason, Outcome, Phase, Rejection,
    SetupError, Spawn, TurnReport,
};
