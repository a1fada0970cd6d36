//! Zombie Chess - turn-based rules engine
//!
//! The player escorts a King from the bottom row to the top row of an 8x8
//! board while zombie chess pieces spawn on the top row and close in. This
//! crate holds the rules only: movement, the turn engine, zombie behavior,
//! spawning, and a headless balance simulator. Rendering and input belong to
//! whatever front-end drives [`TurnEngine`].

pub mod board;
pub mod config;
pub mod constants;
pub mod enemy;
pub mod game;
pub mod movement;
pub mod simulator;

pub use board::{Board, Faction, Piece, PieceKind, Position, StartingLayout};
pub use config::{ConfigError, RulesConfig};
pub use game::{Difficulty, GameState, Outcome, Phase, Rejection, TurnEngine, TurnReport};
