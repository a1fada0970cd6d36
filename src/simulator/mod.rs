//! Headless balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of games with a greedy bot to measure:
//! - Win rate per difficulty
//! - How games are lost (King captured vs. army wiped out)
//! - Game length and zombie pressure
//!
//! Every run drives the real [`crate::game::TurnEngine`], so results match
//! actual play.

mod bot;
mod config;
mod report;
mod runner;

pub use bot::{choose_player_move, BotAction};
pub use config::SimConfig;
pub use report::{RunOutcome, RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
