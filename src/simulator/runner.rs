//! Main simulation runner.
//!
//! Each run plays one full game through [`TurnEngine`] with the greedy bot
//! at the controls. Statistics are tracked externally from [`TurnReport`]s.

use super::bot::{choose_player_move, BotAction};
use super::config::SimConfig;
use super::report::{RunOutcome, RunStats, SimReport};
use crate::board::PieceKind;
use crate::game::{Outcome, TurnEngine, TurnReport};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            info!(
                run = run_idx + 1,
                of = config.num_runs,
                outcome = ?run_stats.outcome,
                turns = run_stats.turns,
                spawned = run_stats.enemies_spawned,
                captured = run_stats.enemies_captured,
                "run finished"
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs, config.difficulty)
}

/// Tracks statistics during a simulation run.
/// Accumulates data from TurnReport events.
#[derive(Default)]
struct SimStats {
    enemies_spawned: u32,
    enemies_captured: u32,
    pieces_lost: u32,
}

impl SimStats {
    fn process_turn(&mut self, report: &TurnReport) {
        self.enemies_spawned += report.spawned.len() as u32;
        if report.captured.is_some() {
            self.enemies_captured += 1;
        }
        let took_piece = report
            .enemy_move
            .and_then(|m| m.captured)
            .is_some_and(|kind| kind != PieceKind::King);
        if took_piece {
            self.pieces_lost += 1;
        }
    }

    fn finish(self, outcome: RunOutcome, turns: u32) -> RunStats {
        RunStats {
            outcome,
            turns,
            enemies_spawned: self.enemies_spawned,
            enemies_captured: self.enemies_captured,
            pieces_lost: self.pieces_lost,
        }
    }
}

/// Play one game to completion or timeout.
///
/// The engine and the bot draw from separate generators, both derived from
/// `rng`, so a run is fully determined by its seed.
pub fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let engine_rng = ChaCha8Rng::seed_from_u64(rng.gen());
    let mut bot_rng = ChaCha8Rng::seed_from_u64(rng.gen());
    let mut stats = SimStats::default();

    let mut engine = match TurnEngine::new(config.difficulty, config.rules.clone(), engine_rng) {
        Ok(engine) => engine,
        Err(err) => {
            warn!(%err, "rules rejected, run skipped");
            return stats.finish(RunOutcome::TimedOut, 0);
        }
    };

    while engine.state().turn_number <= config.max_turns {
        let report = match choose_player_move(engine.state(), &mut bot_rng) {
            BotAction::Move { from, to } => engine
                .select_piece(from)
                .and_then(|_| engine.attempt_move(to)),
            BotAction::Pass => engine.end_turn(),
        };
        let report = match report {
            Ok(report) => report,
            Err(rejection) => {
                warn!(%rejection, "bot move rejected");
                match engine.end_turn() {
                    Ok(report) => report,
                    Err(_) => break,
                }
            }
        };

        stats.process_turn(&report);
        match report.outcome {
            Outcome::Won => return stats.finish(RunOutcome::Won, report.turn_number),
            Outcome::Lost => {
                let outcome = engine
                    .state()
                    .loss_reason
                    .map_or(RunOutcome::TimedOut, RunOutcome::Lost);
                return stats.finish(outcome, report.turn_number);
            }
            Outcome::Continue => {}
        }
    }

    stats.finish(RunOutcome::TimedOut, engine.state().turn_number)
}
