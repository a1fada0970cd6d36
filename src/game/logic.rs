//! Turn engine: player commands, enemy phase, spawning, and difficulty ramp.

use super::types::*;
use crate::board::{Board, Faction, PieceKind, Position};
use crate::config::RulesConfig;
use crate::constants::GOAL_ROW;
use crate::enemy::{choose_destination, spawn_zombies};
use crate::movement;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

/// Owns the one live [`GameState`] and the random source every roll is
/// drawn from. All mutation goes through its commands; a command that
/// triggers resolution runs the whole enemy turn before returning.
#[derive(Debug, Clone)]
pub struct TurnEngine<R: Rng = ChaCha8Rng> {
    state: GameState,
    config: RulesConfig,
    rng: R,
}

impl TurnEngine<ChaCha8Rng> {
    /// Default rules, reproducible from `seed`.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        let config = RulesConfig::default();
        Self {
            state: GameState::new(difficulty, &config),
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy(difficulty: Difficulty) -> Self {
        let config = RulesConfig::default();
        Self {
            state: GameState::new(difficulty, &config),
            config,
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl<R: Rng> TurnEngine<R> {
    pub fn new(difficulty: Difficulty, config: RulesConfig, rng: R) -> Result<Self, SetupError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(difficulty, &config),
            config,
            rng,
        })
    }

    /// Start from a hand-built board instead of the configured layout.
    pub fn with_board(
        board: Board,
        difficulty: Difficulty,
        config: RulesConfig,
        rng: R,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        Ok(Self {
            state: GameState::from_board(board, difficulty, &config)?,
            config,
            rng,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Throw the current game away and start a new one. Accepted in any phase.
    pub fn reset(&mut self, difficulty: Difficulty) -> &GameState {
        self.state = GameState::new(difficulty, &self.config);
        info!(
            difficulty = difficulty.name(),
            layout = self.config.layout.name(),
            "new game"
        );
        &self.state
    }

    /// Select the player piece on `pos` and return where it may go.
    ///
    /// Anything other than a player piece drops the current selection and
    /// is rejected.
    pub fn select_piece(&mut self, pos: Position) -> Result<Vec<Position>, Rejection> {
        if self.state.is_over() {
            return Err(reject(Rejection::GameOver));
        }

        match self.state.board.get(pos) {
            Some(piece) if piece.faction == Faction::Player => {
                let moves = movement::legal_moves(&self.state.board, pos);
                self.state.selection = Some(pos);
                self.state.legal_moves = moves.clone();
                self.state.phase = Phase::AwaitingDestination;
                Ok(moves)
            }
            _ => {
                self.state.clear_selection();
                self.state.phase = Phase::AwaitingSelection;
                Err(reject(Rejection::NotPlayerPiece(pos)))
            }
        }
    }

    /// Move the selected piece to `dest`, then play out the zombie turn.
    pub fn attempt_move(&mut self, dest: Position) -> Result<TurnReport, Rejection> {
        if self.state.is_over() {
            return Err(reject(Rejection::GameOver));
        }
        let from = match (self.state.phase, self.state.selection) {
            (Phase::AwaitingDestination, Some(from)) => from,
            _ => return Err(reject(Rejection::NothingSelected)),
        };
        if !movement::legal_moves(&self.state.board, from).contains(&dest) {
            return Err(reject(Rejection::IllegalDestination(dest)));
        }

        let captured = self.state.board.relocate(from, dest);
        if captured.is_some_and(|p| p.faction == Faction::Enemy) {
            self.state.enemy_count = self.state.enemy_count.saturating_sub(1);
        }
        let captured = captured.map(|p| p.kind);

        let king_arrived = self
            .state
            .board
            .get(dest)
            .is_some_and(|p| p.is_player_king())
            && dest.row() == GOAL_ROW;
        if king_arrived {
            self.state.clear_selection();
            self.state.phase = Phase::Won;
            info!(turn = self.state.turn_number, "King reached the far edge");
            return Ok(TurnReport {
                outcome: Outcome::Won,
                captured,
                enemy_move: None,
                spawned: Vec::new(),
                turn_number: self.state.turn_number,
            });
        }

        Ok(resolve_turn(
            &mut self.state,
            &self.config,
            &mut self.rng,
            captured,
        ))
    }

    /// Pass without moving; the zombies still take their turn.
    pub fn end_turn(&mut self) -> Result<TurnReport, Rejection> {
        if self.state.is_over() {
            return Err(reject(Rejection::GameOver));
        }
        Ok(resolve_turn(&mut self.state, &self.config, &mut self.rng, None))
    }

    /// Cell-click handling: move there if it is a legal destination for the
    /// current selection, otherwise treat it as a selection.
    pub fn interact(&mut self, pos: Position) -> Result<Interaction, Rejection> {
        if self.state.is_over() {
            return Err(reject(Rejection::GameOver));
        }
        if self.state.phase == Phase::AwaitingDestination && self.state.legal_moves.contains(&pos)
        {
            self.attempt_move(pos).map(Interaction::Moved)
        } else {
            self.select_piece(pos).map(Interaction::Selected)
        }
    }
}

fn reject(rejection: Rejection) -> Rejection {
    trace!(%rejection, "command rejected");
    rejection
}

/// Enemy phase, spawn phase, ramp, and terminal checks, in that order.
/// A King capture ends the game on the spot; nothing after it runs.
fn resolve_turn<R: Rng>(
    state: &mut GameState,
    config: &RulesConfig,
    rng: &mut R,
    captured: Option<PieceKind>,
) -> TurnReport {
    state.phase = Phase::Resolving;
    state.clear_selection();

    let enemy_move = run_enemy_phase(state, rng);
    if state.phase == Phase::Lost {
        info!(turn = state.turn_number, "zombies captured the King");
        return TurnReport {
            outcome: Outcome::Lost,
            captured,
            enemy_move,
            spawned: Vec::new(),
            turn_number: state.turn_number,
        };
    }

    let spawned = spawn_zombies(
        &mut state.board,
        state.difficulty,
        state.spawn_rate,
        state.special_chance,
        rng,
    );
    for spawn in &spawned {
        debug!(square = %spawn.position, kind = spawn.kind.name(), "zombie spawned");
    }
    state.enemy_count += spawned.len() as u32;

    apply_difficulty_ramp(state, config);
    state.turn_number += 1;

    if state.player_piece_count == 0 {
        state.lose(LossReason::AllPiecesLost);
        info!(turn = state.turn_number, "no pieces left besides the King");
    } else {
        state.phase = Phase::AwaitingSelection;
    }

    TurnReport {
        outcome: state.outcome(),
        captured,
        enemy_move,
        spawned,
        turn_number: state.turn_number,
    }
}

/// Activate one zombie chosen uniformly from those on the board.
fn run_enemy_phase<R: Rng>(state: &mut GameState, rng: &mut R) -> Option<EnemyMove> {
    let enemies = state.board.positions_of(Faction::Enemy);
    let from = *enemies.choose(rng)?;
    let kind = state.board.get(from)?.kind;

    let Some(to) = choose_destination(&state.board, from, kind, state.middle_rows_restricted, rng)
    else {
        debug!(square = %from, kind = kind.name(), "zombie passes");
        return None;
    };

    let victim = state.board.relocate(from, to);
    match victim {
        Some(piece) if piece.is_player_king() => state.lose(LossReason::KingCaptured),
        Some(piece) if piece.faction == Faction::Player => {
            state.player_piece_count = state.player_piece_count.saturating_sub(1);
        }
        _ => {}
    }

    let enemy_move = EnemyMove {
        from,
        to,
        kind,
        captured: victim.map(|p| p.kind),
    };
    debug!(
        from = %from,
        to = %to,
        kind = kind.name(),
        captured = ?enemy_move.captured,
        "zombie moved"
    );
    Some(enemy_move)
}

/// Every `ramp_interval` turns the spawn odds rise toward their caps. The
/// middle-row restriction lifts for good once the unlock turn is reached.
fn apply_difficulty_ramp(state: &mut GameState, config: &RulesConfig) {
    if state.turn_number % config.ramp_interval == 0 {
        state.spawn_rate = (state.spawn_rate + config.spawn_rate_step).min(config.spawn_rate_cap);
        state.special_chance =
            (state.special_chance + config.special_chance_step).min(config.special_chance_cap);
        debug!(
            turn = state.turn_number,
            spawn_rate = state.spawn_rate,
            special_chance = state.special_chance,
            "difficulty ramp"
        );
    }
    if state.turn_number >= config.middle_rows_unlock_turn {
        state.middle_rows_restricted = false;
    }
}
