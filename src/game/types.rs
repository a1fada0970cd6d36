//! Game state, commands' results, and rejection reasons.

use crate::board::{Board, Faction, PieceKind, Position};
use crate::config::{ConfigError, RulesConfig};
use serde::{Deserialize, Serialize};

/// Difficulty picks which special zombies may spawn. Fixed for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Easy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Kinds a special spawn is drawn from. Empty on Easy: only pawns spawn.
    pub fn special_kinds(&self) -> &'static [PieceKind] {
        match self {
            Self::Easy => &[],
            Self::Medium => &[PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop],
            Self::Hard => &[
                PieceKind::Rook,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Queen,
            ],
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingSelection,
    AwaitingDestination,
    /// Enemy and spawn phases in progress. Never observable between commands.
    Resolving,
    Won,
    Lost,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    KingCaptured,
    AllPiecesLost,
}

/// Result of a completed command, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continue,
    Won,
    Lost,
}

/// The single move a zombie made during the enemy phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyMove {
    pub from: Position,
    pub to: Position,
    pub kind: PieceKind,
    pub captured: Option<PieceKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub position: Position,
    pub kind: PieceKind,
}

/// Everything that happened between a player command and the next prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    pub outcome: Outcome,
    /// Enemy kind the player's own move captured, if any.
    pub captured: Option<PieceKind>,
    /// `None` when there were no zombies or the chosen one could not move.
    pub enemy_move: Option<EnemyMove>,
    pub spawned: Vec<Spawn>,
    /// Turn number after resolution.
    pub turn_number: u32,
}

/// What [`crate::game::TurnEngine::interact`] ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Selected(Vec<Position>),
    Moved(TurnReport),
}

/// A well-formed command the rules refuse. State is left unchanged, except
/// that selecting a non-player square drops the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("game is already over")]
    GameOver,

    #[error("no player piece on {0}")]
    NotPlayerPiece(Position),

    #[error("no piece is selected")]
    NothingSelected,

    #[error("{0} is not a legal destination for the selected piece")]
    IllegalDestination(Position),
}

/// The engine could not be set up from the given board or rules.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("board must hold exactly one player King, found {0}")]
    KingCount(usize),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The one mutable aggregate of a game. Owned by the turn engine; callers
/// only ever see it by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn_number: u32,
    pub phase: Phase,
    pub selection: Option<Position>,
    pub legal_moves: Vec<Position>,
    /// Player pieces other than the King.
    pub player_piece_count: u32,
    pub enemy_count: u32,
    pub spawn_rate: f64,
    pub special_chance: f64,
    pub difficulty: Difficulty,
    pub middle_rows_restricted: bool,
    pub loss_reason: Option<LossReason>,
}

impl GameState {
    /// Fresh game on the configured starting layout.
    pub fn new(difficulty: Difficulty, config: &RulesConfig) -> Self {
        let board = config.layout.build();
        Self::with_counts(board, difficulty, config)
    }

    /// Game starting from an arbitrary board. Counters are derived from it.
    pub fn from_board(
        board: Board,
        difficulty: Difficulty,
        config: &RulesConfig,
    ) -> Result<Self, SetupError> {
        let kings = board.player_king_count();
        if kings != 1 {
            return Err(SetupError::KingCount(kings));
        }
        Ok(Self::with_counts(board, difficulty, config))
    }

    fn with_counts(board: Board, difficulty: Difficulty, config: &RulesConfig) -> Self {
        let player_piece_count = board
            .pieces()
            .filter(|(_, p)| p.faction == Faction::Player && p.kind != PieceKind::King)
            .count() as u32;
        let enemy_count = board.count(Faction::Enemy) as u32;

        Self {
            board,
            turn_number: 1,
            phase: Phase::AwaitingSelection,
            selection: None,
            legal_moves: Vec::new(),
            player_piece_count,
            enemy_count,
            spawn_rate: config.initial_spawn_rate.min(config.spawn_rate_cap),
            special_chance: config.initial_special_chance.min(config.special_chance_cap),
            difficulty,
            middle_rows_restricted: true,
            loss_reason: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Won => Outcome::Won,
            Phase::Lost => Outcome::Lost,
            _ => Outcome::Continue,
        }
    }

    pub fn king_position(&self) -> Option<Position> {
        self.board.find_player_king()
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection = None;
        self.legal_moves.clear();
    }

    pub(crate) fn lose(&mut self, reason: LossReason) {
        self.phase = Phase::Lost;
        self.loss_reason = Some(reason);
        self.clear_selection();
    }
}
