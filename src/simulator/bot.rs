//! Greedy player bot used to drive simulated games.

use crate::board::{Board, Faction, PieceKind, Position};
use crate::constants::GOAL_ROW;
use crate::game::GameState;
use crate::movement::{self, KNIGHT_OFFSETS};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotAction {
    Move { from: Position, to: Position },
    Pass,
}

/// Pick the bot's move for the current position.
///
/// Priority:
/// 1. King steps onto the goal row
/// 2. Most valuable capture by a non-King piece
/// 3. King advances to an empty square no pawn or knight can hit
/// 4. Any non-King move, then any King move
/// 5. Pass
pub fn choose_player_move<R: Rng>(state: &GameState, rng: &mut R) -> BotAction {
    let board = &state.board;
    let Some(king) = state.king_position() else {
        return BotAction::Pass;
    };
    let king_moves = movement::legal_moves(board, king);

    if let Some(&to) = king_moves.iter().find(|sq| sq.row() == GOAL_ROW) {
        return BotAction::Move { from: king, to };
    }

    let army: Vec<(Position, Position)> = board
        .positions_of(Faction::Player)
        .into_iter()
        .filter(|&from| from != king)
        .flat_map(|from| {
            movement::legal_moves(board, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect();

    let best_capture = army
        .iter()
        .filter_map(|&(from, to)| board.get(to).map(|victim| (from, to, victim.kind.value())))
        .max_by_key(|&(_, _, value)| value);
    if let Some((from, to, _)) = best_capture {
        return BotAction::Move { from, to };
    }

    let safe_advances: Vec<Position> = king_moves
        .iter()
        .copied()
        .filter(|&to| to.row() < king.row() && board.is_empty_at(to))
        .filter(|&to| !is_threatened(board, to))
        .collect();
    if let Some(&to) = safe_advances.choose(rng) {
        return BotAction::Move { from: king, to };
    }

    if let Some(&(from, to)) = army.choose(rng) {
        return BotAction::Move { from, to };
    }
    if let Some(&to) = king_moves.choose(rng) {
        return BotAction::Move { from: king, to };
    }

    BotAction::Pass
}

/// Whether an enemy pawn or knight could land on `square` next turn.
fn is_threatened(board: &Board, square: Position) -> bool {
    board.pieces().any(|(pos, piece)| {
        if piece.faction != Faction::Enemy {
            return false;
        }
        match piece.kind {
            PieceKind::Pawn => {
                movement::pawn_capture_squares(Faction::Enemy, pos).any(|sq| sq == square)
            }
            PieceKind::Knight => KNIGHT_OFFSETS
                .iter()
                .any(|&(dr, dc)| pos.offset(dr, dc) == Some(square)),
            _ => false,
        }
    })
}
