//! Spawn policy: new zombies rise on row 0.

use crate::board::{Board, Piece, PieceKind, Position};
use crate::constants::{BOARD_SIZE, SPAWN_ROW};
use crate::game::{Difficulty, Spawn};
use rand::seq::SliceRandom;
use rand::Rng;

/// Roll for a zombie on every empty spawn-row square and place the ones
/// that appear. Squares within one column of a King standing on the spawn
/// row are skipped so the player is never handed an unavoidable loss.
pub fn spawn_zombies<R: Rng>(
    board: &mut Board,
    difficulty: Difficulty,
    spawn_rate: f64,
    special_chance: f64,
    rng: &mut R,
) -> Vec<Spawn> {
    let king = board.find_player_king();
    let mut spawned = Vec::new();

    for col in 0..BOARD_SIZE {
        let Ok(square) = Position::new(SPAWN_ROW, col) else {
            continue;
        };
        if !board.is_empty_at(square) {
            continue;
        }
        if king.is_some_and(|k| k.row() == SPAWN_ROW && k.chebyshev_distance(square) <= 1) {
            continue;
        }

        if rng.gen::<f64>() < spawn_rate {
            let kind = roll_kind(difficulty, special_chance, rng);
            board.place(square, Piece::enemy(kind));
            spawned.push(Spawn {
                position: square,
                kind,
            });
        }
    }

    spawned
}

/// Pawn unless the special roll succeeds on a difficulty that has specials.
fn roll_kind<R: Rng>(difficulty: Difficulty, special_chance: f64, rng: &mut R) -> PieceKind {
    let specials = difficulty.special_kinds();
    if specials.is_empty() {
        return PieceKind::Pawn;
    }
    if rng.gen::<f64>() < special_chance {
        specials.choose(rng).copied().unwrap_or(PieceKind::Pawn)
    } else {
        PieceKind::Pawn
    }
}
