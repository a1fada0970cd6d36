//! Movement rule table: legal destinations per piece kind.
//!
//! Shared by the player and the zombies. Every function here is pure: it
//! reads the board and returns squares, nothing else.

use crate::board::{Board, Faction, PieceKind, Position};
use crate::constants::MAX_RAY_LENGTH;

pub const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Unit directions a kind moves along. Empty for the knight, whose moves
/// are offsets rather than lines.
pub fn directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Queen | PieceKind::King => &ALL_DIRECTIONS,
        PieceKind::Knight | PieceKind::Pawn => &[],
    }
}

/// The two diagonal-forward squares of a pawn, left then right.
pub fn pawn_capture_squares(faction: Faction, from: Position) -> impl Iterator<Item = Position> {
    let forward = faction.forward();
    [(forward, -1), (forward, 1)]
        .into_iter()
        .filter_map(move |(dr, dc)| from.offset(dr, dc))
}

/// A square a piece of `faction` may land on: empty, or holding an opponent.
pub fn is_open_to(board: &Board, faction: Faction, pos: Position) -> bool {
    board.faction_at(pos) != Some(faction)
}

/// Legal destinations for the piece standing on `from`.
/// Empty if the square is empty.
pub fn legal_moves(board: &Board, from: Position) -> Vec<Position> {
    match board.get(from) {
        Some(piece) => destinations(board, piece.kind, piece.faction, from),
        None => Vec::new(),
    }
}

/// Legal destinations for a `kind`/`faction` piece standing on `from`.
pub fn destinations(
    board: &Board,
    kind: PieceKind,
    faction: Faction,
    from: Position,
) -> Vec<Position> {
    match kind {
        PieceKind::Pawn => pawn_moves(board, faction, from),
        PieceKind::Knight => step_moves(board, faction, from, &KNIGHT_OFFSETS),
        PieceKind::King => step_moves(board, faction, from, &ALL_DIRECTIONS),
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
            ray_moves(board, faction, from, directions(kind))
        }
    }
}

fn pawn_moves(board: &Board, faction: Faction, from: Position) -> Vec<Position> {
    let mut moves = Vec::with_capacity(3);

    if let Some(ahead) = from.offset(faction.forward(), 0) {
        if board.is_empty_at(ahead) {
            moves.push(ahead);
        }
    }

    // Diagonals are capture-only
    let opponent = faction.opponent();
    moves.extend(
        pawn_capture_squares(faction, from).filter(|&sq| board.faction_at(sq) == Some(opponent)),
    );

    moves
}

fn step_moves(
    board: &Board,
    faction: Faction,
    from: Position,
    offsets: &[(i8, i8)],
) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| is_open_to(board, faction, to))
        .collect()
}

fn ray_moves(
    board: &Board,
    faction: Faction,
    from: Position,
    dirs: &[(i8, i8)],
) -> Vec<Position> {
    let mut moves = Vec::new();
    for &(dr, dc) in dirs {
        let mut current = from;
        for _ in 0..MAX_RAY_LENGTH {
            let Some(next) = current.offset(dr, dc) else {
                break;
            };
            match board.faction_at(next) {
                None => moves.push(next),
                Some(owner) => {
                    if owner != faction {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    moves
}

/// Walk from `from` along `(dr, dc)` and return the first occupied square.
pub fn first_piece_along(board: &Board, from: Position, dr: i8, dc: i8) -> Option<Position> {
    let mut current = from;
    for _ in 0..MAX_RAY_LENGTH {
        current = current.offset(dr, dc)?;
        if !board.is_empty_at(current) {
            return Some(current);
        }
    }
    None
}
