//! Zombie heuristics: one destination per activation, chosen greedily.
//!
//! Every kind goes through [`choose_destination`]. Rules are tried in
//! priority order and the first one that yields a square wins:
//!
//! | Kind        | 1st                          | 2nd                | 3rd  |
//! |-------------|------------------------------|--------------------|------|
//! | Pawn        | diagonal capture (L, then R) | forward step       | pass |
//! | Rook/Bishop | chase-step toward King       | random step        | pass |
//! | Queen/King  | chase-step toward King       | random step        | pass |
//! | Knight      | jump onto King               | random open offset | pass |

use crate::board::{Board, Faction, PieceKind, Position};
use crate::constants::{RESTRICTED_ROW_MAX, RESTRICTED_ROW_MIN};
use crate::movement::{self, KNIGHT_OFFSETS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick where the zombie on `from` goes this activation.
/// `None` means it passes.
pub fn choose_destination<R: Rng>(
    board: &Board,
    from: Position,
    kind: PieceKind,
    middle_rows_restricted: bool,
    rng: &mut R,
) -> Option<Position> {
    match kind {
        PieceKind::Pawn => pawn_destination(board, from),
        PieceKind::Knight => knight_destination(board, from, rng),
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen | PieceKind::King => {
            let dirs = movement::directions(kind);
            chase_step(board, from, dirs)
                .or_else(|| random_step(board, from, dirs, middle_rows_restricted, rng))
        }
    }
}

/// Rows 3-4 are off limits for a random step while the restriction holds.
pub fn in_restricted_rows(pos: Position) -> bool {
    (RESTRICTED_ROW_MIN..=RESTRICTED_ROW_MAX).contains(&pos.row())
}

fn pawn_destination(board: &Board, from: Position) -> Option<Position> {
    let capture = movement::pawn_capture_squares(Faction::Enemy, from)
        .find(|&sq| board.faction_at(sq) == Some(Faction::Player));
    if capture.is_some() {
        return capture;
    }

    from.offset(Faction::Enemy.forward(), 0)
        .filter(|&ahead| board.is_empty_at(ahead))
}

/// One square toward the King if it sits on one of `dirs` with nothing in
/// between. Adjacent King means the step is the capture.
fn chase_step(board: &Board, from: Position, dirs: &[(i8, i8)]) -> Option<Position> {
    dirs.iter().find_map(|&(dr, dc)| {
        let hit = movement::first_piece_along(board, from, dr, dc)?;
        if board.get(hit)?.is_player_king() {
            from.offset(dr, dc)
        } else {
            None
        }
    })
}

fn random_step<R: Rng>(
    board: &Board,
    from: Position,
    dirs: &[(i8, i8)],
    middle_rows_restricted: bool,
    rng: &mut R,
) -> Option<Position> {
    let candidates: Vec<Position> = dirs
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| movement::is_open_to(board, Faction::Enemy, to))
        .filter(|&to| !(middle_rows_restricted && in_restricted_rows(to)))
        .collect();
    candidates.choose(rng).copied()
}

fn knight_destination<R: Rng>(
    board: &Board,
    from: Position,
    rng: &mut R,
) -> Option<Position> {
    let landings: Vec<Position> = KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .collect();

    let king_hit = landings
        .iter()
        .copied()
        .find(|&sq| board.get(sq).is_some_and(|p| p.is_player_king()));
    if king_hit.is_some() {
        return king_hit;
    }

    let open: Vec<Position> = landings
        .into_iter()
        .filter(|&sq| movement::is_open_to(board, Faction::Enemy, sq))
        .collect();
    open.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    // ============ Pawn Tests ============

    #[test]
    fn test_pawn_prefers_capture_over_step() {
        let mut board = Board::empty();
        board.place(pos(2, 4), Piece::enemy(PieceKind::Pawn));
        board.place(pos(3, 5), Piece::player(PieceKind::Knight));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(2, 4), PieceKind::Pawn, true, &mut rng);
        assert_eq!(dest, Some(pos(3, 5)));
    }

    #[test]
    fn test_pawn_takes_left_capture_first() {
        let mut board = Board::empty();
        board.place(pos(2, 4), Piece::enemy(PieceKind::Pawn));
        board.place(pos(3, 3), Piece::player(PieceKind::Rook));
        board.place(pos(3, 5), Piece::player(PieceKind::King));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(2, 4), PieceKind::Pawn, true, &mut rng);
        assert_eq!(dest, Some(pos(3, 3)));
    }

    #[test]
    fn test_pawn_steps_forward_when_nothing_to_capture() {
        let mut board = Board::empty();
        board.place(pos(0, 2), Piece::enemy(PieceKind::Pawn));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(0, 2), PieceKind::Pawn, true, &mut rng);
        assert_eq!(dest, Some(pos(1, 2)));
    }

    #[test]
    fn test_pawn_ignores_restriction() {
        let mut board = Board::empty();
        board.place(pos(2, 2), Piece::enemy(PieceKind::Pawn));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(2, 2), PieceKind::Pawn, true, &mut rng);
        assert_eq!(dest, Some(pos(3, 2)));
    }

    #[test]
    fn test_blocked_pawn_passes() {
        let mut board = Board::empty();
        board.place(pos(4, 4), Piece::enemy(PieceKind::Pawn));
        board.place(pos(5, 4), Piece::player(PieceKind::Rook));
        board.place(pos(5, 3), Piece::enemy(PieceKind::Pawn));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(4, 4), PieceKind::Pawn, false, &mut rng);
        assert_eq!(dest, None);
    }

    // ============ Slider Tests ============

    #[test]
    fn test_rook_chases_king_one_square() {
        let mut board = Board::empty();
        board.place(pos(0, 3), Piece::enemy(PieceKind::Rook));
        board.place(pos(6, 3), Piece::player(PieceKind::King));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(0, 3), PieceKind::Rook, true, &mut rng);
        assert_eq!(dest, Some(pos(1, 3)));
    }

    #[test]
    fn test_rook_captures_adjacent_king() {
        let mut board = Board::empty();
        board.place(pos(5, 2), Piece::enemy(PieceKind::Rook));
        board.place(pos(5, 3), Piece::player(PieceKind::King));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(5, 2), PieceKind::Rook, true, &mut rng);
        assert_eq!(dest, Some(pos(5, 3)));
    }

    #[test]
    fn test_bishop_chases_along_diagonal() {
        let mut board = Board::empty();
        board.place(pos(1, 1), Piece::enemy(PieceKind::Bishop));
        board.place(pos(5, 5), Piece::player(PieceKind::King));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(1, 1), PieceKind::Bishop, true, &mut rng);
        assert_eq!(dest, Some(pos(2, 2)));
    }

    #[test]
    fn test_blocked_line_falls_back_to_random_step() {
        let mut board = Board::empty();
        board.place(pos(0, 3), Piece::enemy(PieceKind::Rook));
        board.place(pos(2, 3), Piece::player(PieceKind::Pawn));
        board.place(pos(6, 3), Piece::player(PieceKind::King));

        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let dest = choose_destination(&board, pos(0, 3), PieceKind::Rook, true, &mut rng)
                .expect("rook on the top edge always has an open step");
            assert_eq!(dest.chebyshev_distance(pos(0, 3)), 1);
            assert!(dest == pos(1, 3) || dest == pos(0, 2) || dest == pos(0, 4));
        }
    }

    #[test]
    fn test_random_step_respects_middle_rows() {
        // Rook on row 2 with row 1 and both sides blocked by zombies: the only
        // geometric step left is down into row 3.
        let mut board = Board::empty();
        board.place(pos(2, 0), Piece::enemy(PieceKind::Rook));
        board.place(pos(1, 0), Piece::enemy(PieceKind::Pawn));
        board.place(pos(2, 1), Piece::enemy(PieceKind::Pawn));
        board.place(pos(7, 7), Piece::player(PieceKind::King));
        let mut rng = create_test_rng();

        let restricted = choose_destination(&board, pos(2, 0), PieceKind::Rook, true, &mut rng);
        assert_eq!(restricted, None);

        let unrestricted =
            choose_destination(&board, pos(2, 0), PieceKind::Rook, false, &mut rng);
        assert_eq!(unrestricted, Some(pos(3, 0)));
    }

    #[test]
    fn test_random_step_may_capture_player_piece() {
        let mut board = Board::empty();
        board.place(pos(0, 0), Piece::enemy(PieceKind::Bishop));
        board.place(pos(1, 1), Piece::player(PieceKind::Pawn));
        board.place(pos(7, 3), Piece::player(PieceKind::King));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(0, 0), PieceKind::Bishop, true, &mut rng);
        assert_eq!(dest, Some(pos(1, 1)));
    }

    #[test]
    fn test_queen_chases_on_both_lines() {
        let mut board = Board::empty();
        board.place(pos(0, 0), Piece::enemy(PieceKind::Queen));
        board.place(pos(6, 6), Piece::player(PieceKind::King));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(0, 0), PieceKind::Queen, true, &mut rng);
        assert_eq!(dest, Some(pos(1, 1)));
    }

    #[test]
    fn test_chase_step_may_enter_middle_rows() {
        let mut board = Board::empty();
        board.place(pos(2, 6), Piece::enemy(PieceKind::Rook));
        board.place(pos(7, 6), Piece::player(PieceKind::King));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(2, 6), PieceKind::Rook, true, &mut rng);
        assert_eq!(dest, Some(pos(3, 6)));
    }

    // ============ Knight Tests ============

    #[test]
    fn test_knight_takes_king_when_in_reach() {
        let mut board = Board::empty();
        board.place(pos(4, 4), Piece::enemy(PieceKind::Knight));
        board.place(pos(6, 5), Piece::player(PieceKind::King));
        board.place(pos(2, 3), Piece::player(PieceKind::Queen));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(4, 4), PieceKind::Knight, true, &mut rng);
        assert_eq!(dest, Some(pos(6, 5)));
    }

    #[test]
    fn test_knight_random_move_is_open_square() {
        let mut board = Board::empty();
        board.place(pos(0, 0), Piece::enemy(PieceKind::Knight));
        board.place(pos(1, 2), Piece::enemy(PieceKind::Pawn));
        board.place(pos(7, 7), Piece::player(PieceKind::King));

        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let dest = choose_destination(&board, pos(0, 0), PieceKind::Knight, true, &mut rng);
            assert_eq!(dest, Some(pos(2, 1)));
        }
    }

    #[test]
    fn test_boxed_in_knight_passes() {
        let mut board = Board::empty();
        board.place(pos(0, 0), Piece::enemy(PieceKind::Knight));
        board.place(pos(1, 2), Piece::enemy(PieceKind::Pawn));
        board.place(pos(2, 1), Piece::enemy(PieceKind::Pawn));
        board.place(pos(7, 7), Piece::player(PieceKind::King));
        let mut rng = create_test_rng();

        let dest = choose_destination(&board, pos(0, 0), PieceKind::Knight, false, &mut rng);
        assert_eq!(dest, None);
    }
}
