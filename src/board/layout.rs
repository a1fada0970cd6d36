//! Starting setups for a fresh game.

use super::types::{Board, Piece, PieceKind, Position};
use crate::constants::{BOARD_SIZE, PLAYER_HOME_ROW};
use serde::{Deserialize, Serialize};

const PAWN_ROW: usize = PLAYER_HOME_ROW - 1;

/// Which army the player starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartingLayout {
    /// King with rook, knight, bishop pairs on the home row; no queen.
    #[default]
    BackRank,
    /// Full chess army: eight pawns plus the complete back rank.
    FullArmy,
    /// Six pawns on the pawn row with a lone King behind them.
    PawnLine,
}

impl StartingLayout {
    pub const ALL: [StartingLayout; 3] = [
        StartingLayout::BackRank,
        StartingLayout::FullArmy,
        StartingLayout::PawnLine,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::BackRank => "Back Rank",
            Self::FullArmy => "Full Army",
            Self::PawnLine => "Pawn Line",
        }
    }

    pub fn build(&self) -> Board {
        use PieceKind::*;

        let mut board = Board::empty();
        match self {
            Self::BackRank => {
                let rank = [
                    Some(Rook),
                    Some(Knight),
                    Some(Bishop),
                    None,
                    Some(King),
                    Some(Bishop),
                    Some(Knight),
                    Some(Rook),
                ];
                fill_row(&mut board, PLAYER_HOME_ROW, &rank);
            }
            Self::FullArmy => {
                let rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook].map(Some);
                fill_row(&mut board, PLAYER_HOME_ROW, &rank);
                fill_row(&mut board, PAWN_ROW, &[Some(Pawn); BOARD_SIZE]);
            }
            Self::PawnLine => {
                let mut pawns = [Some(Pawn); BOARD_SIZE];
                pawns[6] = None;
                pawns[7] = None;
                fill_row(&mut board, PAWN_ROW, &pawns);
                if let Ok(king_square) = Position::new(PLAYER_HOME_ROW, 3) {
                    board.place(king_square, Piece::player(King));
                }
            }
        }
        board
    }
}

fn fill_row(board: &mut Board, row: usize, kinds: &[Option<PieceKind>; BOARD_SIZE]) {
    for (col, kind) in kinds.iter().enumerate() {
        if let (Some(kind), Ok(pos)) = (kind, Position::new(row, col)) {
            board.place(pos, Piece::player(*kind));
        }
    }
}
