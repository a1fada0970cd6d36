//! Board, square, and piece data structures.

use crate::constants::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller handed the engine coordinates outside the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid position: ({row}, {col}) is outside the {size}x{size} board", size = BOARD_SIZE)]
pub struct InvalidPosition {
    pub row: usize,
    pub col: usize,
}

#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = InvalidPosition;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
    }
}

/// A square on the board. Row 0 is the far edge (the King's goal and the
/// enemy spawn edge), row 7 is the player's home edge.
///
/// Always in bounds: the only ways to build one are the checked
/// constructor and [`Position::offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Result<Self, InvalidPosition> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(InvalidPosition { row, col })
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// The square `(dr, dc)` away, or `None` if that falls off the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i32 + dr as i32;
        let col = self.col as i32 + dc as i32;
        if row < 0 || col < 0 {
            return None;
        }
        Position::new(row as usize, col as usize).ok()
    }

    /// Chebyshev (king-move) distance between two squares.
    pub fn chebyshev_distance(&self, other: Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Every square, row-major from a8.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        let rank = BOARD_SIZE - self.row;
        write!(f, "{}{}", file, rank)
    }
}

/// Which side a piece fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

impl Faction {
    pub fn opponent(&self) -> Faction {
        match self {
            Faction::Player => Faction::Enemy,
            Faction::Enemy => Faction::Player,
        }
    }

    /// Row delta of a pawn step for this faction.
    pub fn forward(&self) -> i8 {
        match self {
            Faction::Player => -1,
            Faction::Enemy => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        }
    }

    /// Rough material value, used by the simulator bot to rank captures.
    pub fn value(&self) -> u32 {
        match self {
            PieceKind::King => 100,
            PieceKind::Queen => 9,
            PieceKind::Rook => 5,
            PieceKind::Bishop | PieceKind::Knight => 3,
            PieceKind::Pawn => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub faction: Faction,
}

impl Piece {
    pub const fn new(kind: PieceKind, faction: Faction) -> Self {
        Self { kind, faction }
    }

    pub const fn player(kind: PieceKind) -> Self {
        Self::new(kind, Faction::Player)
    }

    pub const fn enemy(kind: PieceKind) -> Self {
        Self::new(kind, Faction::Enemy)
    }

    pub fn is_player_king(&self) -> bool {
        self.kind == PieceKind::King && self.faction == Faction::Player
    }

    /// Unicode chess glyph: white symbols for the player, black for zombies.
    pub fn glyph(&self) -> char {
        match (self.faction, self.kind) {
            (Faction::Player, PieceKind::King) => '♔',
            (Faction::Player, PieceKind::Queen) => '♕',
            (Faction::Player, PieceKind::Rook) => '♖',
            (Faction::Player, PieceKind::Bishop) => '♗',
            (Faction::Player, PieceKind::Knight) => '♘',
            (Faction::Player, PieceKind::Pawn) => '♙',
            (Faction::Enemy, PieceKind::King) => '♚',
            (Faction::Enemy, PieceKind::Queen) => '♛',
            (Faction::Enemy, PieceKind::Rook) => '♜',
            (Faction::Enemy, PieceKind::Bishop) => '♝',
            (Faction::Enemy, PieceKind::Knight) => '♞',
            (Faction::Enemy, PieceKind::Pawn) => '♟',
        }
    }
}

/// The 8x8 grid. A square holds at most one piece by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row][pos.col]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    pub fn faction_at(&self, pos: Position) -> Option<Faction> {
        self.get(pos).map(|p| p.faction)
    }

    /// Put `piece` on `pos`, returning whatever was there.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        self.squares[pos.row][pos.col].replace(piece)
    }

    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.row][pos.col].take()
    }

    /// Move whatever stands on `from` to `to`. Returns the captured piece.
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let piece = self.remove(from)?;
        self.place(to, piece)
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// Squares holding `faction` pieces, row-major.
    pub fn positions_of(&self, faction: Faction) -> Vec<Position> {
        self.pieces()
            .filter(|(_, piece)| piece.faction == faction)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn count(&self, faction: Faction) -> usize {
        self.pieces().filter(|(_, piece)| piece.faction == faction).count()
    }

    pub fn find_player_king(&self) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.is_player_king())
            .map(|(pos, _)| pos)
    }

    pub fn player_king_count(&self) -> usize {
        self.pieces().filter(|(_, piece)| piece.is_player_king()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let glyph = self.squares[row][col].map_or('·', |p| p.glyph());
                write!(f, "{}", glyph)?;
                if col + 1 < BOARD_SIZE {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
