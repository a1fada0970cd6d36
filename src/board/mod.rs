//! Board model: positions, pieces, and starting layouts.

pub mod layout;
pub mod types;

pub use layout::StartingLayout;
pub use types::{Board, Faction, InvalidPosition, Piece, PieceKind, Position};
