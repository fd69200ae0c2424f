//! Chess board model: coordinates, piece movement patterns, geometric move
//! generation, and a board that enforces placement and move rules.
//!
//! There are no kings, turns, checks, castling, en passant, or promotion.
pub mod coord;
pub mod piece;
pub mod movegen;
pub mod config;
pub mod board;

pub use board::{Board, BoardError, BoardSnapshot};
pub use config::{BoardConfig, PathPolicy};
pub use coord::Coord;
pub use piece::{Color, Path, Piece, PieceKind};
