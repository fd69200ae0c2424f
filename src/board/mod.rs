//! The board aggregate: square occupancy, placement invariants, and move application.
//!
//! Squares live in a flat arena indexed by [`Coord::index`]. Every mutation goes
//! through [`Board::add`] or [`Board::move_piece`], which keep three invariants:
//! one piece per square, no (kind, color) above its population cap, and every
//! occupied square inside the board.

pub mod error;

use crate::config::{BoardConfig, PathPolicy};
use crate::coord::Coord;
use crate::movegen::{self, Candidate};
use crate::piece::{Color, Path, Piece, PieceKind};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub use error::BoardError;

/// Character printed for an empty square.
pub const EMPTY_SQUARE: char = '.';

/// Back rank from the `A` file. `None` is the royal slot, left empty.
const BACK_RANK: [Option<PieceKind>; 8] = [
    Some(PieceKind::Rook),
    Some(PieceKind::Knight),
    Some(PieceKind::Bishop),
    None,
    Some(PieceKind::Queen),
    Some(PieceKind::Bishop),
    Some(PieceKind::Knight),
    Some(PieceKind::Rook),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    squares: Vec<Option<Piece>>,
}

/// Serializable read-only view of the occupied squares.
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub size: i32,
    pub pieces: Vec<PlacedPiece>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacedPiece {
    pub at: Coord,
    pub piece: Piece,
    pub symbol: char,
}

impl Board {
    pub fn new() -> Self {
        Self::empty(BoardConfig::default())
    }

    pub fn with_size(size: i32) -> Result<Self, BoardError> {
        Self::with_config(BoardConfig::with_size(size))
    }

    /// Empty board for `config`; fails with `InvalidSize` outside `1..=BoardConfig::MAX_SIZE`.
    pub fn with_config(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: BoardConfig) -> Self {
        let edge = config.size as usize;
        Self { config, squares: vec![None; edge * edge] }
    }

    #[inline]
    pub fn size(&self) -> i32 { self.config.size }

    pub fn config(&self) -> BoardConfig { self.config }

    pub fn is_occupied_anywhere(&self) -> bool {
        self.squares.iter().any(Option::is_some)
    }

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        at.index(self.size()).and_then(|i| self.squares[i])
    }

    /// Number of pieces on the board equal to `piece` (same kind and color).
    pub fn count(&self, piece: Piece) -> usize {
        self.squares.iter().filter(|s| **s == Some(piece)).count()
    }

    /// Occupied squares in rank-major order.
    pub fn pieces(&self) -> BTreeMap<Coord, Piece> {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|p| (Coord::from_index(i, self.size()), p)))
            .collect()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let pieces = self
            .pieces()
            .into_iter()
            .map(|(at, piece)| PlacedPiece { at, piece, symbol: piece.symbol() })
            .collect();
        BoardSnapshot { size: self.size(), pieces }
    }

    /// Places `piece` at `at`, enforcing bounds, single occupancy, and the population cap.
    pub fn add(&mut self, piece: Piece, at: Coord) -> Result<(), BoardError> {
        let result = self.try_add(piece, at);
        match &result {
            Ok(()) => debug!("placed {} at {}", piece, at),
            Err(e) => warn!("rejected placement: {}", e),
        }
        result
    }

    fn try_add(&mut self, piece: Piece, at: Coord) -> Result<(), BoardError> {
        let idx = at.index(self.size()).ok_or(BoardError::OutOfBounds { at, size: self.size() })?;
        if let Some(occupant) = self.squares[idx] {
            return Err(BoardError::SquareOccupied { at, occupant });
        }
        let cap = piece.max_count();
        if self.count(piece) >= cap {
            return Err(BoardError::PopulationCapExceeded { piece, cap });
        }
        self.squares[idx] = Some(piece);
        Ok(())
    }

    /// Clears the board and places the 30-piece start position (no kings).
    ///
    /// Black occupies ranks 1 and 2, White ranks 7 and 8. Only defined for 8x8.
    pub fn standard_setup(&mut self) -> Result<(), BoardError> {
        let size = self.size();
        if size != BoardConfig::STANDARD_SIZE {
            return Err(BoardError::UnsupportedSetup(size));
        }
        self.squares.iter_mut().for_each(|s| *s = None);

        for (color, back, pawns) in [(Color::Black, 1, 2), (Color::White, size, size - 1)] {
            for file in 1..=size {
                self.add(Piece::pawn(color), Coord::new(file, pawns))?;
            }
            for (file, kind) in (1..).zip(BACK_RANK) {
                if let Some(kind) = kind {
                    self.add(Piece::new(kind, color), Coord::new(file, back))?;
                }
            }
        }
        info!("standard setup placed {} pieces", self.pieces().len());
        Ok(())
    }

    /// Session-start entry point; same as [`Board::standard_setup`].
    pub fn initialize_standard_board(&mut self) -> Result<(), BoardError> {
        self.standard_setup()
    }

    pub fn score(&self, color: Color) -> i32 {
        self.squares.iter().flatten().filter(|p| p.color == color).map(|p| p.score()).sum()
    }

    /// One `"<color>: <total>"` line per color, White first.
    pub fn score_summary(&self) -> String {
        Color::ALL
            .iter()
            .map(|&c| format!("{}: {}", c, self.score(c)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Text grid, rank 1 on the first line, files left to right, no trailing newline.
    pub fn render(&self) -> String {
        let size = self.size();
        (1..=size)
            .map(|rank| {
                (1..=size)
                    .map(|file| self.piece_at(Coord::new(file, rank)).map_or(EMPTY_SQUARE, Piece::symbol))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Geometric candidates for the piece at `from`; empty when the square is empty.
    pub fn candidates(&self, from: Coord) -> Vec<Candidate> {
        match self.piece_at(from) {
            Some(piece) => movegen::available_destinations(piece, from, self.size()),
            None => Vec::new(),
        }
    }

    /// Whether the piece at `from` may currently follow `path`.
    ///
    /// The path must be one of the piece's own patterns and end on the board.
    /// A same-color piece on the final square blocks; an opposite-color one is
    /// capturable. Under [`PathPolicy::Blocking`] sliders also need every
    /// square before the final one to be empty.
    pub fn can_move(&self, from: Coord, path: &[Coord]) -> bool {
        let Some(piece) = self.piece_at(from) else { return false };
        if path.is_empty() || !piece.paths(self.size()).iter().any(|p| p.as_slice() == path) {
            return false;
        }
        self.permits(piece, from, path)
    }

    // Occupancy and bounds only; `path` must already come from the piece's pattern.
    fn permits(&self, piece: Piece, from: Coord, path: &[Coord]) -> bool {
        let dest = movegen::resolve(from, path);
        if !dest.in_bounds(self.size()) {
            return false;
        }
        if self.config.policy == PathPolicy::Blocking && piece.kind.is_slider() {
            let clear = movegen::intermediate_squares(from, path).into_iter().all(|sq| self.piece_at(sq).is_none());
            if !clear {
                return false;
            }
        }
        match self.piece_at(dest) {
            Some(other) => other.color != piece.color,
            None => true,
        }
    }

    /// Final squares the piece at `from` may move to right now.
    pub fn legal_destinations(&self, from: Coord) -> BTreeSet<Coord> {
        let Some(piece) = self.piece_at(from) else { return BTreeSet::new() };
        movegen::available_destinations(piece, from, self.size())
            .into_iter()
            .filter(|c| self.permits(piece, from, &c.path))
            .map(|c| c.destination)
            .collect()
    }

    /// The path a piece at `from` would take to land on `to`, if its pattern reaches it.
    pub fn path_to(&self, from: Coord, to: Coord) -> Option<Path> {
        self.candidates(from).into_iter().find(|c| c.destination == to).map(|c| c.path)
    }

    /// Moves the piece at `from` along `path`, capturing an opposite-color occupant.
    ///
    /// Returns `Ok(false)` without touching the board when the move is not
    /// permitted; only an empty origin is an error.
    pub fn move_piece(&mut self, from: Coord, path: &[Coord]) -> Result<bool, BoardError> {
        let Some(from_idx) = from.index(self.size()) else { return Err(BoardError::NoPieceAtOrigin(from)) };
        let Some(piece) = self.squares[from_idx] else { return Err(BoardError::NoPieceAtOrigin(from)) };

        if !self.can_move(from, path) {
            debug!("rejected {} from {} along {:?}", piece, from, path);
            return Ok(false);
        }
        let dest = movegen::resolve(from, path);
        let Some(dest_idx) = dest.index(self.size()) else { return Ok(false) };

        self.squares[from_idx] = None;
        match self.squares[dest_idx].replace(piece) {
            Some(captured) => debug!("{} {} -> {} captures {}", piece, from, dest, captured),
            None => debug!("{} {} -> {}", piece, from, dest),
        }
        Ok(true)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
