use crate::coord::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sequence of relative offsets, applied cumulatively from an origin.
pub type Path = Vec<Coord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Fixed enumeration order used by score summaries.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction a pawn of this color steps in.
    #[inline]
    pub fn forward(self) -> Coord {
        match self {
            Color::White => Coord::UP,
            Color::Black => Coord::DOWN,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

pub const ROOK_DIRS: [Coord; 4] = [Coord::UP, Coord::RIGHT, Coord::DOWN, Coord::LEFT];

pub const BISHOP_DIRS: [Coord; 4] = [Coord::RIGHT_DOWN, Coord::RIGHT_UP, Coord::LEFT_DOWN, Coord::LEFT_UP];

/// Knight jumps as two-step L shapes: one orthogonal step, then one diagonal step away from it.
pub const KNIGHT_PATHS: [[Coord; 2]; 8] = [
    [Coord::UP, Coord::LEFT_UP],
    [Coord::UP, Coord::RIGHT_UP],
    [Coord::RIGHT, Coord::RIGHT_UP],
    [Coord::RIGHT, Coord::RIGHT_DOWN],
    [Coord::DOWN, Coord::RIGHT_DOWN],
    [Coord::DOWN, Coord::LEFT_DOWN],
    [Coord::LEFT, Coord::LEFT_UP],
    [Coord::LEFT, Coord::LEFT_DOWN],
];

impl PieceKind {
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Material value.
    pub fn score(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
        }
    }

    /// Maximum number of pieces of this kind one color may have on the board.
    pub fn max_count(self) -> usize {
        match self {
            PieceKind::Pawn => 8,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => 2,
            PieceKind::Queen => 1,
        }
    }

    /// Unit directions for sliding pieces; empty for leapers.
    pub fn slide_dirs(self) -> &'static [Coord] {
        match self {
            PieceKind::Bishop => &BISHOP_DIRS,
            PieceKind::Rook => &ROOK_DIRS,
            _ => &[],
        }
    }

    #[inline]
    pub fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

/// A piece value: kind plus color. Carries no position and no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub const fn pawn(color: Color) -> Self { Self::new(PieceKind::Pawn, color) }
    pub const fn knight(color: Color) -> Self { Self::new(PieceKind::Knight, color) }
    pub const fn bishop(color: Color) -> Self { Self::new(PieceKind::Bishop, color) }
    pub const fn rook(color: Color) -> Self { Self::new(PieceKind::Rook, color) }
    pub const fn queen(color: Color) -> Self { Self::new(PieceKind::Queen, color) }

    pub fn score(self) -> i32 { self.kind.score() }

    pub fn max_count(self) -> usize { self.kind.max_count() }

    pub fn symbol(self) -> char {
        match (self.kind, self.color) {
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::Pawn, Color::Black) => '♟',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Rook, Color::White) => '♖',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Queen, Color::White) => '♕',
            (PieceKind::Queen, Color::Black) => '♛',
        }
    }

    /// Movement pattern on a board of the given edge length.
    ///
    /// Sliders get one path per ray length `1..size`, each path being that many
    /// repetitions of the unit direction. Queen paths are bishop paths followed
    /// by rook paths. The result is pure geometry and says nothing about occupancy.
    pub fn paths(self, size: i32) -> Vec<Path> {
        match self.kind {
            PieceKind::Pawn => vec![vec![self.color.forward()]],
            PieceKind::Knight => KNIGHT_PATHS.iter().map(|p| p.to_vec()).collect(),
            PieceKind::Bishop | PieceKind::Rook => rays(self.kind.slide_dirs(), size),
            PieceKind::Queen => {
                let mut paths = rays(&BISHOP_DIRS, size);
                paths.extend(rays(&ROOK_DIRS, size));
                paths
            }
        }
    }
}

fn rays(dirs: &[Coord], size: i32) -> Vec<Path> {
    let max_len = (size - 1).max(0) as usize;
    let mut paths = Vec::with_capacity(dirs.len() * max_len);
    for &dir in dirs {
        for len in 1..=max_len {
            paths.push(vec![dir; len]);
        }
    }
    paths
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.kind)
    }
}
