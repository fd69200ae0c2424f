use crate::coord::Coord;
use crate::piece::{Path, Piece};

/// One geometric candidate: the offsets taken and the square they end on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: Path,
    pub destination: Coord,
}

/// Folds a path onto an origin by repeated addition.
#[inline]
pub fn resolve(origin: Coord, path: &[Coord]) -> Coord {
    path.iter().fold(origin, |acc, &step| acc + step)
}

/// Like [`resolve`], but `None` if any step overflows `i32`.
#[inline]
pub fn try_resolve(origin: Coord, path: &[Coord]) -> Option<Coord> {
    path.iter().try_fold(origin, |acc, &step| acc.checked_add(step))
}

/// Every square visited while following `path`, excluding the origin and the final square.
pub fn intermediate_squares(origin: Coord, path: &[Coord]) -> Vec<Coord> {
    let mut cur = origin;
    let mut out = Vec::with_capacity(path.len().saturating_sub(1));
    for &step in path.iter().take(path.len().saturating_sub(1)) {
        cur = cur + step;
        out.push(cur);
    }
    out
}

/// Projects a piece's movement pattern from `origin` and keeps the in-bounds endpoints.
///
/// Occupancy is not consulted. The output follows the order of `Piece::paths`,
/// which is fixed for a given (piece, size), so repeated calls return identical vectors.
/// An origin off the board has no candidates.
pub fn available_destinations(piece: Piece, origin: Coord, size: i32) -> Vec<Candidate> {
    if !origin.in_bounds(size) {
        return Vec::new();
    }
    piece
        .paths(size)
        .into_iter()
        .filter_map(|path| {
            let destination = try_resolve(origin, &path)?;
            Some(Candidate { path, destination })
        })
        .filter(|c| c.destination.in_bounds(size))
        .collect()
}
