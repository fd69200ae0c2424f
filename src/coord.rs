use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// A (file, rank) pair addressing one square, or a relative offset between squares.
///
/// Both components are 1-indexed when used as an absolute square: file 1 is the
/// `A` file, rank 1 is the top row of the display. Out-of-range values are
/// representable; bounds are checked with [`Coord::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub file: i32,
    pub rank: i32,
}

impl Coord {
    /// One step toward rank 1.
    pub const UP: Coord = Coord { file: 0, rank: -1 };
    pub const DOWN: Coord = Coord { file: 0, rank: 1 };
    pub const LEFT: Coord = Coord { file: -1, rank: 0 };
    pub const RIGHT: Coord = Coord { file: 1, rank: 0 };
    pub const LEFT_UP: Coord = Coord { file: -1, rank: -1 };
    pub const LEFT_DOWN: Coord = Coord { file: -1, rank: 1 };
    pub const RIGHT_UP: Coord = Coord { file: 1, rank: -1 };
    pub const RIGHT_DOWN: Coord = Coord { file: 1, rank: 1 };

    #[inline]
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    /// Builds a coordinate from a file letter, case-insensitive (`'a'` and `'A'` are file 1).
    ///
    /// Any character is accepted; non-letters land outside the board and fail
    /// the bounds check later. Use [`Coord::from_letter`] to reject them up front.
    pub fn with_letter(file: char, rank: i32) -> Self {
        let upper = file.to_ascii_uppercase() as i32;
        Self::new(upper - 'A' as i32 + 1, rank)
    }

    /// Strict variant of [`Coord::with_letter`]: only ASCII letters are accepted.
    pub fn from_letter(file: char, rank: i32) -> Option<Self> {
        if file.is_ascii_alphabetic() { Some(Self::with_letter(file, rank)) } else { None }
    }

    #[inline]
    pub fn in_bounds(self, size: i32) -> bool {
        (1..=size).contains(&self.file) && (1..=size).contains(&self.rank)
    }

    /// Componentwise addition that yields `None` instead of overflowing.
    #[inline]
    pub fn checked_add(self, rhs: Coord) -> Option<Coord> {
        Some(Coord::new(self.file.checked_add(rhs.file)?, self.rank.checked_add(rhs.rank)?))
    }

    /// Arena slot for this square on a board of the given size. `None` when out of bounds.
    #[inline]
    pub fn index(self, size: i32) -> Option<usize> {
        if !self.in_bounds(size) { return None; }
        Some(((self.rank - 1) * size + (self.file - 1)) as usize)
    }

    /// Inverse of [`Coord::index`].
    #[inline]
    pub fn from_index(index: usize, size: i32) -> Self {
        let i = index as i32;
        Self::new(i % size + 1, i / size + 1)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.file + rhs.file, self.rank + rhs.rank)
    }
}

// Rank-major so that sorted sets enumerate row by row.
impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then(self.file.cmp(&other.file))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (1..=26).contains(&self.file) {
            let letter = (b'a' + (self.file - 1) as u8) as char;
            write!(f, "{}{}", letter, self.rank)
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square notation: {0}")]
pub struct ParseCoordError(pub String);

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parses the short form `"b3"`: one file letter followed by a rank number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(|| ParseCoordError(s.to_string()))?;
        let rank = chars.as_str().parse::<i32>().map_err(|_| ParseCoordError(s.to_string()))?;
        Coord::from_letter(letter, rank).ok_or_else(|| ParseCoordError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_files_are_case_insensitive() {
        assert_eq!(Coord::with_letter('a', 3), Coord::new(1, 3));
        assert_eq!(Coord::with_letter('C', 5), Coord::new(3, 5));
        assert_eq!(Coord::with_letter('h', 8), Coord::with_letter('H', 8));
        assert_eq!(Coord::from_letter('1', 1), None);
    }

    #[test]
    fn bounds_are_inclusive_on_both_ends() {
        for size in 1..=10 {
            for file in -1..=size + 1 {
                for rank in -1..=size + 1 {
                    let inside = file >= 1 && file <= size && rank >= 1 && rank <= size;
                    assert_eq!(Coord::new(file, rank).in_bounds(size), inside, "{file},{rank} on {size}");
                }
            }
        }
    }

    #[test]
    fn ordering_is_rank_major() {
        let mut v = vec![Coord::new(2, 2), Coord::new(8, 1), Coord::new(1, 2), Coord::new(1, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(1, 1), Coord::new(8, 1), Coord::new(1, 2), Coord::new(2, 2)]);
    }

    #[test]
    fn diagonals_are_sums_of_units() {
        assert_eq!(Coord::LEFT + Coord::UP, Coord::LEFT_UP);
        assert_eq!(Coord::LEFT + Coord::DOWN, Coord::LEFT_DOWN);
        assert_eq!(Coord::RIGHT + Coord::UP, Coord::RIGHT_UP);
        assert_eq!(Coord::RIGHT + Coord::DOWN, Coord::RIGHT_DOWN);
    }

    #[test]
    fn checked_add_stops_at_overflow() {
        assert_eq!(Coord::new(1, 2).checked_add(Coord::UP), Some(Coord::new(1, 1)));
        assert_eq!(Coord::new(i32::MAX, 1).checked_add(Coord::RIGHT), None);
        assert_eq!(Coord::new(1, i32::MIN).checked_add(Coord::UP), None);
    }

    #[test]
    fn index_round_trips_inside_the_board() {
        assert_eq!(Coord::new(1, 1).index(8), Some(0));
        assert_eq!(Coord::new(8, 8).index(8), Some(63));
        assert_eq!(Coord::new(0, 1).index(8), None);
        assert_eq!(Coord::from_index(10, 8), Coord::new(3, 2));
    }

    #[test]
    fn short_notation() {
        assert_eq!("b3".parse::<Coord>(), Ok(Coord::new(2, 3)));
        assert_eq!("H8".parse::<Coord>(), Ok(Coord::new(8, 8)));
        assert!("3b".parse::<Coord>().is_err());
        assert!("".parse::<Coord>().is_err());
        assert_eq!(Coord::new(5, 1).to_string(), "e1");
    }
}
