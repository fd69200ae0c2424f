use crate::board::BoardError;
use serde::{Deserialize, Serialize};

/// How the board decides whether a geometric path may be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPolicy {
    /// Only the final square matters; every path is a single leap.
    #[default]
    Atomic,
    /// Sliding pieces must also find every square before the final one empty.
    Blocking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Edge length; the board has `size * size` squares.
    pub size: i32,
    pub policy: PathPolicy,
}

impl BoardConfig {
    pub const STANDARD_SIZE: i32 = 8;
    /// One file per letter `a..=z`.
    pub const MAX_SIZE: i32 = 26;

    pub fn with_size(size: i32) -> Self {
        Self { size, ..Self::default() }
    }

    pub fn blocking(mut self) -> Self {
        self.policy = PathPolicy::Blocking;
        self
    }

    /// Rejects edge lengths outside `1..=MAX_SIZE`.
    pub fn validate(&self) -> Result<(), BoardError> {
        if (1..=Self::MAX_SIZE).contains(&self.size) {
            Ok(())
        } else {
            Err(BoardError::InvalidSize { size: self.size, max: Self::MAX_SIZE })
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { size: Self::STANDARD_SIZE, policy: PathPolicy::Atomic }
    }
}
