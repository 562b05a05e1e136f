//! The [`Board`] type: a square playing area with a fixed side length.

use std::fmt;

use crate::geom::{Point, Range, RangeIter};

/// A square board of `size × size` squares anchored at the origin.
///
/// Valid coordinates lie in `[0, size - 1]` on both axes. The size is fixed
/// when the board is created; a different size means a different board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct Board {
    size: i32,
}

impl Board {
    /// Side length of a standard chessboard.
    pub const DEFAULT_SIZE: i32 = 8;

    /// Largest accepted side length.
    pub const MAX_SIZE: i32 = 1024;

    /// Create a board with the given side length.
    ///
    /// Returns `None` unless `1 <= size <= MAX_SIZE`.
    #[inline]
    pub const fn new(size: i32) -> Option<Self> {
        if size <= 0 || size > Self::MAX_SIZE {
            return None;
        }
        Some(Self { size })
    }

    /// Side length of the board.
    #[inline]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// The board as a half-open range `[0, size)` on both axes.
    #[inline]
    pub fn range(self) -> Range {
        Range::new(0, 0, self.size, self.size)
    }

    /// Whether `p` is a square of this board.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.x < self.size && p.y >= 0 && p.y < self.size
    }

    /// Number of squares on the board.
    #[inline]
    pub fn len(self) -> usize {
        self.range().len()
    }

    /// Always `false`: a board has at least one square.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Row-major iterator over every square.
    #[inline]
    pub fn iter(self) -> RangeIter {
        self.range().iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.size, self.size)
    }
}

impl TryFrom<i32> for Board {
    type Error = InvalidBoardSize;

    fn try_from(size: i32) -> Result<Self, Self::Error> {
        Self::new(size).ok_or(InvalidBoardSize(size))
    }
}

impl From<Board> for i32 {
    fn from(board: Board) -> i32 {
        board.size
    }
}

/// A board side length outside `1..=Board::MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBoardSize(pub i32);

impl fmt::Display for InvalidBoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid board size {}: must be between 1 and {}",
            self.0,
            Board::MAX_SIZE
        )
    }
}

impl std::error::Error for InvalidBoardSize {}
