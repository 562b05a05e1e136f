use std::fmt;

use knight_core::{Board, Point};

/// Errors raised by index construction and path queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A coordinate lies outside `[0, size - 1]` on some axis, or does not
    /// have exactly two components.
    InvalidCoordinate { components: Vec<i32>, size: i32 },
    /// The square was never discovered from the start.
    Unreachable { pos: Point },
}

impl PathError {
    pub(crate) fn out_of_bounds(p: Point, board: Board) -> Self {
        Self::InvalidCoordinate {
            components: vec![p.x, p.y],
            size: board.size(),
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { components, size } => match components.as_slice() {
                [x, y] => write!(
                    f,
                    "invalid board position ({x}, {y}): outside the {size}x{size} board"
                ),
                other => write!(
                    f,
                    "invalid board position {other:?}: expected 2 components, got {}",
                    other.len()
                ),
            },
            Self::Unreachable { pos } => write!(f, "square {pos} is unreachable from the start"),
        }
    }
}

impl std::error::Error for PathError {}

/// Turn raw components into a square of `board`.
///
/// Fails with [`PathError::InvalidCoordinate`] unless there are exactly two
/// components and both are in bounds.
pub fn validate(components: &[i32], board: Board) -> Result<Point, PathError> {
    let &[x, y] = components else {
        return Err(PathError::InvalidCoordinate {
            components: components.to_vec(),
            size: board.size(),
        });
    };
    let p = Point::new(x, y);
    if !board.contains(p) {
        return Err(PathError::out_of_bounds(p, board));
    }
    Ok(p)
}
