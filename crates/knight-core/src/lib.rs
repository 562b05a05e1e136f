//! **knight-core** — board geometry for knight pathfinding.
//!
//! This crate provides the value types shared by the rest of the workspace:
//! [`Point`] squares, half-open [`Range`] rectangles, and the fixed-size
//! square [`Board`] that bounds every search.

pub mod board;
pub mod geom;

pub use board::{Board, InvalidBoardSize};
pub use geom::{Point, Range, RangeIter};
