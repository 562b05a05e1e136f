//! Shortest knight-move paths on bounded square boards.
//!
//! A [`ReachabilityIndex`] runs one breadth-first traversal from a start
//! square when it is built, recording for every reachable square its move
//! distance and the square it was first reached from. Queries then walk those
//! predecessors back to the start:
//!
//! ```
//! use knight_core::{Board, Point};
//! use knight_paths::ReachabilityIndex;
//!
//! let index = ReachabilityIndex::build(Point::new(0, 0), Board::default())?;
//! let path = index.shortest_path(Point::new(7, 7))?;
//! assert_eq!(path.len(), 7);
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert!(index.shortest_path(Point::new(0, 0))?.is_empty());
//! # Ok::<(), knight_paths::PathError>(())
//! ```
//!
//! Move generation goes through the [`Pather`] trait; [`Knight`] is the
//! provided rule.

mod error;
mod index;
mod neighbors;
mod query;
mod traits;

pub use error::{PathError, validate};
pub use index::{DiscoveryRecord, ReachabilityIndex};
pub use neighbors::{KNIGHT_MOVES, Knight, is_knight_move};
pub use traits::Pather;
