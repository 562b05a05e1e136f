use std::collections::VecDeque;

use knight_core::{Board, Point};

use crate::error::PathError;
use crate::neighbors::Knight;
use crate::traits::Pather;

/// What the traversal learned about one discovered square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoveryRecord {
    pub pos: Point,
    /// Number of moves from the start.
    pub distance: i32,
    /// Square this one was first discovered from; `None` only for the start.
    pub predecessor: Option<Point>,
}

// ---------------------------------------------------------------------------
// ReachabilityIndex
// ---------------------------------------------------------------------------

/// Breadth-first distances and predecessors from a fixed start square.
///
/// The whole traversal runs in [`build`](Self::build); afterwards the index is
/// read-only and answers any number of queries. Choosing a different start
/// means building a new index.
///
/// Records live in a flat arena addressed by each square's row-major index on
/// the board, and predecessors are stored by value, so there are no links
/// between records to keep alive.
#[derive(Debug, Clone)]
pub struct ReachabilityIndex {
    start: Point,
    board: Board,
    slots: Vec<Option<DiscoveryRecord>>,
    // slot indices in discovery order
    order: Vec<usize>,
}

impl ReachabilityIndex {
    /// Run a knight traversal of `board` from `start`.
    ///
    /// Fails with [`PathError::InvalidCoordinate`] if `start` is off the board.
    pub fn build(start: Point, board: Board) -> Result<Self, PathError> {
        Self::build_with(&Knight, start, board)
    }

    /// Run the traversal using `pather` for move generation.
    ///
    /// Each step has cost 1. Candidates outside `board` are skipped, and a
    /// square is recorded only the first time it is reached, so its distance
    /// is the length of a shortest move sequence from `start`.
    pub fn build_with<P: Pather>(pather: &P, start: Point, board: Board) -> Result<Self, PathError> {
        let range = board.range();
        let Some(si) = range.index_of(start) else {
            return Err(PathError::out_of_bounds(start, board));
        };

        let mut slots: Vec<Option<DiscoveryRecord>> = vec![None; range.len()];
        let mut order = Vec::with_capacity(range.len());
        let mut queue: VecDeque<(usize, i32)> = VecDeque::new();
        let mut nbuf = Vec::with_capacity(8);

        slots[si] = Some(DiscoveryRecord {
            pos: start,
            distance: 0,
            predecessor: None,
        });
        order.push(si);
        queue.push_back((si, 0));

        while let Some((ci, current_dist)) = queue.pop_front() {
            let cp = range.point_at(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = range.index_of(np) else {
                    continue;
                };
                if slots[ni].is_some() {
                    continue;
                }
                let nd = current_dist + 1;
                slots[ni] = Some(DiscoveryRecord {
                    pos: np,
                    distance: nd,
                    predecessor: Some(cp),
                });
                order.push(ni);
                queue.push_back((ni, nd));
            }
        }

        let index = Self {
            start,
            board,
            slots,
            order,
        };
        log::debug!(
            "reachability index from {} on {} board: {}/{} squares, eccentricity {}",
            start,
            board,
            index.len(),
            board.len(),
            index.max_distance()
        );
        Ok(index)
    }

    /// The square the traversal started from.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The board the traversal was bounded by.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Whether `p` is the start square.
    #[inline]
    pub fn is_start(&self, p: Point) -> bool {
        p == self.start
    }

    /// Discovery record of `p`, or `None` if `p` is off the board or was not
    /// reached.
    pub fn record(&self, p: Point) -> Option<&DiscoveryRecord> {
        let i = self.board.range().index_of(p)?;
        self.slots[i].as_ref()
    }

    /// Move distance from the start to `p`, if reached.
    pub fn distance(&self, p: Point) -> Option<i32> {
        self.record(p).map(|r| r.distance)
    }

    /// Whether `p` was reached by the traversal.
    pub fn is_reachable(&self, p: Point) -> bool {
        self.record(p).is_some()
    }

    /// Number of discovered squares, including the start.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`: the start square is always recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Largest distance of any discovered square.
    pub fn max_distance(&self) -> i32 {
        self.iter().last().map_or(0, |r| r.distance)
    }

    /// Discovered squares in breadth-first order (non-decreasing distance).
    pub fn iter(&self) -> impl Iterator<Item = &DiscoveryRecord> + '_ {
        self.order.iter().filter_map(|&i| self.slots[i].as_ref())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct IndexSeed {
    start: Point,
    board: Board,
}

#[cfg(feature = "serde")]
impl serde::Serialize for ReachabilityIndex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let seed = IndexSeed {
            start: self.start,
            board: self.board,
        };
        serde::Serialize::serialize(&seed, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ReachabilityIndex {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let seed = <IndexSeed as serde::Deserialize>::deserialize(deserializer)?;
        ReachabilityIndex::build(seed.start, seed.board).map_err(serde::de::Error::custom)
    }
}
