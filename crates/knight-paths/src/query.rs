//! Shortest-path queries against a built [`ReachabilityIndex`].

use knight_core::Point;

use crate::ReachabilityIndex;
use crate::error::PathError;
use crate::index::DiscoveryRecord;

impl ReachabilityIndex {
    /// Shortest move sequence from the start to `end`, both included.
    ///
    /// Returns an empty path when `end` is the start square: no moves are
    /// needed, and this is not an error. Fails with
    /// [`PathError::InvalidCoordinate`] if `end` is off the board and with
    /// [`PathError::Unreachable`] if the traversal never reached it.
    ///
    /// The result has `distance + 1` squares, and repeated calls with the
    /// same `end` return the same sequence.
    pub fn shortest_path(&self, end: Point) -> Result<Vec<Point>, PathError> {
        let rec = self.lookup(end)?;
        if self.is_start(end) {
            log::trace!("path query {} -> {}: already there", self.start(), end);
            return Ok(Vec::new());
        }

        let mut path = Vec::with_capacity(rec.distance as usize + 1);
        let mut cur = Some(rec);
        while let Some(r) = cur {
            path.push(r.pos);
            cur = r.predecessor.and_then(|p| self.record(p));
        }
        path.reverse();

        log::trace!(
            "path query {} -> {}: {} moves",
            self.start(),
            end,
            path.len() - 1
        );
        Ok(path)
    }

    /// Number of moves needed to reach `end`; zero for the start itself.
    pub fn move_count(&self, end: Point) -> Result<usize, PathError> {
        self.lookup(end).map(|r| r.distance as usize)
    }

    fn lookup(&self, end: Point) -> Result<&DiscoveryRecord, PathError> {
        let board = self.board();
        if !board.contains(end) {
            return Err(PathError::out_of_bounds(end, board));
        }
        self.record(end).ok_or(PathError::Unreachable { pos: end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::is_knight_move;
    use knight_core::Board;

    fn chessboard_from(start: Point) -> ReachabilityIndex {
        ReachabilityIndex::build(start, Board::default()).unwrap()
    }

    #[test]
    fn single_move() {
        let idx = chessboard_from(Point::new(0, 0));
        assert_eq!(
            idx.shortest_path(Point::new(1, 2)),
            Ok(vec![Point::new(0, 0), Point::new(1, 2)])
        );
        assert_eq!(idx.move_count(Point::new(1, 2)), Ok(1));
    }

    #[test]
    fn corner_to_corner() {
        let idx = chessboard_from(Point::new(0, 0));
        let path = idx.shortest_path(Point::new(7, 7)).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(2, 1),
                Point::new(4, 2),
                Point::new(6, 3),
                Point::new(4, 4),
                Point::new(6, 5),
                Point::new(7, 7),
            ]
        );
        assert_eq!(idx.move_count(Point::new(7, 7)), Ok(6));
    }

    #[test]
    fn same_square_is_empty() {
        for start in Board::default().iter() {
            let idx = chessboard_from(start);
            assert_eq!(idx.shortest_path(start), Ok(Vec::new()));
            assert_eq!(idx.move_count(start), Ok(0));
        }
    }

    #[test]
    fn out_of_bounds_end_is_rejected() {
        let idx = chessboard_from(Point::new(3, 3));
        for end in [Point::new(-1, 0), Point::new(8, 8), Point::new(0, 8)] {
            let expected = PathError::InvalidCoordinate {
                components: vec![end.x, end.y],
                size: 8,
            };
            assert_eq!(idx.shortest_path(end), Err(expected.clone()));
            assert_eq!(idx.move_count(end), Err(expected));
        }
    }

    #[test]
    fn unreachable_end() {
        let b = Board::new(3).unwrap();
        let centre = Point::new(1, 1);
        let idx = ReachabilityIndex::build(Point::new(0, 0), b).unwrap();
        assert_eq!(
            idx.shortest_path(centre),
            Err(PathError::Unreachable { pos: centre })
        );

        let idx = ReachabilityIndex::build(centre, b).unwrap();
        assert_eq!(idx.shortest_path(centre), Ok(Vec::new()));
        assert_eq!(
            idx.shortest_path(Point::new(2, 0)),
            Err(PathError::Unreachable {
                pos: Point::new(2, 0)
            })
        );
    }

    #[test]
    fn paths_run_start_to_end_by_legal_moves() {
        let b = Board::new(10).unwrap();
        for start in [Point::new(0, 0), Point::new(4, 7), Point::new(9, 9)] {
            let idx = ReachabilityIndex::build(start, b).unwrap();
            for end in b.iter().filter(|&p| p != start) {
                let path = idx.shortest_path(end).unwrap();
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                assert_eq!(Some(path.len() as i32 - 1), idx.distance(end));
                assert!(path.iter().all(|&p| b.contains(p)));
                assert!(path.windows(2).all(|w| is_knight_move(w[0], w[1])));
            }
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let b = Board::default();
        let indexes: Vec<ReachabilityIndex> = b.iter().map(chessboard_from).collect();
        for (i, a) in b.iter().enumerate() {
            for (j, c) in b.iter().enumerate() {
                assert_eq!(
                    indexes[i].move_count(c),
                    indexes[j].move_count(a),
                    "{a} <-> {c}"
                );
            }
        }
    }

    #[test]
    fn repeated_queries_agree() {
        let idx = chessboard_from(Point::new(2, 6));
        let first = idx.shortest_path(Point::new(7, 0)).unwrap();
        for _ in 0..5 {
            assert_eq!(idx.shortest_path(Point::new(7, 0)).unwrap(), first);
        }
        // Interleaving other queries does not disturb the result.
        let _ = idx.shortest_path(Point::new(0, 0));
        let _ = idx.shortest_path(Point::new(9, 9));
        assert_eq!(idx.shortest_path(Point::new(7, 0)).unwrap(), first);
    }
}
