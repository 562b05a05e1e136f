use knight_core::Point;

/// Movement rule consulted by the breadth-first traversal.
pub trait Pather {
    /// Append the squares reachable from `p` in one move into `buf`.
    ///
    /// The caller clears `buf` before calling. Candidates may lie off the
    /// board; the traversal discards them.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
