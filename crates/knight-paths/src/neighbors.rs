use knight_core::Point;

use crate::traits::Pather;

/// The eight knight offsets, in the order the traversal expands them.
pub const KNIGHT_MOVES: [Point; 8] = [
    Point::new(2, 1),
    Point::new(2, -1),
    Point::new(-2, 1),
    Point::new(-2, -1),
    Point::new(1, 2),
    Point::new(1, -2),
    Point::new(-1, 2),
    Point::new(-1, -2),
];

/// Chess knight movement: two squares along one axis and one along the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Knight;

impl Pather for Knight {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(KNIGHT_MOVES.iter().map(|&d| p + d));
    }
}

/// Whether a knight standing on `from` can move to `to` in one step.
#[inline]
pub fn is_knight_move(from: Point, to: Point) -> bool {
    matches!(
        (to.x.abs_diff(from.x), to.y.abs_diff(from.y)),
        (1, 2) | (2, 1)
    )
}
