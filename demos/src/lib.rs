//! Shared front-end pieces for the `knight-path` binary.
//!
//! Squares are written as `x-y` ids (`"0-0"`, `"7-7"`). Parsing and report
//! formatting live here so the library crates stay free of presentation
//! concerns.

use std::fmt;

use knight_core::{Board, Point};
use knight_paths::{PathError, ReachabilityIndex};

/// Why a square id could not be turned into a board square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareIdError {
    /// A component is not an integer.
    NotANumber { id: String },
    /// The components do not name a square of the board.
    Path(PathError),
}

impl fmt::Display for SquareIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber { id } => {
                write!(f, "square id '{id}' is not of the form x-y")
            }
            Self::Path(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SquareIdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotANumber { .. } => None,
            Self::Path(e) => Some(e),
        }
    }
}

impl From<PathError> for SquareIdError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

/// Parse an `x-y` id into a square of `board`.
pub fn parse_square(id: &str, board: Board) -> Result<Point, SquareIdError> {
    let components = id
        .split('-')
        .map(|c| c.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| SquareIdError::NotANumber { id: id.to_string() })?;
    Ok(knight_paths::validate(&components, board)?)
}

/// The `x-y` id of a square.
pub fn square_id(p: Point) -> String {
    format!("{}-{}", p.x, p.y)
}

/// Human-readable answer for a query from the index's start to `end`.
///
/// The start is marked `O` and every later square carries its move number.
pub fn report(index: &ReachabilityIndex, end: Point) -> Result<String, PathError> {
    if index.is_start(end) {
        return Ok("Already there".to_string());
    }
    let path = index.shortest_path(end)?;
    let mut out = format!("Completed in {} steps", path.len() - 1);
    for (i, &p) in path.iter().enumerate() {
        let mark = if i == 0 { "O".to_string() } else { i.to_string() };
        out.push_str(&format!("\n{mark:>3}  {}", square_id(p)));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        let b = Board::default();
        assert_eq!(parse_square("0-0", b), Ok(Point::new(0, 0)));
        assert_eq!(parse_square("7-3", b), Ok(Point::new(7, 3)));
        assert_eq!(parse_square(" 2 - 5 ", b), Ok(Point::new(2, 5)));
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        let b = Board::default();
        for id in ["3", "1-2-3"] {
            match parse_square(id, b) {
                Err(SquareIdError::Path(PathError::InvalidCoordinate { .. })) => {}
                other => panic!("{id}: expected InvalidCoordinate, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_rejects_non_numbers() {
        let b = Board::default();
        for id in ["a-b", "", "1-", "-1-0"] {
            assert_eq!(
                parse_square(id, b),
                Err(SquareIdError::NotANumber { id: id.to_string() }),
                "{id}"
            );
        }
    }

    #[test]
    fn not_a_number_message() {
        let err = parse_square("a-b", Board::default()).unwrap_err();
        assert_eq!(err.to_string(), "square id 'a-b' is not of the form x-y");
        assert!(err.to_string().is_ascii());
    }

    #[test]
    fn parse_rejects_off_board() {
        let b = Board::default();
        assert_eq!(
            parse_square("8-8", b),
            Err(SquareIdError::Path(PathError::InvalidCoordinate {
                components: vec![8, 8],
                size: 8,
            }))
        );
        assert!(parse_square("9-0", Board::new(10).unwrap()).is_ok());
    }

    #[test]
    fn square_id_matches_parse() {
        let b = Board::new(10).unwrap();
        for p in b.iter() {
            assert_eq!(parse_square(&square_id(p), b), Ok(p));
        }
    }

    #[test]
    fn report_lists_numbered_path() {
        let idx = ReachabilityIndex::build(Point::new(0, 0), Board::default()).unwrap();
        let text = report(&idx, Point::new(1, 2)).unwrap();
        assert_eq!(text, "Completed in 1 steps\n  O  0-0\n  1  1-2");
        let text = report(&idx, Point::new(7, 7)).unwrap();
        assert!(text.starts_with("Completed in 6 steps\n"));
        assert!(text.ends_with("  6  7-7"));
    }

    #[test]
    fn report_same_square() {
        let idx = ReachabilityIndex::build(Point::new(4, 4), Board::default()).unwrap();
        assert_eq!(report(&idx, Point::new(4, 4)).unwrap(), "Already there");
    }

    #[test]
    fn report_propagates_errors() {
        let idx = ReachabilityIndex::build(Point::new(0, 0), Board::new(3).unwrap()).unwrap();
        assert_eq!(
            report(&idx, Point::new(1, 1)),
            Err(PathError::Unreachable {
                pos: Point::new(1, 1)
            })
        );
    }
}
