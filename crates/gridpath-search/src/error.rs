//! Errors returned by [`find_path`](crate::find_path).
//!
//! Failing to find a route is not an error; it is reported as
//! [`PathResult::NoPath`](crate::PathResult::NoPath).

use std::fmt;

use gridpath_core::Coord;
use thiserror::Error;

/// Which end of a query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// A malformed search query. Nothing is searched when one of these is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The endpoint lies outside the grid.
    #[error("{which} {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        which: Endpoint,
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    /// The endpoint is an obstacle.
    #[error("{which} {coord} is blocked")]
    BlockedEndpoint { which: Endpoint, coord: Coord },
    /// The grid has more cells than fit in a `usize`.
    #[error("{rows}x{cols} grid is too large to search")]
    GridTooLarge { rows: usize, cols: usize },
}

impl SearchError {
    /// The endpoint the error refers to, if any.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::OutOfBounds { which, .. } | Self::BlockedEndpoint { which, .. } => Some(*which),
            Self::GridTooLarge { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = SearchError::OutOfBounds {
            which: Endpoint::End,
            coord: Coord::new(3, 0),
            rows: 3,
            cols: 3,
        };
        assert_eq!(e.to_string(), "end (3, 0) is outside the 3x3 grid");
        assert_eq!(e.endpoint(), Some(Endpoint::End));

        let e = SearchError::BlockedEndpoint {
            which: Endpoint::Start,
            coord: Coord::new(1, 2),
        };
        assert_eq!(e.to_string(), "start (1, 2) is blocked");
        assert_eq!(e.endpoint(), Some(Endpoint::Start));

        let e = SearchError::GridTooLarge {
            rows: usize::MAX,
            cols: 2,
        };
        assert_eq!(
            e.to_string(),
            format!("{}x2 grid is too large to search", usize::MAX)
        );
        assert_eq!(e.endpoint(), None);
    }
}
