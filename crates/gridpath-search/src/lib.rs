//! A* shortest-path search over 4-directional grids.
//!
//! [`find_path`] takes any [`GridModel`] (a [`Grid`](gridpath_core::Grid)
//! implements it) plus a start and an end cell, and returns either a
//! shortest [`Path`] or [`PathResult::NoPath`]. Moves are orthogonal with
//! unit cost and the search is guided by the [`manhattan`] heuristic.
//!
//! ```
//! use gridpath_core::{Coord, Grid};
//! use gridpath_search::{PathResult, find_path};
//!
//! let grid = Grid::parse("..#\n...").unwrap();
//! let (start, end) = grid.corners();
//! let PathResult::Found(path) = find_path(&grid, start, end).unwrap() else {
//!     panic!("expected a path");
//! };
//! assert_eq!(path.steps(), 3);
//! assert_eq!(path.start(), Coord::new(0, 0));
//! ```
//!
//! All working state (open set, closed set, g/f scores, predecessors) is
//! allocated per call and dropped on return, so searches over the same
//! grid may run concurrently.
//!
//! # Errors
//!
//! Endpoints outside the grid or on blocked cells are rejected with a
//! [`SearchError`]. An unreachable goal is not an error.

mod astar;
mod distance;
mod error;
mod frontier;
mod path;
mod traits;

pub use astar::{find_path, find_path_with_stats};
pub use distance::manhattan;
pub use error::{Endpoint, SearchError};
pub use path::{EmptyPath, Path, PathResult, SearchStats};
pub use traits::GridModel;
