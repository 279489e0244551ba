//! **gridpath-core**: grid model for 4-directional pathfinding.
//!
//! This crate provides the types every search in the *gridpath* workspace
//! reads from: [`Coord`] cell positions, the [`CellState`] of each cell, the
//! rectangular [`Grid`] that owns them, and a small ASCII map format for
//! building grids by hand.

pub mod ascii;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use ascii::Legend;
pub use cell::CellState;
pub use error::GridError;
pub use geom::Coord;
pub use grid::Grid;
