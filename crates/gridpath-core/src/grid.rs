//! The [`Grid`] type: a rectangular table of [`CellState`]s.
//!
//! A `Grid` owns its cells in a flat row-major buffer. Searches only ever
//! borrow it immutably, so a grid can be shared between threads while any
//! number of searches run over it.

use crate::cell::CellState;
use crate::error::GridError;
use crate::geom::Coord;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `rows` x `cols` grid of free and blocked cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<CellState>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a new grid of the given dimensions with every cell free.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::from_fn(rows, cols, |_| CellState::Free)
    }

    /// Create a grid whose cells are computed by `f`, in row-major order.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(Coord) -> CellState,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroSize { rows, cols });
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(Coord::new(row, col)));
            }
        }
        Ok(Self { cells, rows, cols })
    }

    /// Assemble a grid from an already validated row-major buffer.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<CellState>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && cells.len() == rows * cols);
        Self { cells, rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        self.contains(c).then(|| c.row * self.cols + c.col)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx / self.cols, idx % self.cols)
    }

    /// The state of the cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<CellState> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is an obstacle. Cells outside the grid count as blocked.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        self.get(c).is_none_or(CellState::is_blocked)
    }

    /// Set the cell at `c`. Returns `false` (and does nothing) if `c` is out
    /// of bounds.
    pub fn set(&mut self, c: Coord, state: CellState) -> bool {
        match self.index(c) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Mark `c` as an obstacle.
    pub fn block(&mut self, c: Coord) -> bool {
        self.set(c, CellState::Blocked)
    }

    /// Mark `c` as free.
    pub fn clear(&mut self, c: Coord) -> bool {
        self.set(c, CellState::Free)
    }

    /// Flip the cell at `c` between free and blocked, returning its new
    /// state, or `None` if `c` is out of bounds.
    pub fn toggle(&mut self, c: Coord) -> Option<CellState> {
        let i = self.index(c)?;
        let next = self.cells[i].toggled();
        self.cells[i] = next;
        Some(next)
    }

    /// Set every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Top-left and bottom-right cells, the conventional start and goal.
    pub fn corners(&self) -> (Coord, Coord) {
        (Coord::ZERO, Coord::new(self.rows - 1, self.cols - 1))
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_blocked()).count()
    }

    /// Row-major iterator over `(Coord, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| (self.coord(i), s))
    }

    /// Cells of one row, or `None` if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[CellState]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }
}
