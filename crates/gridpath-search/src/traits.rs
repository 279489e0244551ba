use gridpath_core::{Coord, Grid};

/// Read-only view of a grid's traversability.
///
/// Only [`rows`](Self::rows), [`cols`](Self::cols) and
/// [`is_blocked`](Self::is_blocked) are required; everything else has a
/// default built on top of them.
///
/// A search allocates one bookkeeping entry per cell, so `rows * cols` must
/// fit in a `usize` (otherwise [`find_path`](crate::find_path) returns
/// [`SearchError::GridTooLarge`](crate::SearchError::GridTooLarge)) and
/// should fit in memory. This holds for implicit models too.
pub trait GridModel {
    /// Number of rows. Must be at least 1.
    fn rows(&self) -> usize;

    /// Number of columns. Must be at least 1.
    fn cols(&self) -> usize;

    /// Whether the in-bounds cell `c` is an obstacle.
    fn is_blocked(&self, c: Coord) -> bool;

    /// Whether `c` lies inside the grid.
    #[inline]
    fn in_bounds(&self, c: Coord) -> bool {
        c.row < self.rows() && c.col < self.cols()
    }

    /// Flat index of the in-bounds cell `c`. Overrides must map the grid
    /// one-to-one onto `0..rows * cols`.
    #[inline]
    fn flat_index(&self, c: Coord) -> usize {
        c.row * self.cols() + c.col
    }

    /// Append the walkable orthogonal neighbours of `c` into `buf`, in the
    /// order up, down, left, right. The caller clears `buf` before calling.
    ///
    /// The search ignores any out-of-bounds coordinate an override pushes.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for n in c.neighbors_4().into_iter().flatten() {
            if self.in_bounds(n) && !self.is_blocked(n) {
                buf.push(n);
            }
        }
    }
}

impl GridModel for Grid {
    #[inline]
    fn rows(&self) -> usize {
        Grid::rows(self)
    }

    #[inline]
    fn cols(&self) -> usize {
        Grid::cols(self)
    }

    #[inline]
    fn is_blocked(&self, c: Coord) -> bool {
        Grid::is_blocked(self, c)
    }

    #[inline]
    fn in_bounds(&self, c: Coord) -> bool {
        self.contains(c)
    }
}

impl<G: GridModel + ?Sized> GridModel for &G {
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn is_blocked(&self, c: Coord) -> bool {
        (**self).is_blocked(c)
    }

    fn in_bounds(&self, c: Coord) -> bool {
        (**self).in_bounds(c)
    }

    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        (**self).neighbors(c, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(g: &impl GridModel, c: Coord) -> Vec<Coord> {
        let mut buf = Vec::new();
        g.neighbors(c, &mut buf);
        buf
    }

    #[test]
    fn interior_neighbors_in_fixed_order() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(
            neighbors_of(&g, Coord::new(1, 1)),
            vec![
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
            ]
        );
    }

    #[test]
    fn corner_neighbors_stay_in_bounds() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(
            neighbors_of(&g, Coord::new(0, 0)),
            vec![Coord::new(1, 0), Coord::new(0, 1)]
        );
        assert_eq!(
            neighbors_of(&g, Coord::new(2, 2)),
            vec![Coord::new(1, 2), Coord::new(2, 1)]
        );
    }

    #[test]
    fn blocked_neighbors_are_skipped() {
        let g = Grid::parse(".#.\n...\n.#.").unwrap();
        assert_eq!(
            neighbors_of(&g, Coord::new(1, 1)),
            vec![Coord::new(1, 0), Coord::new(1, 2)]
        );
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let g = Grid::new(1, 1).unwrap();
        assert!(neighbors_of(&g, Coord::ZERO).is_empty());
    }

    #[test]
    fn flat_index_matches_grid() {
        let g = Grid::new(4, 7).unwrap();
        let c = Coord::new(3, 5);
        assert_eq!(GridModel::flat_index(&g, c), g.index(c).unwrap());
        assert!(GridModel::in_bounds(&g, c));
        assert!(!GridModel::in_bounds(&g, Coord::new(4, 0)));
    }

    #[test]
    fn reference_delegates() {
        let g = Grid::parse("..\n#.").unwrap();
        let r = &g;
        assert_eq!(GridModel::rows(&r), 2);
        assert!(GridModel::is_blocked(&r, Coord::new(1, 0)));
        assert_eq!(neighbors_of(&r, Coord::ZERO), vec![Coord::new(0, 1)]);
    }
}
