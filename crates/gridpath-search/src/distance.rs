use gridpath_core::Coord;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for 4-directional movement with unit step
/// cost, which makes it the A* heuristic used by [`find_path`](crate::find_path).
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> usize {
    a.manhattan(b)
}
