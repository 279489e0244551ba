use gridpath_core::Coord;

use crate::distance::manhattan;
use crate::error::{Endpoint, SearchError};
use crate::frontier::Frontier;
use crate::path::{Path, PathResult, SearchStats};
use crate::traits::GridModel;

/// Cost of a cell that has not been reached yet.
const UNREACHED: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Unseen,
    Open,
    Closed,
}

/// Per-cell bookkeeping: g and f scores, predecessor, discovery order.
#[derive(Clone, Copy, Debug)]
struct Node {
    g: usize,
    f: usize,
    parent: Option<Coord>,
    seq: usize,
    status: Status,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHED,
            f: UNREACHED,
            parent: None,
            seq: 0,
            status: Status::Unseen,
        }
    }
}

/// Compute a shortest 4-directional path from `start` to `end` using A*.
///
/// Every step costs 1 and the heuristic is the Manhattan distance, so the
/// returned path is always a shortest one. When several shortest paths
/// exist the choice is deterministic: among frontier cells with equal
/// f-score the one discovered first is expanded first, and neighbours are
/// discovered in the order up, down, left, right.
///
/// Returns [`PathResult::NoPath`] when `end` cannot be reached. Endpoints
/// outside the grid or on blocked cells, and grids whose cell count
/// overflows a `usize`, are rejected with a [`SearchError`] before any
/// searching happens.
pub fn find_path<G: GridModel + ?Sized>(
    grid: &G,
    start: Coord,
    end: Coord,
) -> Result<PathResult, SearchError> {
    find_path_with_stats(grid, start, end).map(|(result, _)| result)
}

/// Like [`find_path`], also reporting how much work the search did.
pub fn find_path_with_stats<G: GridModel + ?Sized>(
    grid: &G,
    start: Coord,
    end: Coord,
) -> Result<(PathResult, SearchStats), SearchError> {
    let cells = grid
        .rows()
        .checked_mul(grid.cols())
        .ok_or(SearchError::GridTooLarge {
            rows: grid.rows(),
            cols: grid.cols(),
        })?;
    check_bounds(grid, start, Endpoint::Start)?;
    check_bounds(grid, end, Endpoint::End)?;
    check_free(grid, start, Endpoint::Start)?;
    check_free(grid, end, Endpoint::End)?;

    log::debug!(
        "astar: {}x{} grid, {} -> {}",
        grid.rows(),
        grid.cols(),
        start,
        end
    );

    let (result, stats) = Search::new(grid, end, cells).run(start);

    match &result {
        PathResult::Found(path) => log::debug!(
            "astar: found {} step path ({} expanded, {} discovered)",
            path.steps(),
            stats.expanded,
            stats.discovered
        ),
        PathResult::NoPath => log::debug!(
            "astar: no path from {} to {} ({} expanded, {} discovered)",
            start,
            end,
            stats.expanded,
            stats.discovered
        ),
    }

    Ok((result, stats))
}

fn check_bounds<G: GridModel + ?Sized>(
    grid: &G,
    coord: Coord,
    which: Endpoint,
) -> Result<(), SearchError> {
    if grid.in_bounds(coord) {
        return Ok(());
    }
    Err(SearchError::OutOfBounds {
        which,
        coord,
        rows: grid.rows(),
        cols: grid.cols(),
    })
}

fn check_free<G: GridModel + ?Sized>(
    grid: &G,
    coord: Coord,
    which: Endpoint,
) -> Result<(), SearchError> {
    if grid.is_blocked(coord) {
        return Err(SearchError::BlockedEndpoint { which, coord });
    }
    Ok(())
}

/// Working state of one search. Built fresh for every call and dropped
/// when it returns.
struct Search<'g, G: ?Sized> {
    grid: &'g G,
    goal: Coord,
    nodes: Vec<Node>,
    open: Frontier,
    stats: SearchStats,
}

impl<'g, G: GridModel + ?Sized> Search<'g, G> {
    fn new(grid: &'g G, goal: Coord, cells: usize) -> Self {
        Self {
            grid,
            goal,
            nodes: vec![Node::default(); cells],
            open: Frontier::new(),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn node(&self, c: Coord) -> &Node {
        &self.nodes[self.grid.flat_index(c)]
    }

    #[inline]
    fn node_mut(&mut self, c: Coord) -> &mut Node {
        let i = self.grid.flat_index(c);
        &mut self.nodes[i]
    }

    fn run(mut self, start: Coord) -> (PathResult, SearchStats) {
        let seq = self.open.next_seq();
        let f = manhattan(start, self.goal);
        *self.node_mut(start) = Node {
            g: 0,
            f,
            parent: None,
            seq,
            status: Status::Open,
        };
        self.open.push(start, f, seq);
        self.stats.discovered = 1;

        let mut nbuf = Vec::with_capacity(4);

        let found = 'search: loop {
            let Some(entry) = self.open.pop() else {
                break 'search false;
            };
            let current = entry.coord;

            // Skip entries superseded by a better score or already closed.
            let node = self.node(current);
            if node.status != Status::Open || node.f != entry.f {
                continue;
            }

            if current == self.goal {
                break 'search true;
            }

            let current_g = node.g;
            self.node_mut(current).status = Status::Closed;
            self.stats.expanded += 1;
            log::trace!("astar: expand {} g={} f={}", current, current_g, entry.f);

            nbuf.clear();
            self.grid.neighbors(current, &mut nbuf);

            for &n in nbuf.iter() {
                if !self.grid.in_bounds(n) {
                    continue;
                }
                let tentative_g = current_g + 1;
                let status = self.node(n).status;
                match status {
                    Status::Closed => continue,
                    Status::Open => {
                        if tentative_g >= self.node(n).g {
                            continue;
                        }
                    }
                    Status::Unseen => {
                        let seq = self.open.next_seq();
                        let node = self.node_mut(n);
                        node.seq = seq;
                        node.status = Status::Open;
                        self.stats.discovered += 1;
                    }
                }

                let f = tentative_g + manhattan(n, self.goal);
                let node = self.node_mut(n);
                node.parent = Some(current);
                node.g = tentative_g;
                node.f = f;
                let seq = node.seq;
                self.open.push(n, f, seq);
            }
        };

        if !found {
            return (PathResult::NoPath, self.stats);
        }

        // Reconstruct path.
        let mut coords = vec![self.goal];
        let mut c = self.goal;
        while let Some(p) = self.node(c).parent {
            coords.push(p);
            c = p;
        }
        coords.reverse();
        (PathResult::Found(Path::new(coords)), self.stats)
    }
}
