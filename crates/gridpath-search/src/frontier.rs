//! The A* open set.
//!
//! A binary heap with lazy deletion: improving a cell's score pushes a new
//! entry and leaves the old one behind, and the search discards entries
//! whose score no longer matches the cell's current one.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Coord;

/// Heap entry ordered by `f`, then by discovery sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FrontierEntry {
    pub(crate) f: usize,
    pub(crate) seq: usize,
    pub(crate) coord: Coord,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest f first, and
        // among equal f the earliest-discovered cell.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of discovered cells plus the discovery counter used for
/// tie-breaking.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: usize,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Hand out the next discovery sequence number.
    pub(crate) fn next_seq(&mut self) -> usize {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    pub(crate) fn push(&mut self, coord: Coord, f: usize, seq: usize) {
        self.heap.push(FrontierEntry { f, seq, coord });
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_f_first() {
        let mut fr = Frontier::new();
        let a = fr.next_seq();
        let b = fr.next_seq();
        fr.push(Coord::new(0, 0), 7, a);
        fr.push(Coord::new(0, 1), 3, b);
        assert_eq!(fr.pop().map(|e| e.coord), Some(Coord::new(0, 1)));
        assert_eq!(fr.pop().map(|e| e.coord), Some(Coord::new(0, 0)));
        assert!(fr.pop().is_none());
    }

    #[test]
    fn ties_go_to_earliest_discovery() {
        let mut fr = Frontier::new();
        // Discovered in this order, pushed in reverse.
        let coords = [Coord::new(2, 2), Coord::new(0, 0), Coord::new(1, 1)];
        let seqs: Vec<usize> = coords.iter().map(|_| fr.next_seq()).collect();
        for (c, s) in coords.iter().zip(&seqs).rev() {
            fr.push(*c, 4, *s);
        }
        let popped: Vec<Coord> = std::iter::from_fn(|| fr.pop().map(|e| e.coord)).collect();
        assert_eq!(popped, coords);
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut fr = Frontier::new();
        assert_eq!(fr.next_seq(), 0);
        assert_eq!(fr.next_seq(), 1);
        assert_eq!(fr.next_seq(), 2);
    }
}
