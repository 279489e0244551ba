//! Errors raised while building a [`Grid`](crate::Grid).

use thiserror::Error;

/// Errors from grid construction and ASCII map parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    #[error("grid must be at least 1x1, got {rows}x{cols}")]
    ZeroSize { rows: usize, cols: usize },
    /// The map text contained no rows.
    #[error("map is empty")]
    EmptyMap,
    /// A row is wider or narrower than the first row.
    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither the free nor the blocked glyph.
    #[error("unknown map character \u{201c}{ch}\u{201d} at ({row}, {col})")]
    UnknownGlyph { ch: char, row: usize, col: usize },
    /// Free and blocked glyphs must differ.
    #[error("legend uses \u{201c}{0}\u{201d} for both free and blocked cells")]
    AmbiguousLegend(char),
}
