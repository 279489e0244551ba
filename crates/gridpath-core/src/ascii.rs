//! ASCII map format for grids.
//!
//! A map is one line per row, one character per cell. With the default
//! [`Legend`] `.` is free and `#` is blocked:
//!
//! ```text
//! ..#..
//! ..#..
//! .....
//! ```
//!
//! Blank lines before the first row and after the last are ignored, and a
//! trailing `'\r'` is stripped from every line.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellState;
use crate::error::GridError;
use crate::grid::Grid;

/// Characters used for free and blocked cells in ASCII maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legend {
    free: char,
    blocked: char,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            free: '.',
            blocked: '#',
        }
    }
}

impl Legend {
    /// Create a legend. The two glyphs must differ.
    pub fn new(free: char, blocked: char) -> Result<Self, GridError> {
        if free == blocked {
            return Err(GridError::AmbiguousLegend(free));
        }
        Ok(Self { free, blocked })
    }

    /// Glyph for free cells.
    pub fn free(&self) -> char {
        self.free
    }

    /// Glyph for blocked cells.
    pub fn blocked(&self) -> char {
        self.blocked
    }

    /// Glyph for `state`.
    pub fn glyph(&self, state: CellState) -> char {
        match state {
            CellState::Free => self.free,
            CellState::Blocked => self.blocked,
        }
    }

    /// Cell state for `ch`, or `None` if the legend does not know it.
    pub fn state(&self, ch: char) -> Option<CellState> {
        if ch == self.free {
            Some(CellState::Free)
        } else if ch == self.blocked {
            Some(CellState::Blocked)
        } else {
            None
        }
    }
}

impl Grid {
    /// Parse an ASCII map using the default legend.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        Self::parse_with(s, &Legend::default())
    }

    /// Parse an ASCII map using `legend`.
    ///
    /// Every row must have the same width as the first one.
    pub fn parse_with(s: &str, legend: &Legend) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .trim_matches(|c| c == '\n' || c == '\r')
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if cols == 0 {
            return Err(GridError::EmptyMap);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let state = legend
                    .state(ch)
                    .ok_or(GridError::UnknownGlyph { ch, row, col })?;
                cells.push(state);
            }
        }

        Ok(Self::from_parts(rows, cols, cells))
    }

    /// Render the grid as an ASCII map using `legend`, rows separated by
    /// `'\n'` with no trailing newline.
    pub fn render(&self, legend: &Legend) -> String {
        let mut out = String::with_capacity(self.len() + self.rows());
        for row in 0..self.rows() {
            if row > 0 {
                out.push('\n');
            }
            if let Some(cells) = self.row(row) {
                out.extend(cells.iter().map(|&s| legend.glyph(s)));
            }
        }
        out
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Legend::default()))
    }
}

// A grid serializes as its ASCII rows under the default legend.
#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let legend = Legend::default();
        let rows: Vec<String> = (0..self.rows())
            .filter_map(|r| self.row(r))
            .map(|cells| cells.iter().map(|&s| legend.glyph(s)).collect())
            .collect();
        serde::Serialize::serialize(&rows, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows: Vec<String> = serde::Deserialize::deserialize(deserializer)?;
        Grid::parse(&rows.join("\n")).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Coord;

    const WALL: &str = "\
..#..
..#..
.....";

    #[test]
    fn parse_and_size() {
        let g = Grid::parse(WALL).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 5);
        assert_eq!(g.blocked_count(), 2);
        assert!(g.is_blocked(Coord::new(0, 2)));
        assert!(g.is_blocked(Coord::new(1, 2)));
        assert!(!g.is_blocked(Coord::new(2, 2)));
    }

    #[test]
    fn display_round_trip() {
        let g: Grid = WALL.parse().unwrap();
        assert_eq!(g.to_string(), WALL);
    }

    #[test]
    fn surrounding_blank_lines_and_crlf() {
        let g = Grid::parse("\n.#\r\n#.\r\n\n").unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 2);
        assert_eq!(g.to_string(), ".#\n#.");
    }

    #[test]
    fn empty_map() {
        assert_eq!(Grid::parse(""), Err(GridError::EmptyMap));
        assert_eq!(Grid::parse("\n\n"), Err(GridError::EmptyMap));
    }

    #[test]
    fn ragged_rows() {
        assert_eq!(
            Grid::parse("...\n..\n..."),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn unknown_glyph() {
        let err = Grid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownGlyph {
                ch: 'x',
                row: 1,
                col: 1,
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn custom_legend() {
        let legend = Legend::new('0', '1').unwrap();
        let g = Grid::parse_with("010\n000", &legend).unwrap();
        assert_eq!(g.blocked_count(), 1);
        assert!(g.is_blocked(Coord::new(0, 1)));
        assert_eq!(g.render(&legend), "010\n000");
        assert_eq!(g.to_string(), ".#.\n...");
    }

    #[test]
    fn ambiguous_legend() {
        assert_eq!(Legend::new('x', 'x'), Err(GridError::AmbiguousLegend('x')));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse(".#.\n...").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"[".#.","..."]"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn grid_rejects_ragged_json() {
        let res: Result<Grid, _> = serde_json::from_str(r#"["..","."]"#);
        assert!(res.is_err());
    }
}
