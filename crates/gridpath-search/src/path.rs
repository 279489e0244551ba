use gridpath_core::Coord;
use thiserror::Error;

/// A route through a grid, from start to end inclusive.
///
/// A `Path` always holds at least one coordinate, and consecutive
/// coordinates are orthogonally adjacent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Coord>", into = "Vec<Coord>"))]
pub struct Path(Vec<Coord>);

impl Path {
    /// Wrap a non-empty coordinate sequence.
    pub(crate) fn new(coords: Vec<Coord>) -> Self {
        debug_assert!(!coords.is_empty());
        Self(coords)
    }

    /// The coordinates, start first.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    /// Number of coordinates, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves: one less than [`len`](Self::len).
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// First coordinate.
    #[inline]
    pub fn start(&self) -> Coord {
        self.0[0]
    }

    /// Last coordinate.
    #[inline]
    pub fn end(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    /// Whether the path passes through `c`.
    pub fn contains(&self, c: Coord) -> bool {
        self.0.contains(&c)
    }

    /// Iterate over the coordinates, start first.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.0.iter()
    }

    /// Unwrap into the coordinate vector.
    pub fn into_vec(self) -> Vec<Coord> {
        self.0
    }
}

impl IntoIterator for Path {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A path must hold at least one coordinate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("path must contain at least one coordinate")]
pub struct EmptyPath;

impl TryFrom<Vec<Coord>> for Path {
    type Error = EmptyPath;

    fn try_from(coords: Vec<Coord>) -> Result<Self, Self::Error> {
        if coords.is_empty() {
            return Err(EmptyPath);
        }
        Ok(Self(coords))
    }
}

impl From<Path> for Vec<Coord> {
    fn from(p: Path) -> Self {
        p.0
    }
}

impl AsRef<[Coord]> for Path {
    fn as_ref(&self) -> &[Coord] {
        &self.0
    }
}

/// Outcome of a well-formed search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// A shortest route was found.
    Found(Path),
    /// The goal cannot be reached from the start.
    NoPath,
}

impl PathResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPath => None,
        }
    }

    /// Consume the result, returning the path if one was found.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPath => None,
        }
    }
}

impl From<Option<Path>> for PathResult {
    fn from(p: Option<Path>) -> Self {
        p.map_or(Self::NoPath, Self::Found)
    }
}

/// Work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells moved to the closed set.
    pub expanded: usize,
    /// Distinct cells ever inserted into the open set, start included.
    pub discovered: usize,
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_result_round_trip() {
        let r = PathResult::Found(Path::new(vec![Coord::new(0, 0), Coord::new(1, 0)]));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"Found":[{"row":0,"col":0},{"row":1,"col":0}]}"#);
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);

        let json = serde_json::to_string(&PathResult::NoPath).unwrap();
        assert_eq!(json, r#""NoPath""#);
    }

    #[test]
    fn empty_path_is_rejected() {
        let res: Result<Path, _> = serde_json::from_str("[]");
        assert!(res.is_err());
    }

    #[test]
    fn stats_round_trip() {
        let s = SearchStats {
            expanded: 4,
            discovered: 7,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
