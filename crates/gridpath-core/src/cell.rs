//! The [`CellState`] type: whether a grid cell can be walked through.

/// Traversability of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Free,
    Blocked,
}

impl CellState {
    /// Whether the cell is an obstacle.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Whether the cell can be stepped on.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }

    /// The opposite state.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Free => Self::Blocked,
            Self::Blocked => Self::Free,
        }
    }
}

impl From<bool> for CellState {
    /// `true` means blocked.
    fn from(blocked: bool) -> Self {
        if blocked { Self::Blocked } else { Self::Free }
    }
}
