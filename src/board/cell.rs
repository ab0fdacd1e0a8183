//! Cell kinds.
//!
//! Every cell on the map is empty, an egg deposit, or a crystal deposit.
//! The kind is fixed for the whole game; only the resource count on the
//! cell changes between turns.

/// Maximum number of neighbor slots a hexagonal cell can have.
pub const NEIGHBOR_SLOTS: usize = 6;

/// The wire sentinel for an absent neighbor slot.
pub const NO_NEIGHBOR: i32 = -1;

/// What a cell holds.
///
/// Egg cells replenish the colony (harvested eggs hatch into more ants);
/// crystal cells are consumed once and gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Eggs,
    Crystals,
}

impl CellKind {
    /// Parses a kind from its numeric wire tag.
    pub fn from_tag(tag: i32) -> Option<CellKind> {
        match tag {
            0 => Some(CellKind::Empty),
            1 => Some(CellKind::Eggs),
            2 => Some(CellKind::Crystals),
            _ => None,
        }
    }

    /// Returns the numeric wire tag for this kind.
    pub const fn tag(self) -> i32 {
        match self {
            CellKind::Empty => 0,
            CellKind::Eggs => 1,
            CellKind::Crystals => 2,
        }
    }

    /// Short lowercase name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            CellKind::Empty => "empty",
            CellKind::Eggs => "eggs",
            CellKind::Crystals => "crystals",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip() {
        for kind in [CellKind::Empty, CellKind::Eggs, CellKind::Crystals] {
            assert_eq!(CellKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(CellKind::from_tag(3), None);
        assert_eq!(CellKind::from_tag(-1), None);
    }
}
