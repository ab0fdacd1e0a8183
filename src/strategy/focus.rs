//! Per-turn target focus.
//!
//! Maps the current own/enemy ant ratio to the resource category the
//! allocator should chase this turn. Behind on ants, chase eggs (they
//! hatch and compound); ahead, burn down crystals while the lead holds;
//! otherwise take whatever is closest. Recomputed every turn from the
//! aggregate counts alone; no memory of previous turns.

use crate::board::CellKind;
use crate::tuning::Tuning;

/// Which resource category the allocator prefers this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Balanced,
    Eggs,
    Crystals,
}

impl Focus {
    /// True if a cell of the given kind passes this focus filter.
    /// Balanced admits any kind; the resource check is the caller's.
    pub fn admits(self, kind: CellKind) -> bool {
        match self {
            Focus::Balanced => true,
            Focus::Eggs => kind == CellKind::Eggs,
            Focus::Crystals => kind == CellKind::Crystals,
        }
    }

    /// Short lowercase name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Focus::Balanced => "balanced",
            Focus::Eggs => "eggs",
            Focus::Crystals => "crystals",
        }
    }
}

/// Classifies the turn from the two aggregate ant counts.
///
/// Bands are checked in priority order with strict comparisons: below
/// `behind_ratio` x enemy prefers eggs, above `ahead_ratio` x enemy
/// prefers crystals, anything else is balanced.
pub fn classify(my_ants: i32, enemy_ants: i32, tuning: &Tuning) -> Focus {
    let mine = my_ants as f64;
    let theirs = enemy_ants as f64;
    if mine < tuning.behind_ratio * theirs {
        Focus::Eggs
    } else if mine > tuning.ahead_ratio * theirs {
        Focus::Crystals
    } else {
        Focus::Balanced
    }
}
