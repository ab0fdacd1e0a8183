//! Board representation.
//!
//! Contains the static map layout (cells, neighbors, bases) and the
//! per-turn snapshot of resources and ant counts.

pub mod cell;
pub mod layout;
pub mod state;

pub use cell::{CellKind, NEIGHBOR_SLOTS, NO_NEIGHBOR};
pub use layout::{Cell, Layout};
pub use state::Snapshot;
