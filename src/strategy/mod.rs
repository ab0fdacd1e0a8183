//! Per-turn decision strategy.
//!
//! The focus classifier picks which resource category to chase from the
//! aggregate ant counts; the allocator turns that into a budgeted set of
//! reinforced paths.

pub mod allocate;
pub mod focus;

pub use allocate::{allocate, Allocation, Plan, StopCause};
pub use focus::{classify, Focus};
