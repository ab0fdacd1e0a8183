//! Arena protocol handling.
//!
//! Parsing for the startup and per-turn input blocks, and formatting for
//! the per-turn command line. The engine itself only ever sees parsed
//! layouts and snapshots and only ever produces actions; serialization in
//! both directions lives here.

pub mod commands;
pub mod reader;

pub use commands::{format_action, format_turn, Action};
pub use reader::{read_layout, read_snapshot, ProtocolError};
