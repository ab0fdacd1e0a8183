//! Arena output commands.
//!
//! The engine's decisions leave as one line per turn: `;`-joined commands,
//! or a bare `WAIT` when there is nothing to do. BEACON carries the plan;
//! LINE and MESSAGE are part of the wire protocol and kept for callers
//! that want them.

/// A single engine-to-arena command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hold a cell with at least `strength` ants.
    Beacon { cell: usize, strength: i32 },
    /// Beacon every cell on the arena-chosen path between two cells.
    Line {
        from: usize,
        to: usize,
        strength: i32,
    },
    /// Free-text diagnostic shown in the arena viewer, ignored by play.
    Message { text: String },
    /// Explicit no-op.
    Wait,
}

/// Formats a single command in wire syntax.
pub fn format_action(action: &Action) -> String {
    match action {
        Action::Beacon { cell, strength } => format!("BEACON {} {}", cell, strength),
        Action::Line { from, to, strength } => format!("LINE {} {} {}", from, to, strength),
        Action::Message { text } => format!("MESSAGE {}", text),
        Action::Wait => "WAIT".to_string(),
    }
}

/// Formats a whole turn: commands joined by `;`, or `WAIT` for none.
pub fn format_turn(actions: &[Action]) -> String {
    if actions.is_empty() {
        return format_action(&Action::Wait);
    }
    let parts: Vec<String> = actions.iter().map(format_action).collect();
    parts.join(";")
}
