//! Engine state and per-turn decisions.
//!
//! Owns the immutable pieces of a game: the map layout, the distance field
//! computed once from the owned bases, and the strategy tuning. Each turn
//! it classifies the ant-count ratio, runs the greedy allocator against
//! the turn's snapshot, and renders the plan as arena commands.

use crate::board::{Layout, Snapshot};
use crate::pathing::DistanceField;
use crate::protocol::Action;
use crate::strategy::{allocate, classify, Allocation, Focus, StopCause};
use crate::tuning::Tuning;

/// Holds the immutable per-game state shared by every turn.
pub struct Engine {
    pub layout: Layout,
    pub field: DistanceField,
    pub tuning: Tuning,
}

impl Engine {
    /// Creates an engine with default tuning.
    pub fn new(layout: Layout) -> Engine {
        Engine::with_tuning(layout, Tuning::default())
    }

    /// Creates an engine, computing the distance field from the owned
    /// bases in the layout.
    pub fn with_tuning(layout: Layout, tuning: Tuning) -> Engine {
        let field = DistanceField::compute(&layout, &layout.my_bases);
        Engine {
            layout,
            field,
            tuning,
        }
    }

    /// Runs one turn's classification and allocation, leaving the result
    /// inspectable for callers that want statistics rather than commands.
    pub fn plan(&self, snap: &Snapshot) -> (Focus, Allocation) {
        let budget = snap.my_total();
        let focus = classify(budget, snap.enemy_total(), &self.tuning);
        let allocation = allocate(&self.layout, &self.field, snap, focus, budget);
        (focus, allocation)
    }

    /// Decides one turn. An empty vec means the caller should emit WAIT.
    pub fn decide(&self, snap: &Snapshot) -> Vec<Action> {
        let (focus, allocation) = self.plan(snap);
        let mut actions: Vec<Action> = allocation
            .plan
            .iter()
            .map(|(cell, strength)| Action::Beacon { cell, strength })
            .collect();
        if self.tuning.announce && !actions.is_empty() {
            actions.push(Action::Message {
                text: format!("{} x{}", focus.name(), allocation.plan.len()),
            });
        }
        if let StopCause::BudgetExceeded { cell } = allocation.stop {
            eprintln!(
                "budget {} exhausted at cell {} ({} cells committed)",
                snap.my_total(),
                cell,
                allocation.plan.len()
            );
        }
        actions
    }
}
