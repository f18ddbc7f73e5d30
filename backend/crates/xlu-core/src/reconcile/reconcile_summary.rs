use crate::ReconcileAction;

use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub updated: usize,
    pub created: usize,
}

impl ReconcileSummary {
    pub fn record(&mut self, action: ReconcileAction) {
        if action.is_update() {
            self.updated += 1;
        } else {
            self.created += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.updated + self.created
    }
}

impl fmt::Display for ReconcileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Upload completed: {} updated, {} created.",
            self.updated, self.created
        )
    }
}
