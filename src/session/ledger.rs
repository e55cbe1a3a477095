//! Tested-location set for the current quadrant run.

use std::collections::HashSet;

use crate::core::GridPoint;

/// Set of already-probed grid cells.
///
/// A cell enters the ledger when its probe outcome is recorded, and the
/// selection strategy refuses any ledgered cell, so no coordinate is ever
/// probed twice within a quadrant run. Cleared exactly when a new run
/// starts.
#[derive(Clone, Debug, Default)]
pub struct LocationLedger {
    tested: HashSet<GridPoint>,
}

impl LocationLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Has this cell already been probed?
    pub fn is_tested(&self, point: GridPoint) -> bool {
        self.tested.contains(&point)
    }

    /// Record a probed cell (idempotent)
    pub fn mark_tested(&mut self, point: GridPoint) {
        self.tested.insert(point);
    }

    /// Number of distinct probed cells
    pub fn len(&self) -> usize {
        self.tested.len()
    }

    /// Is the ledger empty?
    pub fn is_empty(&self) -> bool {
        self.tested.is_empty()
    }

    /// Reset to empty (called at quadrant start)
    pub fn clear(&mut self) {
        self.tested.clear();
    }
}
