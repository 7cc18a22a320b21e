// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time counts for reporting.

use serde::{Deserialize, Serialize};

/// Counts of completed orders by class, active bots, and pending orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub completed_vip: usize,
    pub completed_normal: usize,
    pub active_bots: usize,
    pub pending: usize,
}

impl Summary {
    pub fn completed_total(&self) -> usize {
        self.completed_vip + self.completed_normal
    }

    /// Report lines, starting with a blank separator line.
    pub fn lines(&self) -> Vec<String> {
        vec![
            String::new(),
            "Final Status:".to_string(),
            format!(
                "- Total Orders Processed: {} ({} VIP, {} Normal)",
                self.completed_total(),
                self.completed_vip,
                self.completed_normal
            ),
            format!("- Orders Completed: {}", self.completed_total()),
            format!("- Active Bots: {}", self.active_bots),
            format!("- Pending Orders: {}", self.pending),
        ]
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
