//! View Plan
//!
//! Decides which parts of the board are shown. Kept apart from the
//! components so the policy can be tested without a DOM.

use crate::board::BoardStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPlan {
    /// Nothing on the board: empty-state message only, no stats, no bulk action
    Empty,
    /// Stats line, item rows and the clear-completed action
    List {
        stats: BoardStats,
        /// Clear-completed is disabled when nothing is completed
        clear_enabled: bool,
    },
}

impl ViewPlan {
    pub fn from_stats(stats: BoardStats) -> Self {
        if stats.total == 0 {
            ViewPlan::Empty
        } else {
            ViewPlan::List {
                stats,
                clear_enabled: stats.completed > 0,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ViewPlan::Empty)
    }

    /// Stats to show, if the stats line is visible
    pub fn stats(&self) -> Option<BoardStats> {
        match self {
            ViewPlan::Empty => None,
            ViewPlan::List { stats, .. } => Some(*stats),
        }
    }

    /// `Some(enabled)` when the clear-completed action is shown
    pub fn clear_action(&self) -> Option<bool> {
        match self {
            ViewPlan::Empty => None,
            ViewPlan::List { clear_enabled, .. } => Some(*clear_enabled),
        }
    }
}
