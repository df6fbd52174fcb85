//! Enumerations used to filter, sort and annotate tasks.

use std::fmt;

use clap::ValueEnum;

/// Which subset of tasks is visible.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ViewFilter {
    #[default]
    All,
    Pending,
    Done,
}

impl ViewFilter {
    /// Next filter in the fixed cycle All → Pending → Done → All.
    pub fn next(self) -> Self {
        match self {
            ViewFilter::All => ViewFilter::Pending,
            ViewFilter::Pending => ViewFilter::Done,
            ViewFilter::Done => ViewFilter::All,
        }
    }

    /// Whether a task with the given completion flag belongs to this view.
    pub fn matches(self, done: bool) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Pending => !done,
            ViewFilter::Done => done,
        }
    }
}

impl fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewFilter::All => "all",
            ViewFilter::Pending => "pending",
            ViewFilter::Done => "done",
        })
    }
}

/// Keys the underlying sequence can be reordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Highest priority first.
    Priority,
    /// Oldest first.
    Date,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Priority => "priority",
            SortKey::Date => "date",
        })
    }
}

/// Coarse priority bands shown as coloured markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub fn from_priority(priority: u8) -> Self {
        if priority == 5 {
            PriorityTier::High
        } else if priority >= 3 {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            PriorityTier::High => "🔴",
            PriorityTier::Medium => "🟡",
            PriorityTier::Low => "🟢",
        }
    }
}
