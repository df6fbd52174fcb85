//! Task data structure.
//!
//! A `Task` is one entry in the underlying sequence owned by
//! [`TaskStore`](crate::store::TaskStore). Tasks carry a stable id assigned at
//! creation so that a selection in a filtered view always resolves to the right
//! entry, even when two tasks look identical.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::fields::PriorityTier;

/// Display format for creation timestamps: day.month hour:minute.
pub const CREATED_FORMAT: &str = "%d.%m %H:%M";

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub priority: u8,
    pub done: bool,
    #[serde(with = "created_format")]
    pub created: DateTime<Local>,
}

impl Task {
    /// Priority tier used for the coloured marker.
    pub fn tier(&self) -> PriorityTier {
        PriorityTier::from_priority(self.priority)
    }

    /// Creation timestamp in display form.
    pub fn created_display(&self) -> String {
        self.created.format(CREATED_FORMAT).to_string()
    }
}

/// Serialises `created` in the same day.month hour:minute form shown on screen.
mod created_format {
    use chrono::{DateTime, Local};
    use serde::Serializer;

    use super::CREATED_FORMAT;

    pub fn serialize<S>(created: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&created.format(CREATED_FORMAT))
    }
}
