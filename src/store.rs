//! In-memory task store and input helpers.
//!
//! `TaskStore` owns the underlying sequence of tasks. Filtered views are
//! projected from it on demand and never cached, so every caller sees the
//! current order and membership after a sort, toggle or delete.

use std::num::IntErrorKind;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::CommandError;
use crate::fields::{SortKey, ViewFilter};
use crate::task::Task;

/// Minimum title length, counted in characters after trimming.
pub const MIN_TITLE_LEN: usize = 3;
/// Priority used when the input is empty or not a number.
pub const DEFAULT_PRIORITY: u8 = 3;
pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 5;

/// The underlying, unfiltered task sequence.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Create a store from previously loaded tasks.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().map_or(0, |id| id + 1);
        TaskStore { tasks, next_id }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns `(pending, completed)`.
    pub fn counts(&self) -> (usize, usize) {
        let pending = self.tasks.iter().filter(|t| !t.done).count();
        (pending, self.tasks.len() - pending)
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks matching `filter`, in underlying order.
    pub fn visible(&self, filter: ViewFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t.done)).collect()
    }

    /// Validate and append a new pending task created now.
    pub fn add(&mut self, title: &str, priority_input: Option<&str>) -> Result<&Task, CommandError> {
        self.add_at(title, priority_input, Local::now())
    }

    /// Same as [`TaskStore::add`] with an explicit creation time.
    pub fn add_at(
        &mut self,
        title: &str,
        priority_input: Option<&str>,
        created: DateTime<Local>,
    ) -> Result<&Task, CommandError> {
        let title = validate_title(title)?;
        let priority = parse_priority_input(priority_input);
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            title,
            priority,
            done: false,
            created,
        });
        debug!(id, priority, "task added");
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flip the completion flag of task `id`. Returns the new flag.
    pub fn toggle(&mut self, id: u64) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.done = !task.done;
        Some(task.done)
    }

    /// Remove task `id` from the sequence.
    pub fn remove(&mut self, id: u64) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    /// Reorder the underlying sequence. Stable for equal keys.
    pub fn sort(&mut self, key: SortKey) {
        match key {
            SortKey::Priority => self.tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
            SortKey::Date => self.tasks.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id))),
        }
    }
}

/// Trim a title and check its length.
pub fn validate_title(raw: &str) -> Result<String, CommandError> {
    let title = raw.trim();
    let len = title.chars().count();
    if len < MIN_TITLE_LEN {
        return Err(CommandError::TitleTooShort { len, min: MIN_TITLE_LEN });
    }
    Ok(title.to_string())
}

/// Parse priority input, falling back to the default and clamping into range.
pub fn parse_priority_input(raw: Option<&str>) -> u8 {
    let Some(s) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_PRIORITY;
    };
    match s.parse::<i64>() {
        Ok(n) => n.clamp(MIN_PRIORITY as i64, MAX_PRIORITY as i64) as u8,
        // Overflow can be reported before a later bad character is seen.
        Err(e) if is_integer_literal(s) && *e.kind() == IntErrorKind::PosOverflow => MAX_PRIORITY,
        Err(e) if is_integer_literal(s) && *e.kind() == IntErrorKind::NegOverflow => MIN_PRIORITY,
        Err(e) => {
            debug!(input = s, error = %e, "priority not a number, using default");
            DEFAULT_PRIORITY
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
