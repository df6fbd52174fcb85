//! Storage boundary for the task list.
//!
//! The loop talks to a [`TaskStorage`] rather than to files directly. The only
//! implementation shipped is [`ConsoleStorage`]: nothing is loaded at startup
//! and "saving" prints the list as JSON for the user to copy.

use std::io::Write;

use tracing::info;

use crate::error::StorageError;
use crate::task::Task;

/// Where tasks come from at startup and go to at exit.
pub trait TaskStorage {
    fn load(&mut self) -> Result<Vec<Task>, StorageError>;
    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// Echo-only storage writing a JSON dump to a console writer.
pub struct ConsoleStorage<W: Write> {
    out: W,
}

impl<W: Write> ConsoleStorage<W> {
    pub fn new(out: W) -> Self {
        ConsoleStorage { out }
    }
}

impl<W: Write> TaskStorage for ConsoleStorage<W> {
    fn load(&mut self) -> Result<Vec<Task>, StorageError> {
        Ok(Vec::new())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let data = serde_json::to_string_pretty(tasks)?;
        writeln!(self.out)?;
        writeln!(self.out, "💾 DATA SAVED TO MEMORY (console only)")?;
        writeln!(self.out, "📋 Copy this to a notepad:")?;
        writeln!(self.out, "{data}")?;
        self.out.flush()?;
        info!(count = tasks.len(), "tasks echoed to console");
        Ok(())
    }
}
