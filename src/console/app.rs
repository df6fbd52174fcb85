//! Main application logic for the console interface.
//!
//! `App` owns the task store, the view state and the storage backend. The
//! state-changing methods (`add_task`, `toggle_selected`, ...) work without a
//! console so they can be exercised directly; [`App::run`] wires them to a
//! [`Prompter`] and drives the render → read → execute loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::console::{
    enums::{MenuCommand, Outcome, Tone},
    input::Prompter,
    view::render,
};
use crate::error::{CommandError, StorageError};
use crate::fields::{SortKey, ViewFilter};
use crate::storage::TaskStorage;
use crate::store::TaskStore;
use crate::task::Task;

/// Current filter and the selected offset into the visible tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: ViewFilter,
    pub selected: usize,
}

/// Console behaviour switches, set from the command line.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub intro: bool,
    pub pause: bool,
    pub initial_view: ViewFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            intro: true,
            pause: true,
            initial_view: ViewFilter::All,
        }
    }
}

/// Console application state.
pub struct App<S: TaskStorage> {
    store: TaskStore,
    view: ViewState,
    storage: S,
    settings: Settings,
}

impl<S: TaskStorage> App<S> {
    /// Create the app, loading the initial task list from `storage`.
    pub fn new(mut storage: S, settings: Settings) -> Result<Self, StorageError> {
        let tasks = storage.load()?;
        info!(count = tasks.len(), "tasks loaded");
        Ok(App {
            store: TaskStore::from_tasks(tasks),
            view: ViewState {
                filter: settings.initial_view,
                selected: 0,
            },
            storage,
            settings,
        })
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Tasks visible under the current filter.
    pub fn visible(&self) -> Vec<&Task> {
        self.store.visible(self.view.filter)
    }

    /// Id of the selected visible task, clamping the selection into range.
    pub fn selected_id(&mut self) -> Result<u64, CommandError> {
        let visible = self.store.visible(self.view.filter);
        if visible.is_empty() {
            return Err(CommandError::EmptySelection);
        }
        self.view.selected = self.view.selected.min(visible.len() - 1);
        Ok(visible[self.view.selected].id)
    }

    pub fn add_task(&mut self, title: &str, priority: Option<&str>) -> Result<&Task, CommandError> {
        self.store.add(title, priority)
    }

    /// Flip the selected task's completion flag. Returns the new flag.
    pub fn toggle_selected(&mut self) -> Result<bool, CommandError> {
        let id = self.selected_id()?;
        self.store.toggle(id).ok_or(CommandError::EmptySelection)
    }

    /// Remove task `id`, typically one returned by [`App::selected_id`].
    pub fn delete(&mut self, id: u64) -> Result<Task, CommandError> {
        self.store.remove(id).ok_or(CommandError::EmptySelection)
    }

    pub fn sort(&mut self, key: SortKey) {
        self.store.sort(key);
    }

    /// Advance to the next filter and reset the selection.
    pub fn cycle_view(&mut self) -> ViewFilter {
        self.view.filter = self.view.filter.next();
        self.view.selected = 0;
        self.view.filter
    }

    /// Move the selection by one visible entry, stopping at either end.
    pub fn move_selection(&mut self, forward: bool) -> Result<usize, CommandError> {
        let len = self.store.visible(self.view.filter).len();
        if len == 0 {
            return Err(CommandError::EmptySelection);
        }
        let current = self.view.selected.min(len - 1);
        self.view.selected = if forward {
            (current + 1).min(len - 1)
        } else {
            current.saturating_sub(1)
        };
        Ok(self.view.selected)
    }

    /// Run the interactive loop until the exit command or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Prompter<R, W>) -> io::Result<()> {
        if self.settings.intro && console.prompt(Tone::Notice, "⏎ Press Enter to start...")?.is_none() {
            return self.save_and_exit(console);
        }

        loop {
            console.show(&render(&self.store, &self.view))?;
            console.blank()?;
            let Some(choice) = console.prompt(Tone::Prompt, "➤ Choose (0-6): ")? else {
                debug!("end of input at command prompt");
                return self.save_and_exit(console);
            };

            let outcome = match MenuCommand::parse(&choice) {
                Ok(cmd) => self.execute(cmd, console)?,
                Err(e) => {
                    debug!(input = %choice, "unknown command");
                    report(console, &e)?;
                    Outcome::Continue
                }
            };
            if outcome == Outcome::Exit {
                return Ok(());
            }

            if self.settings.pause {
                console.blank()?;
                console.pause("⏎ Enter = continue...")?;
            }
        }
    }

    /// Execute one menu command against the current state.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        cmd: MenuCommand,
        console: &mut Prompter<R, W>,
    ) -> io::Result<Outcome> {
        debug!(?cmd, "executing command");
        let result = match cmd {
            MenuCommand::Add => self.prompt_add(console)?,
            MenuCommand::Toggle => self
                .toggle_selected()
                .map(|_| (Tone::Success, "✅ Status changed!".to_string())),
            MenuCommand::Delete => self.prompt_delete(console)?,
            MenuCommand::Sort(key) => {
                self.sort(key);
                Ok((Tone::Info, format!("🔄 Sorted by {key}")))
            }
            MenuCommand::CycleView => {
                let filter = self.cycle_view();
                Ok((Tone::ViewName, format!("👁️ View: {filter}")))
            }
            MenuCommand::SelectNext | MenuCommand::SelectPrevious => self
                .move_selection(cmd == MenuCommand::SelectNext)
                .map(|i| (Tone::Info, format!("👉 Selected #{}", i + 1))),
            MenuCommand::Exit => {
                self.save_and_exit(console)?;
                return Ok(Outcome::Exit);
            }
        };

        match result {
            Ok((tone, message)) => console.say(tone, &message)?,
            Err(e) => report(console, &e)?,
        }
        Ok(Outcome::Continue)
    }

    fn prompt_add<R: BufRead, W: Write>(
        &mut self,
        console: &mut Prompter<R, W>,
    ) -> io::Result<Result<(Tone, String), CommandError>> {
        console.blank()?;
        console.say(Tone::Success, "➕ NEW TASK")?;
        let title = console.prompt(Tone::Plain, "📝 Title (min 3 chars): ")?.unwrap_or_default();
        if let Err(e) = crate::store::validate_title(&title) {
            return Ok(Err(e));
        }
        let priority = console.prompt(Tone::Plain, "⭐ Priority 1-5 [default 3]: ")?;
        Ok(self
            .add_task(&title, priority.as_deref())
            .map(|task| (Tone::Success, format!("✅ Added: {}", task.title))))
    }

    fn prompt_delete<R: BufRead, W: Write>(
        &mut self,
        console: &mut Prompter<R, W>,
    ) -> io::Result<Result<(Tone, String), CommandError>> {
        let id = match self.selected_id() {
            Ok(id) => id,
            Err(e) => return Ok(Err(e)),
        };
        let title = self.store.get(id).map(|t| t.title.clone()).unwrap_or_default();
        if !console.confirm(&format!("🗑️ Delete '{title}'? (y/n): "))? {
            return Ok(Ok((Tone::Notice, "↩️ Cancelled".to_string())));
        }
        Ok(self
            .delete(id)
            .map(|task| (Tone::Success, format!("✅ Deleted: {}", task.title))))
    }

    fn save_and_exit<R: BufRead, W: Write>(&mut self, console: &mut Prompter<R, W>) -> io::Result<()> {
        if let Err(e) = self.storage.save(self.store.tasks()) {
            warn!(error = %e, "saving tasks failed");
            console.say(Tone::Error, &format!("💾 Could not save tasks: {e}"))?;
        }
        console.blank()?;
        console.say(Tone::Success, "👋 Thanks! See you! 🚀")
    }
}

fn report<R: BufRead, W: Write>(console: &mut Prompter<R, W>, err: &CommandError) -> io::Result<()> {
    match err {
        CommandError::EmptySelection => console.say(Tone::Notice, &format!("ℹ️ {err}")),
        _ => console.say(Tone::Error, &format!("❌ {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Records what was saved instead of printing it.
    #[derive(Default)]
    struct RecordingStorage {
        saved: Option<Vec<Task>>,
        fail: bool,
    }

    impl TaskStorage for RecordingStorage {
        fn load(&mut self) -> Result<Vec<Task>, StorageError> {
            Ok(Vec::new())
        }

        fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire").into());
            }
            self.saved = Some(tasks.to_vec());
            Ok(())
        }
    }

    fn app() -> App<RecordingStorage> {
        App::new(RecordingStorage::default(), Settings::default()).unwrap()
    }

    /// Buy milk (P3), Ship release (P5), Write docs (P2, done).
    fn scenario_app() -> App<RecordingStorage> {
        let mut app = app();
        app.add_task("Buy milk", Some("3")).unwrap();
        app.add_task("Ship release", Some("5")).unwrap();
        let id = app.add_task("Write docs", Some("2")).unwrap().id;
        app.store.toggle(id);
        app
    }

    fn titles(app: &App<RecordingStorage>) -> Vec<String> {
        app.visible().iter().map(|t| t.title.clone()).collect()
    }

    fn console(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), true)
    }

    fn output(console: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    fn quiet() -> Settings {
        Settings {
            intro: false,
            pause: false,
            initial_view: ViewFilter::All,
        }
    }

    #[test]
    fn test_empty_selection_is_a_noop() {
        let mut app = app();
        assert_eq!(app.toggle_selected(), Err(CommandError::EmptySelection));
        assert_eq!(app.selected_id(), Err(CommandError::EmptySelection));
        assert!(app.store().is_empty());
    }

    #[test]
    fn test_views_and_priority_sort() {
        let mut app = scenario_app();
        assert_eq!(app.cycle_view(), ViewFilter::Pending);
        assert_eq!(titles(&app), ["Buy milk", "Ship release"]);
        assert_eq!(app.cycle_view(), ViewFilter::Done);
        assert_eq!(titles(&app), ["Write docs"]);
        assert_eq!(app.cycle_view(), ViewFilter::All);
        app.sort(SortKey::Priority);
        assert_eq!(titles(&app), ["Ship release", "Buy milk", "Write docs"]);
    }

    #[test]
    fn test_cycle_view_resets_selection() {
        let mut app = scenario_app();
        app.move_selection(true).unwrap();
        assert_eq!(app.view().selected, 1);
        app.cycle_view();
        assert_eq!(app.view().selected, 0);
    }

    #[test]
    fn test_toggle_in_pending_view_then_all() {
        let mut app = scenario_app();
        app.cycle_view();
        assert_eq!(app.toggle_selected(), Ok(true));
        app.cycle_view();
        app.cycle_view();
        assert_eq!(app.view().filter, ViewFilter::All);
        let milk = app.visible()[0];
        assert_eq!(milk.title, "Buy milk");
        assert!(milk.done);
    }

    #[test]
    fn test_toggle_resolves_identical_tasks_by_id() {
        let mut app = app();
        app.add_task("Same", Some("2")).unwrap();
        app.add_task("Same", Some("2")).unwrap();
        app.move_selection(true).unwrap();
        app.toggle_selected().unwrap();
        let tasks = app.store().tasks();
        assert!(!tasks[0].done);
        assert!(tasks[1].done);
    }

    #[test]
    fn test_delete_removes_selected_underlying_task() {
        let mut app = scenario_app();
        app.cycle_view();
        app.move_selection(true).unwrap();
        let id = app.selected_id().unwrap();
        let removed = app.delete(id).unwrap();
        assert_eq!(removed.title, "Ship release");
        assert_eq!(app.store().len(), 2);
        assert!(app.store().tasks().iter().all(|t| t.title != "Ship release"));
    }

    #[test]
    fn test_selection_clamps_after_membership_change() {
        let mut app = scenario_app();
        app.cycle_view();
        app.move_selection(true).unwrap();
        // Ship release leaves the pending view.
        app.toggle_selected().unwrap();
        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.selected_id().unwrap(), app.visible()[0].id);
        assert_eq!(app.view().selected, 0);
    }

    #[test]
    fn test_move_selection_stops_at_ends() {
        let mut app = scenario_app();
        assert_eq!(app.move_selection(false), Ok(0));
        assert_eq!(app.move_selection(true), Ok(1));
        assert_eq!(app.move_selection(true), Ok(2));
        assert_eq!(app.move_selection(true), Ok(2));
    }

    #[test]
    fn test_execute_delete_requires_confirmation() {
        let mut app = scenario_app();
        for answer in ["n\n", "\n", "nope\n", ""] {
            let mut c = console(answer);
            assert_eq!(app.execute(MenuCommand::Delete, &mut c).unwrap(), Outcome::Continue);
            assert_eq!(app.store().len(), 3, "answer {answer:?}");
            assert!(output(c).contains("Cancelled"));
        }
        let mut c = console("YES\n");
        app.execute(MenuCommand::Delete, &mut c).unwrap();
        assert_eq!(app.store().len(), 2);
        assert!(output(c).contains("Delete 'Buy milk'? (y/n)"));
        assert_eq!(app.store().tasks()[0].title, "Ship release");
    }

    #[test]
    fn test_execute_delete_removes_the_confirmed_task() {
        let mut app = app();
        app.add_task("Same", Some("2")).unwrap();
        app.add_task("Same", Some("2")).unwrap();
        app.move_selection(true).unwrap();
        let confirmed = app.selected_id().unwrap();

        let mut c = console("y\n");
        app.execute(MenuCommand::Delete, &mut c).unwrap();
        assert_eq!(app.store().len(), 1);
        assert!(app.store().get(confirmed).is_none());
        assert_ne!(app.store().tasks()[0].id, confirmed);
        assert!(output(c).contains("Deleted: Same"));
    }

    #[test]
    fn test_execute_add_validates_title() {
        let mut app = app();
        let mut c = console("ab\n");
        app.execute(MenuCommand::Add, &mut c).unwrap();
        assert!(app.store().is_empty());
        assert!(output(c).contains("Title too short!"));

        let mut c = console("Plan sprint\n9\n");
        app.execute(MenuCommand::Add, &mut c).unwrap();
        assert_eq!(app.store().len(), 1);
        assert_eq!(app.store().tasks()[0].priority, 5);
        assert!(output(c).contains("Added: Plan sprint"));
    }

    #[test]
    fn test_execute_toggle_on_empty_reports_info() {
        let mut app = app();
        let mut c = console("");
        app.execute(MenuCommand::Toggle, &mut c).unwrap();
        assert!(output(c).contains("ℹ️ No tasks"));
    }

    #[test]
    fn test_run_full_session() {
        let mut app = App::new(RecordingStorage::default(), quiet()).unwrap();
        let script = "1\nBuy milk\n\n1\nShip release\n5\nx\n4\n6\n2\n0\n";
        let mut c = console(script);
        app.run(&mut c).unwrap();
        let out = output(c);

        assert!(out.contains("Unknown option! (0-6, +/-)"));
        assert!(out.contains("Sorted by priority"));
        assert!(out.contains("View: pending"));
        assert!(out.contains("Thanks! See you!"));

        let saved = app.storage.saved.as_ref().unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].title, "Ship release");
        assert!(saved[0].done);
        assert_eq!(saved[1].priority, 3);
        assert!(!saved[1].done);
    }

    #[test]
    fn test_run_saves_at_end_of_input() {
        let mut app = App::new(RecordingStorage::default(), Settings::default()).unwrap();
        let mut c = console("\n1\nTidy desk\n2\n\n");
        app.run(&mut c).unwrap();
        let saved = app.storage.saved.as_ref().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "Tidy desk");
        assert_eq!(saved[0].priority, 2);
    }

    #[test]
    fn test_save_failure_still_exits() {
        let storage = RecordingStorage { saved: None, fail: true };
        let mut app = App::new(storage, quiet()).unwrap();
        let mut c = console("0\n");
        app.run(&mut c).unwrap();
        let out = output(c);
        assert!(out.contains("Could not save tasks"));
        assert!(out.contains("Thanks! See you!"));
    }

    #[test]
    fn test_initial_view_from_settings() {
        let settings = Settings {
            initial_view: ViewFilter::Done,
            ..quiet()
        };
        let app = App::new(RecordingStorage::default(), settings).unwrap();
        assert_eq!(app.view().filter, ViewFilter::Done);
    }
}
