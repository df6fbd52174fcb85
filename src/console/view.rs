//! Pure rendering of the main screen.
//!
//! [`render`] turns the store and view state into a [`Screen`] of toned lines.
//! It never mutates anything; colour is applied later by the writer.

use crate::console::app::ViewState;
use crate::console::enums::Tone;
use crate::store::TaskStore;
use crate::task::Task;

const RULE_WIDTH: usize = 50;

/// One rendered line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

impl Line {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Line { tone, text: text.into() }
    }
}

/// A full screen of output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<Line>,
}

impl Screen {
    fn push(&mut self, tone: Tone, text: impl Into<String>) {
        self.lines.push(Line::new(tone, text));
    }
}

/// Render the whole main screen.
pub fn render(store: &TaskStore, view: &ViewState) -> Screen {
    let mut screen = Screen::default();
    header(&mut screen);
    stats(&mut screen, store, view);
    screen.push(Tone::Plain, "");
    task_list(&mut screen, store, view);
    menu(&mut screen);
    screen
}

fn header(screen: &mut Screen) {
    let rule = "=".repeat(RULE_WIDTH);
    screen.push(Tone::Border, rule.clone());
    screen.push(Tone::Title, format!("           🚀 TODO MANAGER v{}", env!("CARGO_PKG_VERSION")));
    screen.push(Tone::Border, rule);
}

fn stats(screen: &mut Screen, store: &TaskStore, view: &ViewState) {
    let (pending, done) = store.counts();
    screen.push(Tone::Stats, format!("📊 {pending} pending | {done} completed"));
    screen.push(Tone::ViewName, format!("👁️ View: {}", view.filter));
}

fn task_list(screen: &mut Screen, store: &TaskStore, view: &ViewState) {
    let visible = store.visible(view.filter);
    if visible.is_empty() {
        screen.push(Tone::Empty, "📭 No tasks - add your first one! 🎯");
        return;
    }
    let selected = view.selected.min(visible.len() - 1);
    for (i, task) in visible.iter().enumerate() {
        let is_selected = i == selected;
        let tone = if is_selected { Tone::Selected } else { Tone::Task };
        screen.push(tone, task_line(task, is_selected));
    }
}

/// Format one task entry.
pub fn task_line(task: &Task, selected: bool) -> String {
    let marker = if task.done { "✅" } else { "○" };
    let sel = if selected { " 👈" } else { "" };
    format!(
        "  {} {} P{} {}  ({}){}",
        marker,
        task.tier().marker(),
        task.priority,
        task.title,
        task.created_display(),
        sel
    )
}

fn menu(screen: &mut Screen) {
    screen.push(Tone::Plain, "");
    screen.push(Tone::Menu, "[1] ➕ ADD    [2] ✅ COMPLETE  [3] 🗑️ DELETE");
    screen.push(Tone::Menu, "[4] 🔼 PRIO   [5] 📅 DATE      [6] 👁️ VIEW");
    screen.push(Tone::Menu, "[+/-] ↕ SELECT                [0] 💾 EXIT");
    screen.push(Tone::Plain, "-".repeat(RULE_WIDTH));
}
