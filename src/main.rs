//! # tasks - interactive terminal task manager
//!
//! A small menu-driven to-do list for the terminal. Tasks are kept in memory
//! for the length of one session; on exit the full list is printed as JSON so
//! it can be copied somewhere safe.
//!
//! ## Key Features
//!
//! - **Priorities**: every task has a priority from 1 to 5, shown as a red,
//!   yellow or green marker
//! - **Views**: cycle between all, pending and completed tasks
//! - **Sorting**: reorder the list by priority (highest first) or by creation date
//! - **Selection**: step through the visible tasks with `+` / `-` and toggle or
//!   delete the selected one
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the menu
//! tasks
//!
//! # Start in the pending view, without colours
//! tasks --plain --view pending
//!
//! # Generate bash completions
//! tasks completions bash > /etc/bash_completion.d/tasks
//! ```
//!
//! ## Menu
//!
//! - `1` add a task (title of at least 3 characters, optional priority)
//! - `2` toggle the selected task between pending and done
//! - `3` delete the selected task (asks for confirmation)
//! - `4` / `5` sort by priority / date
//! - `6` cycle the view filter
//! - `0` print the task list and exit
//!
//! Set `TASKS_LOG=debug` to see diagnostic logging on stderr.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod storage;
pub mod store;
pub mod task;
pub mod console {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod view;
}

use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    // Logging goes to stderr so it never mixes with the menu on stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("TASKS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!cli.plain),
        )
        .init();

    match &cli.command {
        Some(Commands::Completions { shell }) => cmd_completions(*shell),
        Some(Commands::Run) | None => cmd_run(&cli),
    }
}
