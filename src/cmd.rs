//! Command implementations for the CLI interface.

use std::io;

use clap::Subcommand;
use clap_complete::{generate, Shell};
use tracing::info;

use crate::cli::Cli;
use crate::console::{
    app::{App, Settings},
    input::Prompter,
};
use crate::storage::ConsoleStorage;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive task menu (default).
    Run,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Settings {
            intro: !cli.no_intro,
            pause: !cli.no_pause,
            initial_view: cli.view,
        }
    }
}

/// Run the interactive menu on stdin/stdout.
pub fn cmd_run(cli: &Cli) {
    let settings = Settings::from(cli);
    let mut app = match App::new(ConsoleStorage::new(io::stdout()), settings) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to load tasks: {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut console = Prompter::new(stdin.lock(), io::stdout(), cli.plain);
    if let Err(e) = app.run(&mut console) {
        eprintln!("Console error: {e}");
        std::process::exit(1);
    }
    info!(remaining = app.store().len(), "session finished");
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut io::stdout());
}
