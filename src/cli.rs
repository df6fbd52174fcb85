use clap::Parser;

use crate::cmd::Commands;
use crate::fields::ViewFilter;

/// Menu-driven terminal task manager.
/// Tasks live in memory only; exiting prints them as JSON.
#[derive(Parser)]
#[command(name = "tasks", version, about = "Interactive in-memory task manager")]
pub struct Cli {
    /// Disable colours and screen clearing.
    #[arg(long, global = true)]
    pub plain: bool,

    /// Skip the "Press Enter to start" prompt.
    #[arg(long, global = true)]
    pub no_intro: bool,

    /// Do not wait for Enter after each command.
    #[arg(long, global = true)]
    pub no_pause: bool,

    /// Starting view: all | pending | done.
    #[arg(long, value_enum, default_value_t = ViewFilter::All, global = true)]
    pub view: ViewFilter,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
