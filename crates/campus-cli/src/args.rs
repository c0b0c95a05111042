use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::ActivityCommands;

/// Manage university activities from the terminal
///
/// Campus keeps courses, workshops, seminars, research and extension projects
/// in a local SQLite catalog. Activities are created and edited through the
/// same validated form the rest of the application uses; a rejected form is
/// reported field by field and nothing is saved.
#[derive(Parser)]
#[command(version, about, name = "campus")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/campus/campus.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Campus CLI
///
/// Without a command, all activities are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage activities
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
}
