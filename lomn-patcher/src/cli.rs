//! Root CLI structure for lomn-patcher

use clap::{CommandFactory, Parser, Subcommand};
use std::fmt::Write;

use lomn_patch::catalog;

use crate::commands::apply::ApplyArgs;
use crate::commands::list::ListArgs;

/// Column width of patch names in the help epilog
const HELP_NAME_WIDTH: usize = 21;

#[derive(Parser)]
#[command(name = "lomn-patcher")]
#[command(about = "TLOMN Build Alpha 0.006 Patcher", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply patches to an executable in place
    Apply(ApplyArgs),

    /// List available patches
    List(ListArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Help text listing every catalog patch
pub fn patches_help() -> String {
    let mut help = String::from("patches:\n");
    for patch in catalog() {
        let _ = writeln!(
            help,
            "  {:<width$} {}",
            patch.name,
            patch.description,
            width = HELP_NAME_WIDTH
        );
    }
    help
}

/// The full command, including the patch listing in its help
pub fn command() -> clap::Command {
    Cli::command().after_help(patches_help())
}
