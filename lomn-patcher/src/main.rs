//! Main entry point for the lomn-patcher CLI

use anyhow::Result;
use clap::FromArgMatches;
use clap_complete::{Generator, generate};
use std::io;

use lomn_patcher::cli::{Cli, Commands, command};
use lomn_patcher::commands;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::from_arg_matches(&command().get_matches())?;

    // Initialize logger, RUST_LOG takes precedence over the flags
    let level = if cli.verbose > 0 {
        match cli.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    } else if cli.quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();

    // Execute command
    match cli.command {
        Commands::Apply(args) => commands::apply::execute(args),
        Commands::List(args) => commands::list::execute(&args),
        Commands::Completions { shell } => {
            print_completions(shell, &mut command());
            Ok(())
        }
    }
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}
