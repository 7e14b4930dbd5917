use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the Whim rules generator.
///
/// The pipeline itself takes no tunables — the source URL, cache path, and
/// output path are compile-time constants (see
/// [`crate::commands::generate`]).  The CLI surface exists only to pick a
/// subcommand and control log verbosity.
#[derive(Parser, Debug)]
#[command(
    name = "whim-rules",
    about = "Generate Whim's default window filter rules from the komorebi application database",
    version
)]
pub struct Cli {
    /// Subcommand to run; defaults to `generate` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch the komorebi rules and regenerate DefaultFilteredWindows.cs
    Generate,
    /// Print version information
    Version,
}
