//! Top-level subcommand orchestration.
pub mod generate;
