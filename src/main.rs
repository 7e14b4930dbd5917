use anyhow::Result;
use clap::Parser;

use whim_rules_gen::cli::{Cli, Command};
use whim_rules_gen::commands;
use whim_rules_gen::logging::{self, Logger};

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = Logger::new();

    match args.command.unwrap_or(Command::Generate) {
        Command::Generate => commands::generate::run(&log),
        Command::Version => {
            let version = option_env!("WHIM_RULES_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("whim-rules {version}");
            Ok(())
        }
    }
}
