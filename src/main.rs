mod cli;
mod commands;
mod error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Export(args) => commands::emit(&commands::export(&args)?, args.scene.out.as_deref()),
        Command::Css(args) => commands::emit(&commands::css(&args)?, args.out.as_deref()),
        Command::ImportFigma(args) => commands::emit(&commands::import_figma(&args)?, args.out.as_deref()),
        Command::ImportShapes(args) => commands::emit(&commands::import_shapes(&args)?, args.out.as_deref()),
        Command::Targets => commands::emit(commands::targets().trim_end(), None),
    }
}
