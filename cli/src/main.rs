mod build_runner;
mod cli;
mod commands;
mod config;
mod error;
mod ledger;
mod project;
mod toolchain;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(err) = run() {
        ui::error(err.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy(args) => commands::deploy::run(args),
        Commands::Call(args) => commands::call::run(args),
        Commands::Schema(args) => commands::schema::run(args),
        Commands::Build(args) => commands::build::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Clean(args) => commands::clean::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    }
}
