//! See <https://github.com/matklad/cargo-xtask/>
//!
//! Auxiliary project commands that are not expressible with just `cargo`. Invoke with
//! `cargo run -p xtask -- <command>`.

mod cli;
mod scripts;
mod utils;

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::App::parse();

    match &cli.command {
        Some(command) => match command {
            cli::Commands::Build(args) => scripts::build(args),
            cli::Commands::Test(args) => scripts::test(args),
            cli::Commands::Install(args) => scripts::install(args),
            cli::Commands::Github(args) => scripts::github(args),
        },
        None => {
            println!("No command specified.");
            std::process::exit(1);
        }
    }
}
