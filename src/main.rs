use clap::Parser;
use miette::Result;
use tricount::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count(args) => tricount::cli::count::run(args)?,
        Commands::Check(args) => tricount::cli::check::run(args)?,
        Commands::Completions(args) => tricount::cli::completions::run(args)?,
    }

    Ok(())
}
