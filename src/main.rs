mod checkpoint;
mod cli;
mod error;
mod harvest;
mod navigate;
mod query;
mod reading;
mod store;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Harvest(args) => match command::harvest(args).await {
            Ok(message) => println!("{}", message),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
        Commands::Query(args) => {
            if let Err(e) = command::query(args) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
