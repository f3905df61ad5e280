//! api-starter CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{GenerateCommand, StubsArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "api-starter")]
#[command(version)]
#[command(about = "Generate Laravel REST API boilerplate from a model name", long_about = None)]
struct Cli {
    /// Configuration file layered over user and project config
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model, migration, controller, request, resource, service and seeder
    Generate(GenerateCommand),
    /// Manage the stubs used for generation
    Stubs(StubsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    api_starter::observability::init(cli.verbose)?;

    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Generate(command) => command.execute(config)?,
        Commands::Stubs(args) => args.execute(config)?,
    }

    Ok(())
}
