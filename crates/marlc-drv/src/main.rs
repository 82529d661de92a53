//! marlc - command-line entry point for the Marl front end.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marlc", version, about = "Marl configuration language front end")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize a source file and print the token stream
    Lex {
        /// Path to the source file, or `-` for stdin
        input: PathBuf,

        /// Also print the whitespace and comments attached to each token
        #[arg(long)]
        fodder: bool,
    },
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Lex { input, fodder } => {
            let output = marlc_drv::lex_command(&input, fodder)?;
            print!("{output}");
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
