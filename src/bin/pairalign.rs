//! Command-line interface for the `pairalign` crate.
//!
//! Subcommands are implemented in separate files (modules) under
//! `src/bin/pairalign/`:
//! - `global_cmd.rs`
//! - `local_cmd.rs`
//!
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name="pairalign", version=env!("CARGO_PKG_VERSION"), about="Pairwise global and local sequence alignment", disable_help_subcommand=true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Needleman–Wunsch global alignment with a linear gap penalty.
    Global(global_cmd::GlobalCmd),
    /// Smith–Waterman local alignment with affine gap penalties.
    Local(local_cmd::LocalCmd),
}

#[path = "pairalign/global_cmd.rs"]
mod global_cmd;
#[path = "pairalign/local_cmd.rs"]
mod local_cmd;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Global(cmd) => global_cmd::run(cmd),
        Command::Local(cmd) => local_cmd::run(cmd),
    }
}
