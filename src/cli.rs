//! CLI argument parsing for the spec writer.
//!
//! The CLI only loads a record, renders it, and writes the result; all
//! formatting rules live in the library.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "specw",
    version,
    about = "Render RPM spec files from JSON package records",
    after_help = "Examples:\n  specw render --record foo.json --out SPECS/foo.spec\n  cat foo.json | specw render --record -\n  specw check --record foo.json --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Render(RenderArgs),
    Check(CheckArgs),
}

/// Render command inputs.
#[derive(Parser, Debug)]
#[command(about = "Render a package record to a spec file")]
pub struct RenderArgs {
    /// Package record JSON (`-` reads stdin)
    #[arg(long, value_name = "PATH")]
    pub record: PathBuf,

    /// Output spec path; stdout when omitted
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

/// Check command inputs; renders without writing.
#[derive(Parser, Debug)]
#[command(about = "Load and render a package record, then summarize the result")]
pub struct CheckArgs {
    /// Package record JSON (`-` reads stdin)
    #[arg(long, value_name = "PATH")]
    pub record: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

impl Command {
    pub fn verbose(&self) -> bool {
        match self {
            Command::Render(args) => args.verbose,
            Command::Check(args) => args.verbose,
        }
    }
}
