//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use whub::domain::config::ExclusivityMode;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "whub")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Print-position catalog for Warehouse Hub products")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to an optional `server.*` in the working directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// List product types in registry order
    Types {},
    /// Show a product type and its constraints
    Show {
        /// Product type id (e.g. 't-shirt')
        id: String,
    },
    /// List the allowed positions of a product type
    Positions { id: String },
    /// Show the constraint summary of a product type
    Info { id: String },
    /// Check whether a single position is allowed
    Allowed { id: String, position: String },
    /// Keep only the positions allowed for a product type
    Filter {
        id: String,
        /// Candidate positions, in order
        positions: Vec<String>,
    },
    /// Validate a selection of positions
    Validate {
        id: String,
        /// Selected positions
        positions: Vec<String>,

        /// Exclusivity rule: 'standalone' or 'mutual' (defaults to the configured rule)
        #[arg(short, long)]
        exclusivity: Option<ExclusivityMode>,
    },
}
