//! CLI argument parsing using clap derive
//!
//! Positional arguments are optional at the clap level so a missing one is
//! reported through the command's own error path.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Caddy's directive/extension manager
#[derive(Parser, Debug)]
#[command(name = "caddyext")]
#[command(author, version, about = "Caddy's directive/extension manager", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "CADDYEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Host project import path, or an absolute path to its source
    #[arg(long, global = true, env = "CADDYPATH")]
    pub project: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Install and enable extension(s)
    ///
    /// Examples:
    ///   caddyext install git search:github.com/pedronasser/caddy-search
    ///   caddyext install cors --after log
    Install {
        /// Extensions as name or name:repository
        #[arg(value_name = "NAME[:REPOSITORY]")]
        extensions: Vec<String>,

        /// Update the extension source
        #[arg(short = 'u', long)]
        update: bool,

        /// Directive that new extensions are installed after
        #[arg(short, long, value_name = "DIRECTIVE", conflicts_with = "before")]
        after: Option<String>,

        /// Directive that new extensions are installed before
        #[arg(short, long, value_name = "DIRECTIVE")]
        before: Option<String>,

        /// Skip fetching sources; they must already be on GOPATH
        #[arg(long)]
        offline: bool,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove an extension
    Remove {
        name: Option<String>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Enable a directive/extension
    Enable {
        name: Option<String>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Disable a directive/extension
    Disable {
        name: Option<String>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Move a directive to an index of Caddy's stack
    Move {
        name: Option<String>,

        #[arg(value_name = "STACK_INDEX", allow_negative_numbers = true)]
        index: Option<i64>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the stack of directives/extensions
    Stack {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Enable every directive and drop pending removals
    Reset {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Show caddyext's version
    Version,
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Install { .. } => "install",
            Commands::Remove { .. } => "remove",
            Commands::Enable { .. } => "enable",
            Commands::Disable { .. } => "disable",
            Commands::Move { .. } => "move",
            Commands::Stack { .. } => "stack",
            Commands::Reset { .. } => "reset",
            Commands::Version => "version",
        }
    }
}
