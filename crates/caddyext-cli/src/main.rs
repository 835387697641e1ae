//! caddyext CLI
//!
//! Manages the directives and extensions compiled into a Caddy source tree.

mod cli;
mod commands;
mod context;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use caddyext_extensions::ExtensionResolver;
use cli::{Cli, Commands};
use commands::InstallOptions;
use context::Context;
use error::{CliError, Result};

fn main() {
    let mut cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    let Some(command) = cli.command.take() else {
        println!("{} Caddy's directive/extension manager", "caddyext".green().bold());
        println!();
        println!("Run {} for available commands.", "caddyext --help".cyan());
        return;
    };

    let name = command.name();
    if let Err(e) = execute_command(command, &cli) {
        report(name, &e);
        std::process::exit(1);
    }
}

fn report(command: &str, err: &CliError) {
    if let CliError::HostNotFound { .. } = err {
        eprintln!("{err}");
        eprintln!("Set CADDYPATH in your environment to a valid Caddy source.");
        return;
    }

    let mut cli = Cli::command();
    cli.build();
    if let Some(sub) = cli.find_subcommand_mut(command) {
        eprintln!("{}", sub.render_usage());
    }
    eprintln!("`{}` {} {}", command, "error:".red().bold(), err);
}

fn execute_command(cmd: Commands, cli: &Cli) -> Result<()> {
    if cmd == Commands::Version {
        return commands::run_version();
    }

    let ctx = Context::load(cli.config.as_deref(), cli.project.as_deref())?;

    match cmd {
        Commands::Install {
            extensions,
            update,
            after,
            before,
            offline,
            dry_run,
        } => {
            let options = InstallOptions {
                update,
                after,
                before,
                offline,
                dry_run,
            };
            let resolver = ctx.resolver();
            commands::run_install(
                &ctx,
                &extensions,
                &options,
                resolver.as_ref().map(|r| r as &dyn ExtensionResolver),
                &ctx.fetcher(),
            )
        }
        Commands::Remove { name, dry_run } => commands::run_remove(&ctx, name.as_deref(), dry_run),
        Commands::Enable { name, dry_run } => commands::run_enable(&ctx, name.as_deref(), dry_run),
        Commands::Disable { name, dry_run } => {
            commands::run_disable(&ctx, name.as_deref(), dry_run)
        }
        Commands::Move {
            name,
            index,
            dry_run,
        } => commands::run_move(&ctx, name.as_deref(), index, dry_run),
        Commands::Stack { json } => commands::run_stack(&ctx, json),
        Commands::Reset { dry_run } => commands::run_reset(&ctx, dry_run),
        Commands::Version => commands::run_version(),
    }
}
