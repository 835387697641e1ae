//! Single-directive commands: remove, enable, disable, move, reset.

use colored::Colorize;

use caddyext_directives::DirectiveFile;

use crate::commands::commit;
use crate::context::Context;
use crate::error::{CliError, Result};

// A builtin kept in the placeholder form has no setup reference to write
// back, so it stays disabled in the file whatever the registry says.
fn warn_stays_disabled(file: &DirectiveFile, name: &str) {
    eprintln!(
        "{} `{}` has no setup function in {}; it stays disabled.",
        "warning:".yellow().bold(),
        name,
        file.path().display()
    );
}

fn required(name: Option<&str>) -> Result<&str> {
    name.filter(|n| !n.is_empty())
        .ok_or(CliError::MissingArguments)
}

pub fn run_remove(ctx: &Context, name: Option<&str>, dry_run: bool) -> Result<()> {
    let name = required(name)?;
    let mut file = ctx.open()?;
    file.registry_mut().remove(name)?;

    if commit(&file, dry_run)? {
        println!("{} `{}` removed from Caddy.", "OK".green().bold(), name.cyan());
    }
    Ok(())
}

pub fn run_enable(ctx: &Context, name: Option<&str>, dry_run: bool) -> Result<()> {
    let name = required(name)?;
    let mut file = ctx.open()?;
    file.registry_mut().enable(name)?;

    let stuck = file
        .registry()
        .get(name)
        .is_some_and(|entry| !entry.has_setup());
    if stuck {
        warn_stays_disabled(&file, name);
    }

    if commit(&file, dry_run)? && !stuck {
        println!("{} `{}` enabled.", "OK".green().bold(), name.cyan());
    }
    Ok(())
}

pub fn run_disable(ctx: &Context, name: Option<&str>, dry_run: bool) -> Result<()> {
    let name = required(name)?;
    let mut file = ctx.open()?;
    file.registry_mut().disable(name)?;

    if commit(&file, dry_run)? {
        println!("{} `{}` disabled.", "OK".green().bold(), name.cyan());
    }
    Ok(())
}

pub fn run_move(
    ctx: &Context,
    name: Option<&str>,
    index: Option<i64>,
    dry_run: bool,
) -> Result<()> {
    let name = required(name)?;
    let index = index.ok_or(CliError::MissingArguments)?;
    let index = usize::try_from(index).map_err(|_| {
        CliError::user(format!("Invalid index {index}: stack indices start at 0"))
    })?;
    let mut file = ctx.open()?;
    file.registry_mut().move_to(name, index)?;

    if commit(&file, dry_run)? {
        println!("{} `{}` moved to {}.", "OK".green().bold(), name.cyan(), index);
    }
    Ok(())
}

pub fn run_reset(ctx: &Context, dry_run: bool) -> Result<()> {
    let mut file = ctx.open()?;
    file.registry_mut().reset();

    for entry in file.registry().entries() {
        if !entry.has_setup() {
            warn_stays_disabled(&file, &entry.name);
        }
    }

    if commit(&file, dry_run)? {
        println!("{} Caddy's directives reset.", "OK".green().bold());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_missing_and_empty() {
        assert!(matches!(required(None), Err(CliError::MissingArguments)));
        assert!(matches!(required(Some("")), Err(CliError::MissingArguments)));
        assert_eq!(required(Some("git")).unwrap(), "git");
    }
}
