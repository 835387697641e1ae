//! Command implementations for caddyext-cli

pub mod install;
pub mod manage;
pub mod stack;

pub use install::{InstallOptions, run_install};
pub use manage::{run_disable, run_enable, run_move, run_remove, run_reset};
pub use stack::{run_stack, run_version};

use colored::Colorize;

use caddyext_directives::DirectiveFile;

use crate::error::Result;

/// Save the file, or print the pending diff instead when `dry_run` is set.
///
/// Returns whether the file was written.
pub(crate) fn commit(file: &DirectiveFile, dry_run: bool) -> Result<bool> {
    if dry_run {
        let diff = file.diff()?;
        if diff.is_empty() {
            println!("{} No changes.", "OK".green().bold());
        } else {
            print!("{diff}");
        }
        return Ok(false);
    }

    file.save()?;
    Ok(true)
}
