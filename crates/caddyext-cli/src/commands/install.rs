//! The install command: resolve, fetch, add and position extensions.

use colored::Colorize;

use caddyext_directives::Placement;
use caddyext_extensions::{ExtensionResolver, SourceFetcher};

use crate::commands::commit;
use crate::context::Context;
use crate::error::{CliError, Result};

#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub update: bool,
    pub after: Option<String>,
    pub before: Option<String>,
    pub offline: bool,
    pub dry_run: bool,
}

impl InstallOptions {
    fn placement(&self) -> Option<Placement> {
        match (&self.before, &self.after) {
            (Some(before), _) => Some(Placement::Before(before.clone())),
            (None, Some(after)) => Some(Placement::After(after.clone())),
            (None, None) => None,
        }
    }
}

/// Split `name[:repository]`.
fn split_spec(spec: &str) -> (&str, Option<&str>) {
    match spec.split_once(':') {
        Some((name, repo)) if !repo.is_empty() => (name, Some(repo)),
        Some((name, _)) => (name, None),
        None => (spec, None),
    }
}

fn resolve(resolver: Option<&dyn ExtensionResolver>, name: &str) -> Result<String> {
    println!(
        "{} trying to resolve `{}` from the extension registry",
        "=>".blue().bold(),
        name.cyan()
    );
    let Some(resolver) = resolver else {
        tracing::debug!("no registry feed configured");
        return Err(CliError::ExtensionResolve(name.to_string()));
    };

    match resolver.resolve(name) {
        Ok(Some(source)) => Ok(source),
        Ok(None) => Err(CliError::ExtensionResolve(name.to_string())),
        Err(e) => {
            tracing::warn!(name, error = %e, "registry lookup failed");
            Err(CliError::ExtensionResolve(name.to_string()))
        }
    }
}

/// Install every extension in `specs`, then save once.
pub fn run_install(
    ctx: &Context,
    specs: &[String],
    options: &InstallOptions,
    resolver: Option<&dyn ExtensionResolver>,
    fetcher: &dyn SourceFetcher,
) -> Result<()> {
    if specs.is_empty() {
        return Err(CliError::MissingArguments);
    }

    let mut file = ctx.open()?;
    let snapshot = file.registry().list();
    let placement = options.placement();

    for spec in specs {
        let (name, repository) = split_spec(spec);
        let source = match repository {
            Some(repo) => repo.to_string(),
            None => resolve(resolver, name)?,
        };

        if !options.offline {
            if let Err(e) = fetcher.fetch(&source, options.update) {
                eprintln!("{} {}", "warning:".yellow().bold(), e);
            }
        }

        if ctx.gopath().find_package(&source).is_none() {
            return Err(CliError::SourceNotFound(source));
        }

        let registry = file.registry_mut();
        registry.add(name, &source)?;
        if let Some(placement) = &placement {
            let index = placement.resolve(&snapshot)?;
            registry.move_to(name, index)?;
        }

        println!("{} `{}` added to Caddy.", "OK".green().bold(), name.cyan());
    }

    commit(&file, options.dry_run)?;
    Ok(())
}
