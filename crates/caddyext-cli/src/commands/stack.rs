//! Read-only commands: stack and version.

use colored::Colorize;

use caddyext_directives::Entry;

use crate::context::Context;
use crate::error::Result;

pub fn run_stack(ctx: &Context, json: bool) -> Result<()> {
    let file = ctx.open()?;
    let entries: Vec<Entry> = file
        .registry()
        .list()
        .into_iter()
        .filter(Entry::is_present)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!();
    println!("Available Caddy directives/extensions:");
    println!("   (✓) ENABLED | (-) DISABLED");
    println!();
    for (i, entry) in entries.iter().enumerate() {
        println!("{}", stack_line(i, entry));
    }
    println!();
    Ok(())
}

fn stack_line(index: usize, entry: &Entry) -> String {
    let state = if entry.active {
        "✓".green()
    } else {
        "-".red()
    };
    let mut line = format!("   {index}. ({state}) {}", entry.name);
    if entry.builtin {
        line.push_str(&format!(" {}", "(core)".dimmed()));
    } else if let Some(source) = &entry.source {
        line.push_str(&format!(" {}", source.dimmed()));
    }
    line
}

pub fn run_version() -> Result<()> {
    println!("caddyext v{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use caddyext_directives::{DirectiveFile, DirectiveFormat};
    use caddyext_test_utils::fixtures::DIRECTIVES_GO;

    fn entry(name: &str) -> Entry {
        let file =
            DirectiveFile::from_source("directives.go", DIRECTIVES_GO, DirectiveFormat::default())
                .unwrap();
        file.registry().get(name).unwrap().clone()
    }

    #[test]
    fn test_stack_line_annotations() {
        colored::control::set_override(false);

        assert_eq!(stack_line(0, &entry("root")), "   0. (✓) root (core)");
        assert_eq!(stack_line(5, &entry("pprof")), "   5. (-) pprof (core)");
        assert_eq!(
            stack_line(8, &entry("git")),
            "   8. (-) git github.com/abiosoft/caddy-git"
        );
    }
}
