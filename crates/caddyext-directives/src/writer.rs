//! Regeneration of the directive file.
//!
//! Imports belonging to third-party entries are dropped and re-inserted as
//! placeholders, the intermediate text is re-parsed to find the managed list
//! again, then placeholders and the list body are rendered from the registry.
//! Bytes outside the import declarations and the list literal are copied
//! through unchanged.

use std::collections::HashSet;
use std::ops::Range;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::format::{DirectiveFormat, SETUP_SYMBOL};
use crate::parser::{self, ParsedModel};
use crate::registry::DirectiveRegistry;
use crate::syntax;

/// Render the complete file for `registry` over the original `model`.
pub fn render(
    registry: &DirectiveRegistry,
    model: &ParsedModel,
    format: &DirectiveFormat,
) -> Result<String> {
    let intermediate = rewrite_imports(registry, model, format);
    let span = parser::locate_list(&intermediate, format)?;

    let begin = fill_placeholders(&intermediate[..span.start], registry, format);
    let list = render_list(registry, model, format)?;
    let end = &intermediate[span.end..];

    Ok(format!("{begin}{list}{end}"))
}

fn placeholder(name: &str) -> String {
    format!("{{{{import-{name}}}}}")
}

fn imported(registry: &DirectiveRegistry) -> impl Iterator<Item = &Entry> {
    registry
        .entries()
        .iter()
        .filter(|e| e.is_present() && !e.builtin && e.source.is_some())
}

/// Drop imports of tracked entries and insert one placeholder import per
/// present third-party entry. Untracked imports that were disabled get their
/// marker back.
fn rewrite_imports(
    registry: &DirectiveRegistry,
    model: &ParsedModel,
    format: &DirectiveFormat,
) -> String {
    let source = model.source();
    let tracked: HashSet<&str> = registry
        .entries()
        .iter()
        .filter(|e| !e.builtin)
        .map(|e| e.name.as_str())
        .collect();

    let mut edits: Vec<(Range<usize>, String)> = Vec::new();
    for imp in model.imports() {
        if imp.name.as_deref().is_some_and(|n| tracked.contains(n)) {
            let span = if imp.grouped {
                line_extent(source, imp.span.clone())
            } else {
                swallow_blank_line(source, line_extent(source, imp.declaration.clone()))
            };
            edits.push((span, String::new()));
        } else if model.is_disabled_import(imp) {
            let at = imp.span.start;
            edits.push((at..at, format.marker_prefix()));
        }
    }

    let lines: String = imported(registry)
        .map(|e| format!("\t{}\n", syntax::quote(&placeholder(&e.name))))
        .collect();

    if !lines.is_empty() {
        match model.group_closes().first() {
            Some(&close) => {
                let start = line_start(source, close);
                if source[start..close].trim().is_empty() {
                    edits.push((start..start, lines));
                } else {
                    edits.push((close..close, format!("\n{lines}")));
                }
            }
            None => {
                let at = model.package_end();
                edits.push((at..at, format!("\n\nimport (\n{lines})")));
            }
        }
    }

    apply_edits(source, edits)
}

fn line_start(source: &str, offset: usize) -> usize {
    source[..offset].rfind('\n').map_or(0, |i| i + 1)
}

/// Widen `span` to whole lines when nothing else shares them.
fn line_extent(source: &str, span: Range<usize>) -> Range<usize> {
    let start = line_start(source, span.start);
    let end = source[span.end..]
        .find('\n')
        .map_or(source.len(), |i| span.end + i + 1);

    let alone =
        source[start..span.start].trim().is_empty() && source[span.end..end].trim().is_empty();
    if alone { start..end } else { span }
}

/// Extend a whole-line deletion over one following blank line when the
/// deleted lines already sit after a blank line.
fn swallow_blank_line(source: &str, span: Range<usize>) -> Range<usize> {
    let whole_lines = span.start == line_start(source, span.start)
        && source[..span.end].ends_with('\n');
    let after_blank = span.start == 0 || source[..span.start].ends_with("\n\n");
    if whole_lines && after_blank && source[span.end..].starts_with('\n') {
        span.start..span.end + 1
    } else {
        span
    }
}

fn apply_edits(source: &str, mut edits: Vec<(Range<usize>, String)>) -> String {
    edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));
    let mut out = source.to_string();
    for (range, text) in edits {
        out.replace_range(range, &text);
    }
    out
}

fn fill_placeholders(
    text: &str,
    registry: &DirectiveRegistry,
    format: &DirectiveFormat,
) -> String {
    let mut out = text.to_string();
    for entry in imported(registry) {
        let Some(source) = entry.source.as_deref() else {
            continue;
        };
        out = out.replace(
            &syntax::quote(&placeholder(&entry.name)),
            &format!(
                "{}{} {}",
                marker_for(entry, format),
                entry.name,
                syntax::quote(source)
            ),
        );
    }
    out
}

fn render_list(
    registry: &DirectiveRegistry,
    model: &ParsedModel,
    format: &DirectiveFormat,
) -> Result<String> {
    let mut out = String::from("{\n");

    for entry in registry.entries().iter().filter(|e| e.is_present()) {
        let name = syntax::quote(&entry.name);
        let (marker, element) = match (entry.builtin, entry.setup.as_deref()) {
            (false, _) => (
                marker_for(entry, format),
                format!("{{{name}, {}.{SETUP_SYMBOL}}}", entry.name),
            ),
            (true, Some(setup)) => (marker_for(entry, format), format!("{{{name}, {setup}}}")),
            // Legacy placeholder elements are inactive by construction and may
            // span lines, so they are written back verbatim without a marker.
            (true, None) => {
                let element = model.legacy_element(&entry.name).ok_or_else(|| {
                    Error::invalid_format(format!(
                        "directive `{}` has no setup function",
                        entry.name
                    ))
                })?;
                (String::new(), element.to_string())
            }
        };
        out.push_str(&format!("\t{marker}{element},\n"));
    }

    out.push('}');
    Ok(out)
}

fn marker_for(entry: &Entry, format: &DirectiveFormat) -> String {
    if entry.active {
        String::new()
    } else {
        format.marker_prefix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholder_token() {
        assert_eq!(placeholder("git"), "{{import-git}}");
    }

    #[test]
    fn test_line_extent_whole_line() {
        let src = "import (\n\tgit \"x\"\n)\n";
        let start = src.find("git").unwrap();
        let span = start..start + "git \"x\"".len();
        assert_eq!(&src[line_extent(src, span)], "\tgit \"x\"\n");
    }

    #[test]
    fn test_line_extent_shared_line() {
        let src = "import (git \"x\")\n";
        let start = src.find("git").unwrap();
        let span = start..start + "git \"x\"".len();
        assert_eq!(line_extent(src, span.clone()), span);
    }

    #[test]
    fn test_swallow_blank_line_between_blocks() {
        let src = "a\n\nimport x \"x\"\n\nvar y\n";
        let start = src.find("import").unwrap();
        let span = line_extent(src, start..start + "import x \"x\"".len());
        assert_eq!(&src[swallow_blank_line(src, span)], "import x \"x\"\n\n");
    }

    #[test]
    fn test_swallow_blank_line_keeps_separator_when_not_doubled() {
        let src = "a\nimport x \"x\"\n\nvar y\n";
        let start = src.find("import").unwrap();
        let span = line_extent(src, start..start + "import x \"x\"".len());
        assert_eq!(&src[swallow_blank_line(src, span)], "import x \"x\"\n");
    }

    #[test]
    fn test_apply_edits_back_to_front() {
        let out = apply_edits(
            "abcdef",
            vec![(1..2, String::new()), (4..4, "X".to_string())],
        );
        assert_eq!(out, "acdXef");
    }
}
