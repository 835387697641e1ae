//! Disable-marker pre-scan.
//!
//! A disabled declaration is a valid declaration with the marker comment in
//! front of it. Before parsing, markers that precede a list element or an
//! import spec are removed so the declaration parses normally. The names of
//! disabled list elements and the offsets of disabled import specs are
//! recorded so the parser and the writer can restore that state.

use std::collections::BTreeSet;

use regex::Regex;

use crate::error::Result;
use crate::format::DirectiveFormat;

/// Source with markers removed, plus what they disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedSource {
    pub text: String,
    /// Names of disabled list elements (a leading `!` removed).
    pub disabled: BTreeSet<String>,
    /// Offsets in `text` where a disabled import spec starts.
    pub disabled_imports: BTreeSet<usize>,
}

/// Strip markers in front of list elements and import specs.
///
/// A marker only counts at the start of a line, followed by whitespace and
/// then either `{"name"` or `alias "path"`. Any other comment that happens to
/// start with the marker text is left alone.
pub fn strip_markers(raw: &str, format: &DirectiveFormat) -> Result<StrippedSource> {
    let marker = regex::escape(format.marker());
    let token = Regex::new(&format!(
        r#"(?m)^([ \t]*){marker}[ \t]+(?:(?P<element>\{{[ \t]*"!?(?P<name>[^"\\]*)")|(?P<import>[\p{{L}}_][\p{{L}}\p{{N}}_]*[ \t]+"))"#
    ))?;

    let mut text = String::with_capacity(raw.len());
    let mut disabled = BTreeSet::new();
    let mut disabled_imports = BTreeSet::new();
    let mut copied = 0;

    for caps in token.captures_iter(raw) {
        let (Some(indent), Some(body)) = (
            caps.get(1),
            caps.name("element").or_else(|| caps.name("import")),
        ) else {
            continue;
        };

        text.push_str(&raw[copied..indent.end()]);
        match caps.name("name") {
            Some(name) if !name.as_str().is_empty() => {
                disabled.insert(name.as_str().to_string());
            }
            Some(_) => {}
            None => {
                disabled_imports.insert(text.len());
            }
        }
        copied = body.start();
    }
    text.push_str(&raw[copied..]);

    Ok(StrippedSource {
        text,
        disabled,
        disabled_imports,
    })
}
