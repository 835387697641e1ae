//! Structural parsing of the directive file.
//!
//! The raw text goes through the marker pre-scan, then tree-sitter. The
//! resulting [`ParsedModel`] keeps the stripped text together with the spans
//! the writer needs to rewrite the import block and the managed list.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::ops::Range;

use tree_sitter::Node;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::format::DirectiveFormat;
use crate::marker;
use crate::syntax::{self, ImportSpec};

/// Minimal structural model of a directive file.
#[derive(Debug, Clone)]
pub struct ParsedModel {
    source: String,
    imports: Vec<ImportSpec>,
    group_closes: Vec<usize>,
    package_end: usize,
    list_span: Range<usize>,
    entries: Vec<Entry>,
    legacy: HashMap<String, String>,
    disabled: BTreeSet<String>,
    disabled_imports: BTreeSet<usize>,
}

impl ParsedModel {
    /// File text with disable markers stripped. All spans index into it.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn imports(&self) -> &[ImportSpec] {
        &self.imports
    }

    /// Offsets of the `)` closing each grouped import declaration.
    pub fn group_closes(&self) -> &[usize] {
        &self.group_closes
    }

    pub fn package_end(&self) -> usize {
        self.package_end
    }

    /// Span of the managed list literal body, braces included.
    pub fn list_span(&self) -> Range<usize> {
        self.list_span.clone()
    }

    /// Entries in list order, as read from the file.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Verbatim text of a legacy placeholder element.
    pub fn legacy_element(&self, name: &str) -> Option<&str> {
        self.legacy.get(name).map(String::as_str)
    }

    /// Names disabled through the marker comment.
    pub fn disabled(&self) -> &BTreeSet<String> {
        &self.disabled
    }

    /// Whether `import` was written behind the marker comment.
    pub fn is_disabled_import(&self, import: &ImportSpec) -> bool {
        self.disabled_imports.contains(&import.span.start)
    }
}

/// Parse a directive file.
pub fn parse(raw: &str, format: &DirectiveFormat) -> Result<ParsedModel> {
    let stripped = marker::strip_markers(raw, format)?;
    let source = stripped.text;

    let tree = syntax::parse_go(&source)?;
    let root = tree.root_node();

    let package_end = syntax::package_end(root)
        .ok_or_else(|| Error::invalid_format("missing package clause"))?;
    let (imports, group_closes) = syntax::collect_imports(root, &source)?;
    let body = syntax::find_list_literal(root, &source, format.list_name()).ok_or_else(|| {
        Error::invalid_format(format!("list literal `{}` not found", format.list_name()))
    })?;

    let mut entries = Vec::new();
    let mut legacy = HashMap::new();
    let mut seen = HashSet::new();

    for element in syntax::literal_elements(body) {
        let (mut entry, placeholder) = parse_element(element, &source)?;

        if !seen.insert(entry.name.clone()) {
            return Err(Error::invalid_format(format!(
                "directive `{}` is listed twice",
                entry.name
            )));
        }

        if let Some(import) = imports
            .iter()
            .find(|imp| imp.name.as_deref() == Some(entry.name.as_str()))
        {
            entry.builtin = false;
            entry.source = Some(import.path.clone());
        }

        if stripped.disabled.contains(&entry.name) {
            entry.active = false;
        }

        if let Some(text) = placeholder {
            legacy.insert(entry.name.clone(), text);
        }
        entries.push(entry);
    }

    Ok(ParsedModel {
        imports,
        group_closes,
        package_end,
        list_span: body.byte_range(),
        entries,
        legacy,
        disabled: stripped.disabled,
        disabled_imports: stripped.disabled_imports,
        source,
    })
}

/// Re-locate the managed list literal in freshly rendered text.
pub fn locate_list(text: &str, format: &DirectiveFormat) -> Result<Range<usize>> {
    let tree = syntax::parse_go(text)?;
    syntax::find_list_literal(tree.root_node(), text, format.list_name())
        .map(|body| body.byte_range())
        .ok_or_else(|| {
            Error::invalid_format(format!("list literal `{}` not found", format.list_name()))
        })
}

/// Decode one `{name, setup}` element. The second value is the verbatim
/// element text for the legacy placeholder form.
fn parse_element(element: Node<'_>, source: &str) -> Result<(Entry, Option<String>)> {
    let invalid = || Error::ImportInvalidFormat {
        element: syntax::text(element, source).to_string(),
    };

    if element.kind() != "literal_value" {
        return Err(invalid());
    }
    let parts = syntax::literal_elements(element);
    let [name_node, setup_node] = parts.as_slice() else {
        return Err(invalid());
    };
    if !matches!(
        name_node.kind(),
        "interpreted_string_literal" | "raw_string_literal"
    ) {
        return Err(invalid());
    }
    let name = syntax::unquote(syntax::text(*name_node, source)).ok_or_else(invalid)?;
    if name.trim_start_matches('!').is_empty() {
        return Err(invalid());
    }

    match setup_node.kind() {
        // `pkg.Symbol` may come back as a qualified type name in some
        // grammar versions; both spell the same reference.
        "selector_expression" | "qualified_type" => {
            let setup: String = syntax::text(*setup_node, source)
                .split_whitespace()
                .collect();
            Ok((Entry::builtin(name, Some(setup)), None))
        }
        "func_literal" => Ok((
            Entry::builtin(name.trim_start_matches('!'), None),
            Some(syntax::text(element, source).to_string()),
        )),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(raw: &str) -> Result<ParsedModel> {
        parse(raw, &DirectiveFormat::default())
    }

    #[test]
    fn test_rejects_keyed_elements() {
        let raw = "package caddy\n\nvar directiveOrder = []directive{\n\t{name: \"root\", setup: setup.Root},\n}\n";
        let err = parse_default(raw).unwrap_err();
        assert!(matches!(err, Error::ImportInvalidFormat { .. }));
    }

    #[test]
    fn test_rejects_non_literal_setup() {
        let raw = "package caddy\n\nvar directiveOrder = []directive{\n\t{\"root\", rootSetup},\n}\n";
        let err = parse_default(raw).unwrap_err();
        assert!(matches!(err, Error::ImportInvalidFormat { element } if element.contains("rootSetup")));
    }

    #[test]
    fn test_rejects_duplicates() {
        let raw = "package caddy\n\nvar directiveOrder = []directive{\n\t{\"root\", setup.Root},\n\t{\"root\", setup.Root},\n}\n";
        let err = parse_default(raw).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
    }

    #[test]
    fn test_empty_list() {
        let raw = "package caddy\n\nvar directiveOrder = []directive{}\n";
        let model = parse_default(raw).unwrap();
        assert!(model.entries().is_empty());
        assert_eq!(&model.source()[model.list_span()], "{}");
    }

    #[test]
    fn test_locate_list_after_edit() {
        let raw = "package caddy\n\nvar directiveOrder = []directive{\n\t{\"root\", setup.Root},\n}\n";
        let shifted = format!("// header\n{raw}");
        let span = locate_list(&shifted, &DirectiveFormat::default()).unwrap();
        assert!(shifted[span].starts_with("{\n\t{\"root\""));
    }
}
