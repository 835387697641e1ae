//! Go syntax helpers over tree-sitter.
//!
//! Only the handful of constructs the directive file relies on are exposed:
//! package clause, import declarations, package-level `var`/`const` specs
//! holding a composite literal, and the elements of such a literal.

use std::ops::Range;

use tree_sitter::{Node, Parser, Tree};

use crate::error::{Error, Result};

/// Parse Go source, rejecting any tree that contains syntax errors.
pub fn parse_go(text: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| Error::invalid_format(format!("Go grammar unavailable: {e}")))?;

    let tree = parser
        .parse(text, None)
        .ok_or_else(|| Error::invalid_format("source could not be parsed"))?;

    if let Some(bad) = first_error(tree.root_node()) {
        let at = bad.start_position();
        return Err(Error::invalid_format(format!(
            "syntax error at line {}, column {}",
            at.row + 1,
            at.column + 1
        )));
    }

    Ok(tree)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// Source text covered by `node`.
pub fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}

/// Named children of `node`, comments excluded.
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

/// Top-level declarations of kind `kind`.
pub fn top_level<'t>(root: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    named_children(root)
        .into_iter()
        .filter(|child| child.kind() == kind)
        .collect()
}

/// End of the `package` clause.
pub fn package_end(root: Node<'_>) -> Option<usize> {
    top_level(root, "package_clause")
        .first()
        .map(|clause| clause.end_byte())
}

/// Find the `{...}` body of the composite literal assigned to the
/// package-level variable (or constant) `name`.
pub fn find_list_literal<'t>(root: Node<'t>, source: &str, name: &str) -> Option<Node<'t>> {
    let mut specs = Vec::new();
    for decl in named_children(root) {
        if matches!(decl.kind(), "var_declaration" | "const_declaration") {
            collect_specs(decl, &mut specs);
        }
    }

    specs.into_iter().find_map(|spec| {
        let spec_name = spec.child_by_field_name("name")?;
        if text(spec_name, source) != name {
            return None;
        }
        let value = spec.child_by_field_name("value")?;
        let literal = named_children(value).into_iter().next()?;
        if literal.kind() != "composite_literal" {
            return None;
        }
        literal.child_by_field_name("body")
    })
}

fn collect_specs<'t>(node: Node<'t>, specs: &mut Vec<Node<'t>>) {
    for child in named_children(node) {
        match child.kind() {
            "var_spec" | "const_spec" => specs.push(child),
            "var_spec_list" | "const_spec_list" => collect_specs(child, specs),
            _ => {}
        }
    }
}

/// Elements of a `literal_value`, unwrapped from their element wrappers.
pub fn literal_elements(literal: Node<'_>) -> Vec<Node<'_>> {
    named_children(literal)
        .into_iter()
        .map(|child| match child.kind() {
            "literal_element" | "element" => {
                named_children(child).into_iter().next().unwrap_or(child)
            }
            _ => child,
        })
        .collect()
}

/// An `import` spec as found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Local name (alias), when one is written.
    pub name: Option<String>,
    /// Unquoted import path.
    pub path: String,
    /// Byte span of the spec itself.
    pub span: Range<usize>,
    /// Byte span of the enclosing `import` declaration.
    pub declaration: Range<usize>,
    /// Whether the spec sits inside a parenthesized group.
    pub grouped: bool,
}

/// Import specs and the offsets of the `)` closing each import group.
pub fn collect_imports(root: Node<'_>, source: &str) -> Result<(Vec<ImportSpec>, Vec<usize>)> {
    let mut specs = Vec::new();
    let mut group_closes = Vec::new();

    for decl in top_level(root, "import_declaration") {
        for child in named_children(decl) {
            match child.kind() {
                "import_spec" => specs.push(import_spec(child, decl, false, source)?),
                "import_spec_list" => {
                    for spec in named_children(child) {
                        if spec.kind() == "import_spec" {
                            specs.push(import_spec(spec, decl, true, source)?);
                        }
                    }
                    let mut cursor = child.walk();
                    if let Some(close) = child.children(&mut cursor).filter(|c| c.kind() == ")").last() {
                        group_closes.push(close.start_byte());
                    }
                }
                _ => {}
            }
        }
    }

    Ok((specs, group_closes))
}

fn import_spec(spec: Node<'_>, decl: Node<'_>, grouped: bool, source: &str) -> Result<ImportSpec> {
    let path_node = spec
        .child_by_field_name("path")
        .ok_or_else(|| Error::invalid_format(format!("import without path: {}", text(spec, source))))?;
    let path = unquote(text(path_node, source))
        .ok_or_else(|| Error::invalid_format(format!("malformed import path: {}", text(path_node, source))))?;

    Ok(ImportSpec {
        name: spec
            .child_by_field_name("name")
            .map(|n| text(n, source).to_string()),
        path,
        span: spec.byte_range(),
        declaration: decl.byte_range(),
        grouped,
    })
}

/// Unquote a Go string literal (interpreted or raw).
pub fn unquote(literal: &str) -> Option<String> {
    if let Some(raw) = literal
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
    {
        return Some(raw.to_string());
    }

    let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        out.push(match chars.next()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            _ => return None,
        });
    }
    Some(out)
}

/// Quote a string as a Go interpreted string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Whether `name` is a valid Go identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
