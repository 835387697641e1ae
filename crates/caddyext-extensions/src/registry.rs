//! Catalog of known extensions, read from a registry feed.
//!
//! The feed is a Go file declaring a `Registry` list literal:
//!
//! ```go
//! var Registry = []extension{
//!     {"search", "github.com/pedronasser/caddy-search"},
//! }
//! ```

use std::collections::HashMap;

use caddyext_directives::syntax;

use crate::error::{Error, Result};
use crate::resolver::ExtensionResolver;

/// Name of the list literal holding the feed entries.
pub const REGISTRY_LIST_NAME: &str = "Registry";

/// A known extension and where its source lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionEntry {
    pub name: String,
    /// Go import path; empty when the feed lists the name without a source.
    pub source: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExtensionCatalog {
    entries: HashMap<String, ExtensionEntry>,
}

impl ExtensionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from the text of a registry feed.
    pub fn parse_feed(text: &str) -> Result<Self> {
        let tree = syntax::parse_go(text)?;
        let body = syntax::find_list_literal(tree.root_node(), text, REGISTRY_LIST_NAME)
            .ok_or_else(|| Error::InvalidFeed(format!("no `{REGISTRY_LIST_NAME}` list")))?;

        let mut catalog = Self::new();
        for element in syntax::literal_elements(body) {
            let raw = syntax::text(element, text);
            let invalid = || Error::InvalidFeed(format!("unexpected element {raw}"));

            let fields: Vec<String> = syntax::literal_elements(element)
                .into_iter()
                .map(|field| syntax::unquote(syntax::text(field, text)))
                .collect::<Option<_>>()
                .ok_or_else(invalid)?;
            let [name, source] = <[String; 2]>::try_from(fields).map_err(|_| invalid())?;

            // First listing wins, as a linear scan of the feed would.
            if !catalog.contains(&name) {
                catalog.register(ExtensionEntry { name, source });
            }
        }

        tracing::debug!(extensions = catalog.len(), "parsed registry feed");
        Ok(catalog)
    }

    /// Register an extension entry, replacing any entry of the same name.
    pub fn register(&mut self, entry: ExtensionEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&ExtensionEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All known extension names (sorted).
    pub fn known_extensions(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ExtensionResolver for ExtensionCatalog {
    fn resolve(&self, name: &str) -> Result<Option<String>> {
        Ok(self
            .get(name)
            .map(|entry| entry.source.clone())
            .filter(|source| !source.is_empty()))
    }
}
