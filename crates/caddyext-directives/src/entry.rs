//! Directive entry type

use serde::Serialize;

use crate::format::SETUP_SYMBOL;

/// One directive registered with the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Directive name, unique among present entries.
    pub name: String,
    /// Qualified initializer (`pkg.Symbol`). `None` for builtins written in
    /// the legacy placeholder form, whose initializer cannot be recovered.
    pub setup: Option<String>,
    /// Import path of a third-party extension; `None` for builtins.
    pub source: Option<String>,
    pub active: bool,
    /// Shipped with the host; cannot be removed.
    pub builtin: bool,
    /// Tombstone: dropped on the next save.
    pub removed: bool,
}

impl Entry {
    pub(crate) fn builtin(name: impl Into<String>, setup: Option<String>) -> Self {
        let active = setup.is_some();
        Self {
            name: name.into(),
            setup,
            source: None,
            active,
            builtin: true,
            removed: false,
        }
    }

    /// A new, active third-party extension entry.
    pub fn extension(name: impl Into<String>, source: impl Into<String>) -> Self {
        let name = name.into();
        let source = source.into();
        Self {
            setup: Some(format!("{name}.{SETUP_SYMBOL}")),
            source: (!source.is_empty()).then_some(source),
            name,
            active: true,
            builtin: false,
            removed: false,
        }
    }

    /// Still part of the registry (not tombstoned).
    pub fn is_present(&self) -> bool {
        !self.removed
    }

    /// Whether the entry has an initializer reference that can be emitted.
    pub fn has_setup(&self) -> bool {
        !self.builtin || self.setup.is_some()
    }
}
