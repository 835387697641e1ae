//! The ordered, in-memory directive registry.
//!
//! Order is execution order. Every mutation either succeeds completely or
//! returns an error without touching the entries.

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::parser::ParsedModel;
use crate::syntax;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveRegistry {
    entries: Vec<Entry>,
}

impl DirectiveRegistry {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn from_model(model: &ParsedModel) -> Self {
        Self::new(model.entries().to_vec())
    }

    /// Snapshot of all entries in order, tombstones included.
    pub fn list(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the present entry called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.is_present() && e.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.position(name).map(|i| &self.entries[i])
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Entry> {
        match self.position(name) {
            Some(i) => Ok(&mut self.entries[i]),
            None => Err(Error::NotFound(name.to_string())),
        }
    }

    /// Append a new active third-party extension.
    pub fn add(&mut self, name: &str, source: &str) -> Result<()> {
        if !syntax::is_identifier(name) {
            return Err(Error::InvalidName(name.to_string()));
        }
        if self.position(name).is_some() {
            return Err(Error::AlreadyImported(name.to_string()));
        }
        self.entries.push(Entry::extension(name, source));
        Ok(())
    }

    /// Tombstone a third-party extension; it disappears on save.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let entry = self.get_mut(name)?;
        if entry.builtin {
            return Err(Error::InvalidCore(name.to_string()));
        }
        entry.removed = true;
        Ok(())
    }

    pub fn enable(&mut self, name: &str) -> Result<()> {
        self.get_mut(name)?.active = true;
        Ok(())
    }

    pub fn disable(&mut self, name: &str) -> Result<()> {
        self.get_mut(name)?.active = false;
        Ok(())
    }

    /// Take the entry out and reinsert it at `index` of the remaining
    /// sequence. Moving to the current index leaves the order unchanged.
    pub fn move_to(&mut self, name: &str, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(Error::InvalidIndex {
                index,
                len: self.entries.len(),
            });
        }
        let current = self
            .position(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        let entry = self.entries.remove(current);
        self.entries.insert(index, entry);
        Ok(())
    }

    /// Reactivate every entry and clear all tombstones.
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.active = true;
            entry.removed = false;
        }
    }
}

/// Where a newly added entry should go, relative to an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Before(String),
    After(String),
}

impl Placement {
    /// Target index for [`DirectiveRegistry::move_to`], computed against the
    /// snapshot taken before the add.
    pub fn resolve(&self, snapshot: &[Entry]) -> Result<usize> {
        let (neighbor, offset) = match self {
            Placement::Before(name) => (name, 0),
            Placement::After(name) => (name, 1),
        };
        snapshot
            .iter()
            .position(|e| e.is_present() && &e.name == neighbor)
            .map(|i| i + offset)
            .ok_or_else(|| Error::NotFound(neighbor.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(names: &[&str]) -> DirectiveRegistry {
        DirectiveRegistry::new(
            names
                .iter()
                .map(|n| Entry::builtin(*n, Some(format!("setup.{n}"))))
                .collect(),
        )
    }

    fn names(registry: &DirectiveRegistry) -> Vec<&str> {
        registry.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_move_to_current_index_is_noop() {
        let mut reg = registry(&["a", "b", "c"]);
        reg.move_to("b", 1).unwrap();
        assert_eq!(names(&reg), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_forward_uses_remaining_sequence() {
        let mut reg = registry(&["a", "b", "c", "d"]);
        reg.move_to("a", 2).unwrap();
        assert_eq!(names(&reg), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_move_to_last_index() {
        let mut reg = registry(&["a", "b", "c"]);
        reg.move_to("a", 2).unwrap();
        assert_eq!(names(&reg), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_removed_name_can_be_added_again() {
        let mut reg = registry(&["root"]);
        reg.add("git", "github.com/abiosoft/caddy-git").unwrap();
        reg.remove("git").unwrap();
        reg.add("git", "github.com/someone/git").unwrap();

        assert_eq!(reg.len(), 3);
        assert_eq!(
            reg.get("git").unwrap().source.as_deref(),
            Some("github.com/someone/git")
        );
    }

    #[test]
    fn test_add_rejects_non_identifier() {
        let mut reg = registry(&["root"]);
        let err = reg.add("caddy-search", "github.com/x").unwrap_err();
        assert!(matches!(err, Error::InvalidName(_)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_placement_after_last() {
        let reg = registry(&["a", "b"]);
        let snapshot = reg.list();
        assert_eq!(
            Placement::After("b".into()).resolve(&snapshot).unwrap(),
            2
        );
        assert!(matches!(
            Placement::Before("zz".into()).resolve(&snapshot),
            Err(Error::NotFound(_))
        ));
    }
}
