//! Conventions of the managed file.

use caddyext_fs::config::{DEFAULT_DISABLE_MARKER, DEFAULT_LIST_NAME};

use crate::error::{Error, Result};
use crate::syntax;

/// Initializer symbol every third-party extension package exports.
pub const SETUP_SYMBOL: &str = "Setup";

/// Name of the managed list variable and the disable marker used in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveFormat {
    list_name: String,
    marker: String,
}

impl Default for DirectiveFormat {
    fn default() -> Self {
        Self {
            list_name: DEFAULT_LIST_NAME.to_string(),
            marker: DEFAULT_DISABLE_MARKER.to_string(),
        }
    }
}

impl DirectiveFormat {
    pub fn new(list_name: impl Into<String>, marker: impl Into<String>) -> Result<Self> {
        let list_name = list_name.into();
        let marker = marker.into();

        if !syntax::is_identifier(&list_name) {
            return Err(Error::InvalidName(list_name));
        }
        let valid_marker = marker.len() > 2
            && marker.starts_with("//")
            && !marker.chars().any(char::is_whitespace);
        if !valid_marker {
            return Err(Error::InvalidMarker(marker));
        }

        Ok(Self { list_name, marker })
    }

    pub fn list_name(&self) -> &str {
        &self.list_name
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Prefix written in front of an inert declaration.
    pub fn marker_prefix(&self) -> String {
        format!("{} ", self.marker)
    }
}
