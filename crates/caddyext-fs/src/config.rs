//! Tool configuration
//!
//! All settings have defaults matching a stock Caddy checkout, so the file is
//! optional. Values are passed explicitly to the locator and the directive
//! file rather than being read from globals.

use crate::{Error, Result, io};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default host project import path.
pub const DEFAULT_PROJECT: &str = "github.com/mholt/caddy";
/// Managed file, relative to the host project root.
pub const DEFAULT_MANAGED_FILE: &str = "caddy/directives.go";
/// Variable holding the managed list literal.
pub const DEFAULT_LIST_NAME: &str = "directiveOrder";
/// Line-comment prefix that makes a declaration inert.
pub const DEFAULT_DISABLE_MARKER: &str = "//@caddyext";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Host project import path, or an absolute directory.
    pub project: String,
    /// Managed file relative to the project root.
    pub managed_file: String,
    /// Name of the managed list variable.
    pub list_name: String,
    /// Disable marker prefix.
    pub disable_marker: String,
    /// Registry feed used to resolve bare extension names (URL or file path).
    pub registry_url: Option<String>,
    /// Go toolchain binary used to fetch extension sources.
    pub go_binary: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            project: DEFAULT_PROJECT.to_string(),
            managed_file: DEFAULT_MANAGED_FILE.to_string(),
            list_name: DEFAULT_LIST_NAME.to_string(),
            disable_marker: DEFAULT_DISABLE_MARKER.to_string(),
            registry_url: None,
            go_binary: "go".to_string(),
        }
    }
}

impl ToolConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = io::read_text(path)?;
        Self::from_toml(&content).map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    fn from_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Override the project when a non-empty value is given.
    pub fn with_project(mut self, project: Option<&str>) -> Self {
        if let Some(p) = project.filter(|p| !p.trim().is_empty()) {
            self.project = p.trim().to_string();
        }
        self
    }
}
