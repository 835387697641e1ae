//! [`GoWorkspace`] builder for locator and CLI test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default host project import path used by the builder.
pub const HOST_PROJECT: &str = "github.com/mholt/caddy";
/// Managed file inside the host project.
pub const MANAGED_FILE: &str = "caddy/directives.go";

/// A temporary GOPATH with helper methods for test setup.
///
/// # Example
///
/// ```rust,no_run
/// use caddyext_test_utils::{GoWorkspace, fixtures};
///
/// let ws = GoWorkspace::new();
/// let file = ws.with_host(fixtures::DIRECTIVES_GO);
/// ws.add_package("github.com/pedronasser/caddy-search");
/// assert!(file.exists());
/// ```
pub struct GoWorkspace {
    temp_dir: TempDir,
}

impl Default for GoWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl GoWorkspace {
    /// Create an empty temporary GOPATH root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// The GOPATH root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `<root>/src`.
    pub fn src(&self) -> PathBuf {
        self.root().join("src")
    }

    /// Write the host's managed file with `content` and return its path.
    pub fn with_host(&self, content: &str) -> PathBuf {
        let path = self.host_file();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Path of the host's managed file (may not exist yet).
    pub fn host_file(&self) -> PathBuf {
        self.src().join(HOST_PROJECT).join(MANAGED_FILE)
    }

    /// Current content of the managed file.
    pub fn read_host(&self) -> String {
        fs::read_to_string(self.host_file()).unwrap()
    }

    /// Create an (empty) Go package directory at `import_path`.
    pub fn add_package(&self, import_path: &str) -> PathBuf {
        let dir = self.src().join(import_path);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("setup.go"), "package ext\n").unwrap();
        dir
    }

    /// Write an arbitrary file relative to the root.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
