//! Host source location
//!
//! The host project is looked up inside the GOPATH workspaces the Go
//! toolchain would use. Nothing here is process-global: the GOPATH roots and
//! the managed file name are carried by the values below.

use std::path::{Path, PathBuf};

/// Finds the managed file of a host project.
pub trait SourceLocator {
    /// Return the absolute path of the managed file for `project`, if found.
    fn locate(&self, project: &str) -> Option<PathBuf>;
}

/// Ordered list of GOPATH workspace roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoPath {
    roots: Vec<PathBuf>,
}

impl GoPath {
    /// Create a GoPath from explicit workspace roots.
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            roots: roots
                .into_iter()
                .filter(|r| !r.as_os_str().is_empty())
                .collect(),
        }
    }

    /// Parse a GOPATH value (platform list separator).
    ///
    /// An empty value falls back to `$HOME/go`, the Go toolchain default.
    pub fn parse(value: Option<&str>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(v) => Self::new(std::env::split_paths(v)),
            None => Self::new(dirs::home_dir().map(|home| home.join("go"))),
        }
    }

    /// Read GOPATH from the environment.
    pub fn from_env() -> Self {
        Self::parse(std::env::var("GOPATH").ok().as_deref())
    }

    /// Workspace roots in lookup order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// `src` directory of every root, in lookup order.
    pub fn src_dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.roots.iter().map(|root| root.join("src"))
    }

    /// Find the first workspace holding the package at `import_path`.
    pub fn find_package(&self, import_path: &str) -> Option<PathBuf> {
        let relative = import_path.trim_matches('/');
        if relative.is_empty() {
            return None;
        }
        self.src_dirs()
            .map(|src| src.join(relative))
            .find(|candidate| candidate.is_dir())
    }
}

/// Locates the host's managed file under GOPATH (or an absolute project path).
#[derive(Debug, Clone)]
pub struct HostLocator {
    gopath: GoPath,
    managed_file: PathBuf,
}

impl HostLocator {
    pub fn new(gopath: GoPath, managed_file: impl Into<PathBuf>) -> Self {
        Self {
            gopath,
            managed_file: managed_file.into(),
        }
    }

    pub fn gopath(&self) -> &GoPath {
        &self.gopath
    }

    fn candidate(&self, project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(&self.managed_file);
        if path.is_file() {
            dunce::canonicalize(&path).ok().or(Some(path))
        } else {
            None
        }
    }
}

impl SourceLocator for HostLocator {
    fn locate(&self, project: &str) -> Option<PathBuf> {
        let project_path = Path::new(project);
        if project_path.is_absolute() {
            let found = self.candidate(project_path);
            tracing::debug!(project, found = found.is_some(), "checked absolute project path");
            return found;
        }

        for src in self.gopath.src_dirs() {
            if let Some(found) = self.candidate(&src.join(project)) {
                tracing::debug!(path = %found.display(), "located managed file");
                return Some(found);
            }
        }

        tracing::debug!(project, "managed file not found on any GOPATH root");
        None
    }
}
