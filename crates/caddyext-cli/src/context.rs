//! Host context for a command run
//!
//! Resolves the configuration, the GOPATH and the managed file once, and
//! hands them to the command that needs them.

use std::path::{Path, PathBuf};

use caddyext_directives::{DirectiveFile, DirectiveFormat};
use caddyext_extensions::{FeedResolver, GoGetFetcher};
use caddyext_fs::{GoPath, HostLocator, SourceLocator, ToolConfig};

use crate::error::{CliError, Result};

#[derive(Debug, Clone)]
pub struct Context {
    config: ToolConfig,
    locator: HostLocator,
}

impl Context {
    /// Load the configuration and apply the project override.
    pub fn load(config_path: Option<&Path>, project: Option<&str>) -> Result<Self> {
        let config = ToolConfig::load_or_default(config_path)?.with_project(project);
        Ok(Self::new(config, GoPath::from_env()))
    }

    pub fn new(config: ToolConfig, gopath: GoPath) -> Self {
        let locator = HostLocator::new(gopath, &config.managed_file);
        Self { config, locator }
    }

    pub fn gopath(&self) -> &GoPath {
        self.locator.gopath()
    }

    pub fn format(&self) -> Result<DirectiveFormat> {
        Ok(DirectiveFormat::new(
            &self.config.list_name,
            &self.config.disable_marker,
        )?)
    }

    /// Absolute path of the managed file.
    pub fn host_file(&self) -> Result<PathBuf> {
        self.locator
            .locate(&self.config.project)
            .ok_or_else(|| CliError::HostNotFound {
                project: self.config.project.clone(),
            })
    }

    /// Locate and parse the managed file.
    pub fn open(&self) -> Result<DirectiveFile> {
        Ok(DirectiveFile::open(self.host_file()?, self.format()?)?)
    }

    /// Registry feed resolver, when a feed is configured.
    pub fn resolver(&self) -> Option<FeedResolver> {
        self.config.registry_url.as_deref().map(FeedResolver::new)
    }

    pub fn fetcher(&self) -> GoGetFetcher {
        GoGetFetcher::new(&self.config.go_binary)
    }
}
