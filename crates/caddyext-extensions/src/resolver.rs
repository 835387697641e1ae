//! Resolution of short extension names.

use std::path::Path;

use crate::error::{Error, Result};
use crate::registry::ExtensionCatalog;

/// Maps a short extension name to the Go import path of its source.
pub trait ExtensionResolver {
    /// `Ok(None)` when the name is unknown or listed without a source.
    fn resolve(&self, name: &str) -> Result<Option<String>>;
}

/// Resolves names against a registry feed at a URL or a local path.
///
/// The feed is read on every call; one install command resolves only the
/// names given without a repository.
#[derive(Debug, Clone)]
pub struct FeedResolver {
    location: String,
}

impl FeedResolver {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    fn is_remote(&self) -> bool {
        self.location.starts_with("http://") || self.location.starts_with("https://")
    }

    /// Read and parse the feed.
    pub fn load(&self) -> Result<ExtensionCatalog> {
        let text = if self.is_remote() {
            self.download()?
        } else {
            caddyext_fs::io::read_text(Path::new(&self.location))?
        };
        ExtensionCatalog::parse_feed(&text)
    }

    fn download(&self) -> Result<String> {
        tracing::debug!(url = %self.location, "downloading registry feed");
        let failed = |reason: String| Error::Download {
            url: self.location.clone(),
            reason,
        };
        ureq::get(&self.location)
            .call()
            .map_err(|e| failed(e.to_string()))?
            .into_string()
            .map_err(|e| failed(e.to_string()))
    }
}

impl ExtensionResolver for FeedResolver {
    fn resolve(&self, name: &str) -> Result<Option<String>> {
        self.load()?.resolve(name)
    }
}
