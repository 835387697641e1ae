//! A directive file on disk: load, edit through the registry, save.

use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::error::Result;
use crate::format::DirectiveFormat;
use crate::parser::{self, ParsedModel};
use crate::registry::DirectiveRegistry;
use crate::writer;

/// One load/mutate/save cycle over a managed file.
///
/// Nothing touches the disk until [`DirectiveFile::save`], which renders the
/// whole file in memory first and then replaces it atomically.
#[derive(Debug, Clone)]
pub struct DirectiveFile {
    path: PathBuf,
    format: DirectiveFormat,
    original: String,
    model: ParsedModel,
    registry: DirectiveRegistry,
}

impl DirectiveFile {
    /// Read and parse the file at `path`.
    pub fn open(path: impl Into<PathBuf>, format: DirectiveFormat) -> Result<Self> {
        let path = path.into();
        let raw = caddyext_fs::io::read_text(&path)?;
        let file = Self::from_source(path, raw, format)?;
        tracing::debug!(
            path = %file.path.display(),
            directives = file.registry.len(),
            "loaded directive file"
        );
        Ok(file)
    }

    /// Parse `raw` as if it had been read from `path`.
    pub fn from_source(
        path: impl Into<PathBuf>,
        raw: impl Into<String>,
        format: DirectiveFormat,
    ) -> Result<Self> {
        let original = raw.into();
        let model = parser::parse(&original, &format)?;
        let registry = DirectiveRegistry::from_model(&model);
        Ok(Self {
            path: path.into(),
            format,
            original,
            model,
            registry,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> &DirectiveFormat {
        &self.format
    }

    pub fn model(&self) -> &ParsedModel {
        &self.model
    }

    /// Text as it was read.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn registry(&self) -> &DirectiveRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut DirectiveRegistry {
        &mut self.registry
    }

    /// Full text the next save would write.
    pub fn render(&self) -> Result<String> {
        writer::render(&self.registry, &self.model, &self.format)
    }

    /// Whether saving would change the file.
    pub fn is_dirty(&self) -> Result<bool> {
        Ok(self.render()? != self.original)
    }

    /// Unified diff between the file on disk and the pending save.
    pub fn diff(&self) -> Result<String> {
        let rendered = self.render()?;
        let name = self.path.display().to_string();
        let diff = TextDiff::from_lines(self.original.as_str(), rendered.as_str());
        Ok(diff
            .unified_diff()
            .context_radius(3)
            .header(&format!("a/{name}"), &format!("b/{name}"))
            .to_string())
    }

    /// Render and atomically replace the file.
    pub fn save(&self) -> Result<()> {
        let rendered = self.render()?;
        caddyext_fs::io::write_text(&self.path, &rendered)?;
        tracing::debug!(path = %self.path.display(), "saved directive file");
        Ok(())
    }
}
