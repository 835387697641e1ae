//! Error types for caddyext-directives

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The managed file does not parse, or lacks the managed list literal.
    #[error("Invalid directive file: {reason}")]
    InvalidFormat { reason: String },

    /// A list element is neither `{name, pkg.Setup}` nor `{name, func...}`.
    #[error("Directive file is importing using an invalid format: {element}")]
    ImportInvalidFormat { element: String },

    #[error("Directive already imported: {0}")]
    AlreadyImported(String),

    #[error("Directive not found: {0}")]
    NotFound(String),

    /// Builtin directives cannot be removed.
    #[error("Invalid directive (from the core): {0}")]
    InvalidCore(String),

    #[error("Invalid index {index}: the stack holds {len} directives")]
    InvalidIndex { index: usize, len: usize },

    #[error("Invalid directive name '{0}': expected a Go identifier")]
    InvalidName(String),

    #[error("Invalid disable marker '{0}': expected a line comment such as //@caddyext")]
    InvalidMarker(String),

    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] caddyext_fs::Error),
}

impl Error {
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }
}
