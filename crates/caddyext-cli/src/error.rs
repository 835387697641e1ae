//! Error types for caddyext-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Directives(#[from] caddyext_directives::Error),

    #[error(transparent)]
    Fs(#[from] caddyext_fs::Error),

    #[error(transparent)]
    Extensions(#[from] caddyext_extensions::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A command was invoked without its positional arguments.
    #[error("Missing arguments")]
    MissingArguments,

    #[error("Caddy's source (`{project}`) not found on any GOPATH directory")]
    HostNotFound { project: String },

    #[error(
        "Couldn't resolve `{0}` from the extension registry. Please provide a repository for the extension (name:repository)."
    )]
    ExtensionResolve(String),

    #[error("Extension source `{0}` doesn't exist inside any GOPATH directory")]
    SourceNotFound(String),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
