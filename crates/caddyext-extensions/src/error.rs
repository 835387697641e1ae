/// Errors that can occur while resolving or fetching extensions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The registry feed does not have the expected shape.
    #[error("invalid registry feed: {0}")]
    InvalidFeed(String),

    /// The registry feed could not be downloaded.
    #[error("failed to download registry feed from {url}: {reason}")]
    Download { url: String, reason: String },

    /// The fetch tool could not be run or returned a failure.
    #[error("failed to fetch '{location}': {reason}")]
    FetchFailed { location: String, reason: String },

    #[error(transparent)]
    Syntax(#[from] caddyext_directives::Error),

    #[error(transparent)]
    Fs(#[from] caddyext_fs::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
