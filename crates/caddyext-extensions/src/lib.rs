//! Extension collaborators for caddyext.
//!
//! Resolves a short extension name to a Go import path through a registry
//! feed, and fetches extension sources with the Go toolchain. Neither touches
//! the directive file; callers run them before the registry is edited.

pub mod error;
pub mod fetch;
pub mod registry;
pub mod resolver;

pub use error::{Error, Result};
pub use fetch::{GoGetFetcher, SourceFetcher};
pub use registry::{ExtensionCatalog, ExtensionEntry, REGISTRY_LIST_NAME};
pub use resolver::{ExtensionResolver, FeedResolver};
