//! Directive registry management for Caddy's `directives.go`.
//!
//! The registry lives inside Go source: an import block and the
//! `directiveOrder` list literal. This crate reads that list into an ordered
//! model, applies edits to it, and writes it back while leaving the rest of
//! the file as it was.
//!
//! ```text
//! raw text --strip markers--> Go source --tree-sitter--> ParsedModel
//!     --> DirectiveRegistry (add/remove/enable/disable/move/reset)
//!     --> writer::render --> atomic write
//! ```
//!
//! A disabled entry is kept in the file behind the `//@caddyext` marker
//! comment, both in the list and on its import line:
//!
//! ```text
//! import (
//!     //@caddyext git "github.com/abiosoft/caddy-git"
//! )
//!
//! var directiveOrder = []directive{
//!     {"root", setup.Root},
//!     //@caddyext {"git", git.Setup},
//! }
//! ```

pub mod entry;
pub mod error;
pub mod file;
pub mod format;
pub mod marker;
pub mod parser;
pub mod registry;
pub mod syntax;
pub mod writer;

pub use entry::Entry;
pub use error::{Error, Result};
pub use file::DirectiveFile;
pub use format::{DirectiveFormat, SETUP_SYMBOL};
pub use parser::{ParsedModel, parse};
pub use registry::{DirectiveRegistry, Placement};
