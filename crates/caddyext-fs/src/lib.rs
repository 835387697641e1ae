//! Filesystem layer for caddyext
//!
//! Provides atomic I/O for the managed host file, GOPATH-based location of the
//! host project, and the tool configuration.

pub mod config;
pub mod error;
pub mod io;
pub mod locate;

pub use config::ToolConfig;
pub use error::{Error, Result};
pub use locate::{GoPath, HostLocator, SourceLocator};
