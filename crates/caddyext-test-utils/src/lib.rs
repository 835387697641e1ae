//! Shared test utilities for the caddyext workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not each
//! carry their own copy of a Caddy directives file. It is a dev-dependency
//! only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: directives and registry feed Go sources
//! - [`workspace`]: [`GoWorkspace`] builder for a temporary GOPATH

pub mod fixtures;
pub mod workspace;

pub use workspace::GoWorkspace;
