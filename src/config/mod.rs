//! Declarative configuration for file-backed line sources.
//!
//! This module provides:
//! - `SourceConfig`: Path, encoding and buffering for one source
//! - `ConfigError`: Errors raised while loading a configuration document

mod source;

pub use source::{ConfigError, SourceConfig};
