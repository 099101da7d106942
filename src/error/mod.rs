//! Error types for line source operations.
//!
//! This module provides:
//! - `ErrorKind`: The three failure classes callers branch on
//! - `Stage`: Indicates which step of an I/O operation failed
//! - `LineSourceError`: A single failure with its context

use std::fmt;
use std::io;

use thiserror::Error;

/// Coarse failure classes of the line source contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The encoding name did not resolve at construction time
    UnsupportedEncoding,
    /// Open, read, decode or reposition failure
    IoFailure,
    /// A caller-supplied argument was out of range
    InvalidArgument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the file behind a path origin
    Open,
    Read,
    Decode,
    Rewind,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Decode => write!(f, "Decode"),
            Stage::Rewind => write!(f, "Rewind"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LineSourceError {
    /// The encoding name is unknown or names an encoding whose line
    /// boundaries cannot be found by scanning bytes.
    #[error("unsupported encoding: {name}")]
    UnsupportedEncoding { name: String },

    /// Underlying I/O failure
    #[error("[{stage}] {target}: {source}")]
    Io {
        stage: Stage,
        /// Identifier of the origin (file path, or "<stream>")
        target: String,
        #[source]
        source: io::Error,
    },

    /// A line contained bytes that are malformed for the bound encoding
    #[error("[Decode] {target}: line {line} is not valid {encoding}")]
    Decode {
        target: String,
        /// 1-based line number within the current pass
        line: u64,
        encoding: &'static str,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl LineSourceError {
    /// Map this error onto its contract-level kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LineSourceError::UnsupportedEncoding { .. } => ErrorKind::UnsupportedEncoding,
            LineSourceError::Io { .. } | LineSourceError::Decode { .. } => ErrorKind::IoFailure,
            LineSourceError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// The stage an I/O failure happened in, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            LineSourceError::Io { stage, .. } => Some(*stage),
            LineSourceError::Decode { .. } => Some(Stage::Decode),
            _ => None,
        }
    }

    pub(crate) fn io(stage: Stage, target: impl Into<String>, source: io::Error) -> Self {
        LineSourceError::Io {
            stage,
            target: target.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LineSourceError>;

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
