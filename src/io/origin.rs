//! Origin descriptors.

use std::fmt;
use std::path::{Path, PathBuf};

/// How a caller-supplied stream is returned to its start on rewind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewindMode {
    /// Seek the stream back to the position it had when it was bound
    #[default]
    Seek,
    /// Retain every consumed byte in memory and replay it after a rewind
    Replay,
    /// Rewinding only succeeds while nothing has been consumed yet
    ForwardOnly,
}

impl RewindMode {
    /// Parse a rewind mode from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "seek" => Some(RewindMode::Seek),
            "replay" => Some(RewindMode::Replay),
            "forward_only" | "forward-only" | "forward" => Some(RewindMode::ForwardOnly),
            _ => None,
        }
    }
}

/// What a line source is bound to.
///
/// A `Path` origin owns the file handle it opened and releases it when the
/// source is dropped. A `Stream` origin only borrows the caller's stream and
/// never closes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Path(PathBuf),
    Stream(RewindMode),
}

impl Origin {
    /// Whether releasing the underlying handle is the source's job.
    pub fn owns_handle(&self) -> bool {
        matches!(self, Origin::Path(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Origin::Path(p) => Some(p),
            Origin::Stream(_) => None,
        }
    }

    pub fn rewind_mode(&self) -> Option<RewindMode> {
        match self {
            Origin::Path(_) => None,
            Origin::Stream(mode) => Some(*mode),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Path(p) => write!(f, "{}", p.display()),
            Origin::Stream(_) => write!(f, "<stream>"),
        }
    }
}
