//! Origin plumbing for line sources.
//!
//! This module provides:
//! - `Origin`: What a source is bound to (an owned file or a borrowed stream)
//! - `RewindMode`: How a borrowed stream gets back to its start
//! - Internal helpers for scanning line boundaries on raw bytes

mod origin;
pub(crate) mod scan;
mod stream;

pub use origin::{Origin, RewindMode};
pub(crate) use stream::{SeekRead, StreamHandle};
