//! # linesource
//!
//! Rewindable, charset-aware line reading over files and byte streams.
//!
//! ## Overview
//!
//! linesource provides:
//! - **One cursor, two origins**: Read a named file or a caller-supplied stream
//!   through the same `LineSource` API
//! - **Explicit decoding**: Every line is decoded strictly with a named charset;
//!   malformed input is an error, never replacement characters
//! - **Cheap skipping**: `skip_line` advances past whole lines without decoding
//! - **Tokenization**: `read_line_tokens` splits a line on Unicode whitespace
//! - **Rewind**: Return to the start for another pass, e.g. one per training epoch
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linesource::LineSource;
//!
//! fn main() -> Result<(), linesource::LineSourceError> {
//!     let mut source = LineSource::from_path("corpus.txt", "utf-8")?;
//!
//!     for epoch in 0..3 {
//!         source.skip_line(1)?; // header
//!         while let Some(tokens) = source.read_line_tokens()? {
//!             println!("{epoch}: {tokens:?}");
//!         }
//!         source.rewind()?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Text rules
//!
//! - A line ends at `\n`; a `\r` directly before it is dropped as well. A lone
//!   `\r` is content. Trailing bytes without a terminator form a last line.
//! - Token separators are characters with the Unicode `White_Space` property.
//! - Encodings are WHATWG labels resolved by `encoding_rs`. Only
//!   ASCII-compatible encodings are accepted, so UTF-16 and ISO-2022-JP fail
//!   with `UnsupportedEncoding`.
//! - A UTF-8 byte-order mark at the start of the origin is skipped.
//!
//! ## Ownership
//!
//! `LineSource::from_path` opens and owns its file; dropping the source closes
//! it. `LineSource::from_stream` and `LineSource::from_stream_with` borrow the
//! caller's stream for the source's lifetime and never close it.
//!
//! ## Features
//!
//! - `json` - Load `SourceConfig` from JSON
//! - `yaml` - Load `SourceConfig` from YAML
//! - `miette` - Pretty error reporting with miette
//! - `cli` - The `linesource_cat` binary

pub mod builder;
pub mod charset;
pub mod config;
pub mod error;
pub mod io;
pub mod source;
pub mod tokenize;

// Re-exports for convenience
pub use builder::LineSourceBuilder;
pub use charset::Charset;
pub use config::{ConfigError, SourceConfig};
pub use error::{ErrorKind, LineSourceError, Result, Stage};
pub use io::{Origin, RewindMode};
pub use source::{LineSource, Lines, TokenLines};
pub use tokenize::split_tokens;

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::LineDiagnostic;
