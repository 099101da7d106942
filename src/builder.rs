//! Builder for creating LineSource instances.

use std::io::{Read, Seek};
use std::path::Path;

use crate::charset::Charset;
use crate::error::{LineSourceError, Result, Stage};
use crate::io::{RewindMode, SeekRead, StreamHandle};
use crate::source::LineSource;

#[derive(Debug, Clone)]
pub struct LineSourceBuilder {
    encoding: String,
    buffer_capacity: usize,
    rewind_mode: RewindMode,
}

impl Default for LineSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSourceBuilder {
    pub const DEFAULT_ENCODING: &'static str = "utf-8";
    pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

    pub fn new() -> Self {
        Self {
            encoding: Self::DEFAULT_ENCODING.to_string(),
            buffer_capacity: Self::DEFAULT_BUFFER_CAPACITY,
            rewind_mode: RewindMode::default(),
        }
    }

    pub fn with_encoding(mut self, name: impl Into<String>) -> Self {
        self.encoding = name.into();
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Set how caller streams are rewound. Ignored for path origins.
    pub fn with_rewind_mode(mut self, mode: RewindMode) -> Self {
        self.rewind_mode = mode;
        self
    }

    /// Open `path` as an owned file origin.
    pub fn open_path(self, path: impl AsRef<Path>) -> Result<LineSource<'static>> {
        let (charset, capacity) = self.resolve()?;
        LineSource::with_file(path.as_ref(), charset, capacity)
    }

    /// Bind a borrowed seekable stream; any rewind mode is allowed.
    pub fn bind_stream<'a, R: Read + Seek + Send>(self, stream: &'a mut R) -> Result<LineSource<'a>> {
        let (charset, capacity) = self.resolve()?;
        let handle = match self.rewind_mode {
            RewindMode::Seek => {
                let inner: &'a mut dyn SeekRead = stream;
                StreamHandle::seekable(inner)
                    .map_err(|e| LineSourceError::io(Stage::Open, "<stream>", e))?
            }
            RewindMode::Replay => StreamHandle::replay(stream),
            RewindMode::ForwardOnly => StreamHandle::forward_only(stream),
        };
        Ok(LineSource::with_stream(
            handle,
            self.rewind_mode,
            charset,
            capacity,
        ))
    }

    /// Bind a borrowed stream that cannot seek.
    ///
    /// Fails with `InvalidArgument` when the rewind mode is `Seek`.
    pub fn bind_unseekable<'a, R: Read + Send>(self, stream: &'a mut R) -> Result<LineSource<'a>> {
        let (charset, capacity) = self.resolve()?;
        let handle = match self.rewind_mode {
            RewindMode::Seek => {
                return Err(LineSourceError::InvalidArgument(
                    "seek rewinding needs a seekable stream; use Replay or ForwardOnly".into(),
                ));
            }
            RewindMode::Replay => StreamHandle::replay(stream),
            RewindMode::ForwardOnly => StreamHandle::forward_only(stream),
        };
        Ok(LineSource::with_stream(
            handle,
            self.rewind_mode,
            charset,
            capacity,
        ))
    }

    fn resolve(&self) -> Result<(Charset, usize)> {
        let charset = Charset::for_name(&self.encoding)?;
        if self.buffer_capacity == 0 {
            return Err(LineSourceError::InvalidArgument(
                "buffer capacity must be greater than zero".into(),
            ));
        }
        Ok((charset, self.buffer_capacity))
    }
}
