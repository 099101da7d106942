//! The rewindable line source.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::iter::FusedIterator;
use std::path::Path;

use log::{debug, trace};

use crate::builder::LineSourceBuilder;
use crate::charset::Charset;
use crate::error::{LineSourceError, Result, Stage};
use crate::io::{Origin, RewindMode, StreamHandle, scan};
use crate::tokenize::split_tokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    Exhausted,
}

#[derive(Debug)]
enum Input<'a> {
    File(BufReader<File>),
    Stream(BufReader<StreamHandle<'a>>),
}

impl Input<'_> {
    fn reader(&mut self) -> &mut dyn BufRead {
        match self {
            Input::File(r) => r,
            Input::Stream(r) => r,
        }
    }

    fn seek_start(&mut self) -> io::Result<()> {
        match self {
            Input::File(r) => r.seek(SeekFrom::Start(0)).map(drop),
            Input::Stream(r) => r.seek(SeekFrom::Start(0)).map(drop),
        }
    }
}

/// A pull-based cursor over the decoded lines of a file or byte stream.
///
/// Lines end at `\n` (an immediately preceding `\r` is dropped as well) and
/// are decoded strictly with the bound [`Charset`]. A UTF-8 byte-order mark
/// at the start of the origin is skipped.
///
/// Sources bound with [`LineSource::from_path`] own their file and close it
/// on drop. Sources bound to a caller stream borrow it for `'a` and leave it
/// open.
///
/// Caller streams must be `Send`, so a source can be moved to a worker
/// thread. It is not meant to be shared between threads; wrap it in a lock
/// if several threads need to pull from it.
#[derive(Debug)]
pub struct LineSource<'a> {
    origin: Origin,
    charset: Charset,
    input: Input<'a>,
    state: State,
    at_start: bool,
    line_number: u64,
    buf: Vec<u8>,
}

impl LineSource<'static> {
    /// Open `path` and decode it with the encoding called `encoding`.
    pub fn from_path(path: impl AsRef<Path>, encoding: &str) -> Result<Self> {
        LineSourceBuilder::new()
            .with_encoding(encoding)
            .open_path(path)
    }
}

impl<'a> LineSource<'a> {
    /// Bind a seekable caller stream. Rewinding seeks back to the position
    /// the stream had at this call.
    pub fn from_stream<R: Read + Seek + Send>(stream: &'a mut R, encoding: &str) -> Result<Self> {
        LineSourceBuilder::new()
            .with_encoding(encoding)
            .bind_stream(stream)
    }

    /// Bind a caller stream that cannot seek, using `mode` to decide how
    /// rewinding works. `RewindMode::Seek` is rejected.
    pub fn from_stream_with<R: Read + Send>(
        stream: &'a mut R,
        encoding: &str,
        mode: RewindMode,
    ) -> Result<Self> {
        LineSourceBuilder::new()
            .with_encoding(encoding)
            .with_rewind_mode(mode)
            .bind_unseekable(stream)
    }

    pub(crate) fn with_file(path: &Path, charset: Charset, capacity: usize) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| LineSourceError::io(Stage::Open, path.display().to_string(), e))?;
        let origin = Origin::Path(path.to_path_buf());
        debug!("bound line source to {origin} ({charset})");
        Ok(Self::new(
            origin,
            charset,
            Input::File(BufReader::with_capacity(capacity, file)),
        ))
    }

    pub(crate) fn with_stream(
        handle: StreamHandle<'a>,
        mode: RewindMode,
        charset: Charset,
        capacity: usize,
    ) -> Self {
        let origin = Origin::Stream(mode);
        debug!("bound line source to {origin} ({charset}, {mode:?})");
        Self::new(
            origin,
            charset,
            Input::Stream(BufReader::with_capacity(capacity, handle)),
        )
    }

    fn new(origin: Origin, charset: Charset, input: Input<'a>) -> Self {
        Self {
            origin,
            charset,
            input,
            state: State::Open,
            at_start: true,
            line_number: 0,
            buf: Vec::new(),
        }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Lines consumed (read or skipped) since binding or the last rewind.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Whether end-of-input has been observed since binding or the last
    /// rewind.
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    /// Skip up to `n` lines without decoding them.
    ///
    /// Returns how many lines were actually skipped, which is less than `n`
    /// only when end-of-input was reached. A negative `n` fails with
    /// `InvalidArgument` and leaves the cursor untouched.
    pub fn skip_line(&mut self, n: i64) -> Result<u64> {
        let n = u64::try_from(n).map_err(|_| {
            LineSourceError::InvalidArgument(format!("cannot skip {n} lines"))
        })?;
        if n == 0 || self.state == State::Exhausted {
            return Ok(0);
        }

        let mut skipped = 0;
        while skipped < n {
            let more = scan::skip_line(self.input.reader()).map_err(|e| self.read_error(e))?;
            if !more {
                self.state = State::Exhausted;
                break;
            }
            // A BOM is part of the first line's bytes, so it is skipped too.
            self.at_start = false;
            skipped += 1;
            self.line_number += 1;
        }
        trace!("skipped {skipped}/{n} lines of {}", self.origin);
        Ok(skipped)
    }

    /// Read and decode the next line, without its terminator.
    ///
    /// Returns `Ok(None)` at end-of-input, and keeps doing so until
    /// [`rewind`](Self::rewind). A line that is malformed for the bound
    /// charset is consumed and reported as a decode error.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        if self.state == State::Exhausted {
            return Ok(None);
        }

        let more = scan::read_line_bytes(self.input.reader(), &mut self.buf)
            .map_err(|e| self.read_error(e))?;
        if !more {
            self.state = State::Exhausted;
            return Ok(None);
        }
        self.line_number += 1;
        if std::mem::take(&mut self.at_start) {
            let bom = self.charset.bom_len(&self.buf);
            self.buf.drain(..bom);
        }

        match self.charset.decode(&self.buf) {
            Some(text) => Ok(Some(text.into_owned())),
            None => Err(LineSourceError::Decode {
                target: self.origin.to_string(),
                line: self.line_number,
                encoding: self.charset.name(),
            }),
        }
    }

    /// Read the next line split into whitespace-delimited tokens.
    ///
    /// A blank line yields an empty vector; end-of-input yields `Ok(None)`.
    pub fn read_line_tokens(&mut self) -> Result<Option<Vec<String>>> {
        Ok(self.read_line()?.map(|line| split_tokens(&line)))
    }

    /// Return the cursor to the start of the origin.
    ///
    /// On failure the cursor stays where it was.
    pub fn rewind(&mut self) -> Result<()> {
        self.input
            .seek_start()
            .map_err(|e| LineSourceError::io(Stage::Rewind, self.origin.to_string(), e))?;
        self.state = State::Open;
        self.at_start = true;
        self.line_number = 0;
        debug!("rewound {}", self.origin);
        Ok(())
    }

    /// Iterate over the remaining lines.
    ///
    /// A decode error is yielded and iteration continues with the next
    /// line. Any other error is yielded once and ends the iteration.
    pub fn lines(&mut self) -> Lines<'_, 'a> {
        Lines {
            source: self,
            failed: false,
        }
    }

    /// Iterate over the remaining lines, tokenized. Errors end iteration the
    /// same way as [`lines`](Self::lines).
    pub fn token_lines(&mut self) -> TokenLines<'_, 'a> {
        TokenLines {
            source: self,
            failed: false,
        }
    }

    fn read_error(&self, e: io::Error) -> LineSourceError {
        LineSourceError::io(Stage::Read, self.origin.to_string(), e)
    }
}

/// Record a terminal error so the iterator stops after yielding it.
fn fuse<T>(item: Option<Result<T>>, failed: &mut bool) -> Option<Result<T>> {
    if let Some(Err(e)) = &item {
        *failed = !matches!(e, LineSourceError::Decode { .. });
    }
    item
}

/// Iterator returned by [`LineSource::lines`].
#[derive(Debug)]
pub struct Lines<'s, 'a> {
    source: &'s mut LineSource<'a>,
    failed: bool,
}

impl Iterator for Lines<'_, '_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        fuse(self.source.read_line().transpose(), &mut self.failed)
    }
}

impl FusedIterator for Lines<'_, '_> {}

/// Iterator returned by [`LineSource::token_lines`].
#[derive(Debug)]
pub struct TokenLines<'s, 'a> {
    source: &'s mut LineSource<'a>,
    failed: bool,
}

impl Iterator for TokenLines<'_, '_> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        fuse(self.source.read_line_tokens().transpose(), &mut self.failed)
    }
}

impl FusedIterator for TokenLines<'_, '_> {}
