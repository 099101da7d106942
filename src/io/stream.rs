//! Rewindable wrapper over a borrowed caller stream.

use std::fmt;
use std::io::{self, Read, Seek, SeekFrom};

pub(crate) trait SeekRead: Read + Seek + Send {}

impl<T: Read + Seek + Send + ?Sized> SeekRead for T {}

/// Borrowed stream plus the bookkeeping its rewind mode needs.
///
/// `Seek` is implemented for `SeekFrom::Start(0)` only, meaning "the logical
/// start of the stream", so a `BufReader` on top can discard its buffer
/// through the usual `seek` path.
pub(crate) enum StreamHandle<'a> {
    Seekable {
        inner: &'a mut dyn SeekRead,
        start: u64,
    },
    Replay {
        inner: &'a mut (dyn Read + Send),
        log: Vec<u8>,
        pos: usize,
    },
    ForwardOnly {
        inner: &'a mut (dyn Read + Send),
        consumed: bool,
    },
}

impl<'a> StreamHandle<'a> {
    pub(crate) fn seekable(inner: &'a mut dyn SeekRead) -> io::Result<Self> {
        let start = inner.stream_position()?;
        Ok(StreamHandle::Seekable { inner, start })
    }

    pub(crate) fn replay(inner: &'a mut (dyn Read + Send)) -> Self {
        StreamHandle::Replay {
            inner,
            log: Vec::new(),
            pos: 0,
        }
    }

    pub(crate) fn forward_only(inner: &'a mut (dyn Read + Send)) -> Self {
        StreamHandle::ForwardOnly {
            inner,
            consumed: false,
        }
    }

    fn restart(&mut self) -> io::Result<()> {
        match self {
            StreamHandle::Seekable { inner, start } => {
                inner.seek(SeekFrom::Start(*start))?;
                Ok(())
            }
            StreamHandle::Replay { pos, .. } => {
                *pos = 0;
                Ok(())
            }
            StreamHandle::ForwardOnly { consumed, .. } => {
                if *consumed {
                    Err(io::Error::new(
                        io::ErrorKind::Unsupported,
                        "forward-only stream has already been read past its start",
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }
}

impl Read for StreamHandle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            StreamHandle::Seekable { inner, .. } => inner.read(buf),
            StreamHandle::Replay { inner, log, pos } => {
                if *pos < log.len() {
                    let n = buf.len().min(log.len() - *pos);
                    buf[..n].copy_from_slice(&log[*pos..*pos + n]);
                    *pos += n;
                    return Ok(n);
                }
                let n = inner.read(buf)?;
                log.extend_from_slice(&buf[..n]);
                *pos += n;
                Ok(n)
            }
            StreamHandle::ForwardOnly { inner, consumed } => {
                let n = inner.read(buf)?;
                if n > 0 {
                    *consumed = true;
                }
                Ok(n)
            }
        }
    }
}

impl Seek for StreamHandle<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match pos {
            SeekFrom::Start(0) => self.restart().map(|_| 0),
            _ => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "line sources only seek back to their start",
            )),
        }
    }
}

impl fmt::Debug for StreamHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamHandle::Seekable { start, .. } => f
                .debug_struct("Seekable")
                .field("start", start)
                .finish_non_exhaustive(),
            StreamHandle::Replay { log, pos, .. } => f
                .debug_struct("Replay")
                .field("retained", &log.len())
                .field("pos", pos)
                .finish_non_exhaustive(),
            StreamHandle::ForwardOnly { consumed, .. } => f
                .debug_struct("ForwardOnly")
                .field("consumed", consumed)
                .finish_non_exhaustive(),
        }
    }
}
