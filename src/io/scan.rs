//! Byte-level line scanning shared by file and stream origins.
//!
//! A line ends at `\n`; a `\r` directly before it is dropped too. Bytes
//! after the last `\n` form a final line when there are any.

use std::io::{self, BufRead};

/// Read the next line into `buf` without its terminator.
///
/// Returns `false` when the reader was already at end-of-input.
pub(crate) fn read_line_bytes<R: BufRead + ?Sized>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}

/// Advance past one line without copying it anywhere.
///
/// Returns `false` when the reader was already at end-of-input.
pub(crate) fn skip_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<bool> {
    let mut seen = false;
    loop {
        let (found, used) = {
            let available = match reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(seen);
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => (true, i + 1),
                None => (false, available.len()),
            }
        };
        reader.consume(used);
        seen = true;
        if found {
            return Ok(true);
        }
    }
}
