use std::fs;
use std::io::Cursor;

use crate::{ErrorKind, LineSource, LineSourceError, Stage};

#[test]
fn read_line_yields_lines_then_end_of_input() {
    let mut data = Cursor::new(b"alpha beta\n\ngamma\n".to_vec());
    let mut source = LineSource::from_stream(&mut data, "utf-8").unwrap();

    assert_eq!(source.read_line().unwrap().as_deref(), Some("alpha beta"));
    assert_eq!(source.read_line().unwrap().as_deref(), Some(""));
    assert_eq!(source.read_line().unwrap().as_deref(), Some("gamma"));
    assert_eq!(source.read_line().unwrap(), None);
}

#[test]
fn end_of_input_is_sticky_until_rewind() {
    let mut data = Cursor::new(b"only\n".to_vec());
    let mut source = LineSource::from_stream(&mut data, "utf-8").unwrap();

    assert_eq!(source.read_line().unwrap().as_deref(), Some("only"));
    assert!(!source.is_exhausted());
    assert_eq!(source.read_line().unwrap(), None);
    assert!(source.is_exhausted());

    for _ in 0..3 {
        assert_eq!(source.read_line().unwrap(), None);
        assert_eq!(source.read_line_tokens().unwrap(), None);
        assert_eq!(source.skip_line(4).unwrap(), 0);
    }
}

#[test]
fn last_line_without_terminator_is_returned() {
    let mut data = Cursor::new(b"a\nb".to_vec());
    let mut source = LineSource::from_stream(&mut data, "utf-8").unwrap();

    let lines: Vec<String> = source.lines().collect::<Result<_, _>>().unwrap();

    assert_eq!(lines, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn empty_input_has_no_lines() {
    let mut data = Cursor::new(Vec::new());
    let mut source = LineSource::from_stream(&mut data, "utf-8").unwrap();

    assert_eq!(source.read_line().unwrap(), None);
    assert_eq!(source.line_number(), 0);
}

#[test]
fn crlf_terminators_are_stripped() {
    let mut data = Cursor::new(b"first\r\nsecond\r\n".to_vec());
    let mut source = LineSource::from_stream(&mut data, "utf-8").unwrap();

    assert_eq!(source.read_line().unwrap().as_deref(), Some("first"));
    assert_eq!(source.read_line().unwrap().as_deref(), Some("second"));
    assert_eq!(source.read_line().unwrap(), None);
}

#[test]
fn utf8_bom_is_skipped() {
    let mut data = Cursor::new(b"\xEF\xBB\xBFhead\nbody\n".to_vec());
    let mut source = LineSource::from_stream(&mut data, "utf-8").unwrap();

    assert_eq!(source.read_line().unwrap().as_deref(), Some("head"));
    source.rewind().unwrap();
    assert_eq!(source.read_line_tokens().unwrap(), Some(vec!["head".to_string()]));
}

#[test]
fn legacy_encoding_is_decoded() {
    let mut data = Cursor::new(b"caf\xE9 cr\xE8me\n".to_vec());
    let mut source = LineSource::from_stream(&mut data, "windows-1252").unwrap();

    assert_eq!(source.read_line().unwrap().as_deref(), Some("café crème"));
}

#[test]
fn malformed_line_is_a_decode_failure_not_a_substitution() {
    let mut data = Cursor::new(b"ok\n\xFF\xFEbad\nafter\n".to_vec());
    let mut source = LineSource::from_stream(&mut data, "utf-8").unwrap();

    assert_eq!(source.read_line().unwrap().as_deref(), Some("ok"));

    let err = source.read_line().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
    assert_eq!(err.stage(), Some(Stage::Decode));
    match err {
        LineSourceError::Decode { line, encoding, .. } => {
            assert_eq!(line, 2);
            assert_eq!(encoding, "UTF-8");
        }
        other => panic!("expected decode error, got {other:?}"),
    }

    // The malformed line was consumed; reading continues after it.
    assert_eq!(source.read_line().unwrap().as_deref(), Some("after"));
}

#[test]
fn line_number_counts_reads_and_skips() {
    let mut data = Cursor::new(b"a\nb\nc\nd\n".to_vec());
    let mut source = LineSource::from_stream(&mut data, "utf-8").unwrap();

    source.read_line().unwrap();
    source.skip_line(2).unwrap();
    assert_eq!(source.line_number(), 3);

    source.rewind().unwrap();
    assert_eq!(source.line_number(), 0);
}

#[test]
fn from_path_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "hello world\nbye\n").unwrap();

    let mut source = LineSource::from_path(&path, "utf-8").unwrap();

    assert!(source.origin().owns_handle());
    assert_eq!(source.origin().path(), Some(path.as_path()));
    assert_eq!(source.read_line().unwrap().as_deref(), Some("hello world"));
    assert_eq!(source.read_line().unwrap().as_deref(), Some("bye"));
    assert_eq!(source.read_line().unwrap(), None);
}

#[test]
fn from_path_missing_file_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = LineSource::from_path(&path, "utf-8").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::IoFailure);
    assert_eq!(err.stage(), Some(Stage::Open));
}

#[test]
fn bad_encoding_fails_before_opening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = LineSource::from_path(&path, "klingon-8").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnsupportedEncoding);
}
