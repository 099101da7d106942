use std::fs;

use crate::{ConfigError, ErrorKind, SourceConfig};

#[test]
fn open_applies_initial_skip_but_rewind_goes_to_the_top() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.tsv");
    fs::write(&path, "label\ttext\npos\tgreat\nneg\tawful\n").unwrap();

    let mut source = SourceConfig::new(&path).with_skip(1).open().unwrap();
    assert_eq!(source.read_line().unwrap().as_deref(), Some("pos\tgreat"));

    source.rewind().unwrap();
    assert_eq!(source.read_line().unwrap().as_deref(), Some("label\ttext"));
}

#[test]
fn builder_carries_encoding_and_capacity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin.txt");
    fs::write(&path, b"na\xEFve\n").unwrap();

    let config = SourceConfig::new(&path)
        .with_encoding("latin1")
        .with_buffer_capacity(2);
    let mut source = config.open().unwrap();

    assert_eq!(source.charset().name(), "windows-1252");
    assert_eq!(source.read_line().unwrap().as_deref(), Some("naïve"));
}

#[test]
fn open_reports_bad_encoding() {
    let config = SourceConfig::new("whatever.txt").with_encoding("nope");

    let err = config.open().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnsupportedEncoding);
}

#[test]
fn from_file_rejects_unknown_extension() {
    let err = SourceConfig::from_file("source.toml").unwrap_err();

    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[cfg(feature = "json")]
#[test]
fn json_config_fills_defaults() {
    let config = SourceConfig::from_json_str(r#"{ "path": "corpus.txt" }"#).unwrap();

    assert_eq!(config, SourceConfig::new("corpus.txt"));
    assert_eq!(config.encoding, "utf-8");
}

#[cfg(feature = "json")]
#[test]
fn json_config_file_is_loaded_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("source.json");
    fs::write(&path, r#"{ "path": "c.txt", "encoding": "gbk", "skip": 2 }"#).unwrap();

    let config = SourceConfig::from_file(&path).unwrap();

    assert_eq!(config.encoding, "gbk");
    assert_eq!(config.skip, 2);
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_config_parses_all_fields() {
    let yaml = "path: corpus/train.txt\nencoding: windows-1252\nbuffer_capacity: 4096\nskip: 1\n";

    let config = SourceConfig::from_yaml_str(yaml).unwrap();

    assert_eq!(
        config,
        SourceConfig::new("corpus/train.txt")
            .with_encoding("windows-1252")
            .with_buffer_capacity(4096)
            .with_skip(1)
    );
}
