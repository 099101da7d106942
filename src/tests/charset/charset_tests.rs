use rstest::rstest;

use crate::{Charset, ErrorKind, LineSourceError};

#[rstest]
#[case("utf-8", "UTF-8")]
#[case("UTF8", "UTF-8")]
#[case(" utf-8 ", "UTF-8")]
#[case("latin1", "windows-1252")]
#[case("iso-8859-1", "windows-1252")]
#[case("sjis", "Shift_JIS")]
#[case("gbk", "GBK")]
#[case("koi8-r", "KOI8-R")]
fn labels_resolve_to_canonical_names(#[case] label: &str, #[case] name: &str) {
    assert_eq!(Charset::for_name(label).unwrap().name(), name);
}

#[rstest]
#[case("")]
#[case("klingon-8")]
#[case("utf-16le")]
#[case("utf-16be")]
#[case("iso-2022-jp")]
fn unknown_or_incompatible_labels_are_rejected(#[case] label: &str) {
    let err = Charset::for_name(label).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnsupportedEncoding);
    assert!(matches!(err, LineSourceError::UnsupportedEncoding { ref name } if name == label));
}

#[test]
fn decode_is_strict() {
    let utf8 = Charset::utf8();

    assert_eq!(utf8.decode("héllo".as_bytes()).as_deref(), Some("héllo"));
    assert_eq!(utf8.decode(b"\xC3"), None);
    assert_eq!(utf8.decode(b"\xFF"), None);
}

#[test]
fn single_byte_charset_decodes_high_bytes() {
    let cp1252 = Charset::for_name("windows-1252").unwrap();

    assert_eq!(cp1252.decode(b"\x80 5").as_deref(), Some("€ 5"));
}

#[test]
fn bom_is_only_recognised_for_utf8() {
    let bom = b"\xEF\xBB\xBFx";

    assert_eq!(Charset::utf8().bom_len(bom), 3);
    assert_eq!(Charset::utf8().bom_len(b"x"), 0);
    assert_eq!(Charset::for_name("windows-1252").unwrap().bom_len(bom), 0);
}

#[test]
fn parses_from_str_and_displays_name() {
    let charset: Charset = "utf8".parse().unwrap();

    assert_eq!(charset, Charset::default());
    assert!(charset.is_utf8());
    assert_eq!(charset.to_string(), "UTF-8");
}
