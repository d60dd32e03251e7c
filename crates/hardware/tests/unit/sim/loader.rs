//! Image loader tests.

use std::io::Write;

use mipsim_core::common::SimError;
use mipsim_core::sim::loader::{load_binary_file, load_hex_file, parse_binary, parse_hex};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

#[test]
fn hex_accepts_comments_prefixes_and_separators() {
    let text = "\
// program header
0x2001_0005   # addi $1, $0, 5
20020007

00221820 00000000
";
    assert_eq!(
        parse_hex(text).unwrap(),
        vec![0x2001_0005, 0x2002_0007, 0x0022_1820, 0]
    );
}

#[test]
fn address_directive_fills_gaps_with_idle() {
    let words = parse_hex("@2\n1\n@0\n2\n").unwrap();
    assert_eq!(words, vec![2, 0, 1]);
}

#[test]
fn bad_token_reports_its_line() {
    let err = parse_hex("00000000\nnot-hex\n").unwrap_err();
    match err {
        SimError::ImageParse { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "not-hex");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn oversized_word_is_rejected() {
    assert!(matches!(
        parse_hex("1_0000_0000"),
        Err(SimError::ImageParse { line: 1, .. })
    ));
}

#[rstest]
#[case("+ff")]
#[case("0x+5")]
#[case("-1")]
#[case("@+2")]
fn signed_tokens_are_rejected(#[case] token: &str) {
    assert!(matches!(
        parse_hex(token),
        Err(SimError::ImageParse { line: 1, .. })
    ));
}

#[test]
fn binary_is_little_endian_and_zero_padded() {
    let words = parse_binary(&[0x05, 0x00, 0x01, 0x20, 0xAA]);
    assert_eq!(words, vec![0x2001_0005, 0x0000_00AA]);
}

#[test]
fn loads_files_from_disk() {
    let mut hex = NamedTempFile::new().unwrap();
    writeln!(hex, "20010005").unwrap();
    writeln!(hex, "20020007").unwrap();
    assert_eq!(
        load_hex_file(hex.path()).unwrap(),
        vec![0x2001_0005, 0x2002_0007]
    );

    let mut bin = NamedTempFile::new().unwrap();
    bin.write_all(&0x0022_1820u32.to_le_bytes()).unwrap();
    assert_eq!(load_binary_file(bin.path()).unwrap(), vec![0x0022_1820]);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.hex");
    let err = load_hex_file(&path).unwrap_err();
    assert!(matches!(err, SimError::Io { .. }));
    assert!(err.to_string().contains("absent.hex"));
}
