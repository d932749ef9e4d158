use super::{export, wrap};
use std::fs;
use tempfile::NamedTempFile;

#[test]
fn test_short_lines_pass_through() {
    let wrapped = wrap("short line\nanother", 40);

    assert_eq!(wrapped, "short line\nanother\n");
}

#[test]
fn test_lines_wrap_at_word_boundaries() {
    let wrapped = wrap("alpha beta gamma delta", 11);

    for line in wrapped.lines() {
        assert!(line.chars().count() <= 11, "overlong line: {line:?}");
    }
    assert_eq!(wrapped, "alpha beta\ngamma delta\n");
}

#[test]
fn test_overlong_words_are_split_hard() {
    let wrapped = wrap("abcdefghij", 4);

    assert_eq!(wrapped, "abcd\nefgh\nij\n");
}

#[test]
fn test_blank_lines_survive_as_paragraph_breaks() {
    let wrapped = wrap("first\n\nsecond", 40);

    assert_eq!(wrapped, "first\n\nsecond\n");
}

#[test]
fn test_zero_width_is_clamped() {
    let wrapped = wrap("ab", 0);

    assert_eq!(wrapped, "a\nb\n");
}

#[test]
fn test_export_writes_wrapped_document_and_returns_its_path() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_path_buf();

    let written = export("one two three four", 9, &path).unwrap();
    assert_eq!(written, path);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "one two\nthree\nfour\n");
}
