//! Unit tests for error construction and rendering.

use rstest::rstest;

use super::FlagError;

#[rstest]
#[case::duplicate(FlagError::duplicate("port"), "flag '--port' is already registered")]
#[case::short(
    FlagError::short_conflict('p', "path", "port"),
    "short flag '-p' for '--path' is already used by '--port'"
)]
#[case::invalid(
    FlagError::invalid_name("-x", "must not start with '-'"),
    "invalid flag name '-x': must not start with '-'"
)]
#[case::contribution(
    FlagError::contribution("boom"),
    "flag contribution failed: boom"
)]
fn renders_messages(#[case] err: FlagError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[rstest]
fn only_duplicates_report_as_duplicate() {
    assert!(FlagError::duplicate("a").is_duplicate());
    assert!(!FlagError::short_conflict('a', "a", "b").is_duplicate());
    assert!(!FlagError::contribution("a").is_duplicate());
}
