use std::fs;

use aws_prof::error::AppError;
use aws_prof::profile::color::DEFAULT_COLOR_SETTINGS;
use aws_prof::profile::{ColorRule, ColorRuleSet, DEFAULT_COLOR, FileColorStore};

#[test]
fn creates_default_file_when_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("color-setting.ini");
    let store = FileColorStore::new(&path);

    let rules = ColorRuleSet::load(&store).expect("load should succeed");

    assert_eq!(
        rules.rules(),
        [
            ColorRule::new("admin", "6644FF"),
            ColorRule::new("readonly", "22CCAA"),
        ]
    );
    assert_eq!(
        fs::read_to_string(&path).expect("default file should exist"),
        DEFAULT_COLOR_SETTINGS
    );
}

#[test]
fn reads_custom_file_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("color-setting.ini");
    fs::write(
        &path,
        "prod FF0000\ndev 00FF00\nstaging 0000FF\nadmin 6644FF\nreadonly 22CCAA\n",
    )
    .expect("write settings");

    let rules = ColorRuleSet::load(&FileColorStore::new(&path)).expect("load should succeed");

    assert_eq!(rules.len(), 5);
    assert_eq!(rules.resolve("prod-admin"), "6644FF");
    assert_eq!(rules.resolve("dev-readonly"), "22CCAA");
    assert_eq!(rules.resolve("staging-only"), "0000FF");
    assert_eq!(rules.resolve("unknown"), DEFAULT_COLOR);
}

#[test]
fn existing_file_is_not_rewritten() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("color-setting.ini");
    let original = "# only comments\n\n";
    fs::write(&path, original).expect("write settings");

    let rules = ColorRuleSet::load(&FileColorStore::new(&path)).expect("load should succeed");

    assert!(rules.is_empty());
    assert_eq!(rules.resolve("prod-admin"), DEFAULT_COLOR);
    assert_eq!(fs::read_to_string(&path).expect("read back"), original);
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("conf").join("colors.ini");

    ColorRuleSet::load(&FileColorStore::new(&path)).expect("load should succeed");
    assert!(path.exists());
}

#[test]
fn unreadable_path_is_a_file_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = ColorRuleSet::load(&FileColorStore::new(dir.path()));

    match result {
        Err(err @ AppError::File { action: "open", .. }) => {
            assert!(err.to_string().starts_with("failed to open "));
        }
        other => panic!("expected file error, got {other:?}"),
    }
}

#[test]
fn non_utf8_comment_line_is_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("color-setting.ini");
    fs::write(&path, b"# caf\xe9 colors\nadmin 6644FF\n").expect("write settings");

    let rules = ColorRuleSet::load(&FileColorStore::new(&path)).expect("load should succeed");

    assert_eq!(rules.rules(), [ColorRule::new("admin", "6644FF")]);
}

#[test]
fn non_utf8_bytes_only_affect_their_own_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("color-setting.ini");
    fs::write(&path, b"prod\xff\nstaging 0000FF\n").expect("write settings");

    let rules = ColorRuleSet::load(&FileColorStore::new(&path)).expect("load should succeed");

    assert_eq!(rules.rules(), [ColorRule::new("staging", "0000FF")]);
}
