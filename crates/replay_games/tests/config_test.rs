//! Loading configuration files from disk.

use replay_games::AppConfig;
use std::io::Write;
use std::path::Path;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[ui]\nascending = false\n\n[log]\nfile = \"/tmp/replay.log\"")
        .expect("write config");

    let config = AppConfig::load(Some(file.path())).expect("config loads");
    assert!(!*config.ui().ascending());
    assert_eq!(config.log().file(), Path::new("/tmp/replay.log"));
    assert_eq!(*config.http().port(), 3000);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).expect_err("missing file");
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_no_path_uses_defaults() {
    assert_eq!(AppConfig::load(None).expect("defaults"), AppConfig::default());
}
