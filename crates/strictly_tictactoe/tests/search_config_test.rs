//! Tests for loading search configuration from disk.

use std::io::Write;
use strictly_tictactoe::{Action, Board, SearchConfig, Searcher};

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "pruning = false").unwrap();
    writeln!(file, "early_exit = false").unwrap();

    let config = SearchConfig::from_file(file.path()).unwrap();
    assert_eq!(config, SearchConfig::exhaustive());
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = SearchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_loaded_config_drives_the_search() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "pruning = false").unwrap();

    let config = SearchConfig::from_file(file.path()).unwrap();
    let mut searcher = Searcher::new(config);
    let board: Board = "OO. / X.. / ..X".parse().unwrap();

    assert_eq!(searcher.best_move(&board), Ok(Some(Action::new(0, 2))));
    assert_eq!(*searcher.stats().cutoffs(), 0);
}

#[test]
fn test_config_serializes_to_json() {
    let json = serde_json::to_string(&SearchConfig::default()).unwrap();
    assert_eq!(json, r#"{"pruning":true,"early_exit":true}"#);
}
