use std::fs;

use summarizer::core::config::AppConfig;
use summarizer::logging::{file_subscriber, open_log_file};

fn config_for(log_file: &std::path::Path, node_env: Option<&str>) -> AppConfig {
    let log_file = log_file.to_string_lossy().to_string();
    let node_env = node_env.map(str::to_string);
    AppConfig::from_lookup(|key| match key {
        "SUMMARIZER_LOG_FILE" => Some(log_file.clone()),
        "NODE_ENV" => node_env.clone(),
        _ => None,
    })
    .unwrap()
}

fn is_formatted(line: &str, level: &str, message: &str) -> bool {
    // 2021-03-04T05:06:07.089Z [Summarizer] LEVEL: message
    let Some((timestamp, rest)) = line.split_once(' ') else {
        return false;
    };
    timestamp.len() == 24
        && timestamp.ends_with('Z')
        && timestamp.as_bytes()[10] == b'T'
        && timestamp.as_bytes()[19] == b'.'
        && rest == format!("[Summarizer] {level}: {message}")
}

#[test]
fn test_log_lines_use_expected_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combined.log");
    let config = config_for(&path, None);

    let subscriber = file_subscriber(&config, open_log_file(&path).unwrap()).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!(target: "summarizer", "loading model");
        tracing::warn!(target: "summarizer", "slow response");
        tracing::error!(target: "summarizer", "invalid type: integer `1`, expected a string");
    });

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3, "unexpected log contents: {contents}");
    assert!(is_formatted(lines[0], "DEBUG", "loading model"), "{}", lines[0]);
    assert!(is_formatted(lines[1], "WARNING", "slow response"), "{}", lines[1]);
    assert!(
        is_formatted(
            lines[2],
            "ERROR",
            "invalid type: integer `1`, expected a string"
        ),
        "{}",
        lines[2]
    );
}

#[test]
fn test_log_file_is_appended() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combined.log");
    fs::write(&path, "earlier line\n").unwrap();
    let config = config_for(&path, None);

    let subscriber = file_subscriber(&config, open_log_file(&path).unwrap()).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: "summarizer", "second run");
    });

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("earlier line\n"));
    assert!(contents.trim_end().ends_with("[Summarizer] INFO: second run"));
}

#[test]
fn test_other_crates_are_held_to_model_verbosity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combined.log");
    let config = config_for(&path, None);

    let subscriber = file_subscriber(&config, open_log_file(&path).unwrap()).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: "hyper::client", "connection pooled");
        tracing::error!(target: "hyper::client", "connection reset");
    });

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("connection pooled"));
    assert!(contents.contains("ERROR: connection reset"));
}

#[test]
fn test_production_mode_disables_logging() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combined.log");
    let config = config_for(&path, Some("production"));

    let file = open_log_file(&path).unwrap();
    assert!(path.exists());
    assert!(file_subscriber(&config, file).is_none());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}
