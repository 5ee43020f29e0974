use std::io::Write;
use std::process::{Command, Stdio};

use summarizer::bindings::SummarizerProcess;
use summarizer::errors::SummarizerError;

const BIN: &str = env!("CARGO_BIN_EXE_summarizer");

const ARTICLE: &str = "There's a new ice cream shop opening up at 7th Avenue with a twist . \
    The shop, named \"Political Ice Cream,\" sells ice cream that is politically-themed ! \
    You can theme your ice cream with political toppings, such as \"Blue Wave\" M&Ms . \
    Get yours at 7th Avenue today!";

fn offline_process(dir: &std::path::Path, node_env: &str) -> SummarizerProcess {
    SummarizerProcess::new(BIN)
        .env("SUMMARIZER_BACKEND", "lead")
        .env("NODE_ENV", node_env)
        .current_dir(dir)
}

/// Runs the binary on raw stdin and returns (stdout, success).
fn run_raw(dir: &std::path::Path, node_env: &str, stdin: &str) -> (String, bool) {
    let mut child = Command::new(BIN)
        .env_remove("SUMMARIZER_MODEL_URL")
        .env("SUMMARIZER_BACKEND", "lead")
        .env("NODE_ENV", node_env)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8(output.stdout).unwrap(),
        output.status.success(),
    )
}

#[tokio::test]
async fn test_binary_summarizes_each_text_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let texts = vec![ARTICLE.to_string(), ARTICLE.replace("7th", "9th")];

    let summaries = offline_process(dir.path(), "test")
        .summarize(&texts)
        .await
        .unwrap();

    assert_eq!(summaries.len(), 2);
    assert!(summaries[0].contains("7th Avenue"));
    assert!(summaries[1].contains("9th Avenue"));
    for summary in &summaries {
        assert_eq!(summary, summary.trim());
        assert!(!summary.contains(" ."));
    }

    let log = std::fs::read_to_string(dir.path().join("combined.log")).unwrap();
    assert!(log.contains("[Summarizer] INFO:"));
}

#[test]
fn test_output_has_no_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, success) = run_raw(dir.path(), "test", "[\"One short sentence.\"]\n");
    assert!(success);
    assert_eq!(stdout, r#"["One short sentence."]"#);
}

#[test]
fn test_malformed_input_writes_nothing_and_logs_error() {
    let dir = tempfile::tempdir().unwrap();
    for payload in ["not json\n", "[1,2,3]\n"] {
        let (stdout, success) = run_raw(dir.path(), "test", payload);
        assert!(!success);
        assert!(stdout.is_empty());
    }

    let log = std::fs::read_to_string(dir.path().join("combined.log")).unwrap();
    let errors = log
        .lines()
        .filter(|l| l.contains(" [Summarizer] ERROR: Failed to parse input batch"))
        .count();
    assert_eq!(errors, 2, "log was: {log}");
}

#[test]
fn test_production_mode_leaves_log_empty_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, success) = run_raw(dir.path(), "production", "not json\n");
    assert!(!success);
    assert!(stdout.is_empty());

    let log_path = dir.path().join("combined.log");
    assert!(log_path.exists());
    assert_eq!(std::fs::metadata(log_path).unwrap().len(), 0);
}

#[tokio::test]
async fn test_bindings_report_failed_batch() {
    let dir = tempfile::tempdir().unwrap();
    let process = SummarizerProcess::new(BIN)
        .env("SUMMARIZER_BACKEND", "http")
        .env("SUMMARIZER_MODEL_URL", "http://127.0.0.1:9/summarize")
        .env("NODE_ENV", "production")
        .current_dir(dir.path());

    let err = process
        .summarize(&[ARTICLE.to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, SummarizerError::ProcessError(_)), "{err:?}");
}

#[tokio::test]
async fn test_bindings_skip_spawning_for_empty_batch() {
    let process = SummarizerProcess::new("/nonexistent/summarizer");
    assert!(process.summarize(&[]).await.unwrap().is_empty());
}

#[test]
fn test_dotenv_is_read_from_working_directory_only() {
    let parent = tempfile::tempdir().unwrap();
    let workdir = parent.path().join("job");
    std::fs::create_dir(&workdir).unwrap();
    std::fs::write(parent.path().join(".env"), "SUMMARIZER_MODEL_URL=notaurl\n").unwrap();

    let (stdout, success) = run_raw(&workdir, "test", "[\"One short sentence.\"]\n");
    assert!(success, "a parent directory's .env must not be loaded");
    assert_eq!(stdout, r#"["One short sentence."]"#);

    std::fs::write(workdir.join(".env"), "SUMMARIZER_MODEL_URL=notaurl\n").unwrap();
    let (stdout, success) = run_raw(&workdir, "test", "[\"One short sentence.\"]\n");
    assert!(!success, "the working directory's .env must be loaded");
    assert!(stdout.is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn test_bindings_report_undecodable_output() {
    let process = SummarizerProcess::new("sh")
        .arg("-c")
        .arg("cat > /dev/null; echo '<html>not json</html>'");

    let err = process
        .summarize(&[ARTICLE.to_string()])
        .await
        .unwrap_err();
    match err {
        SummarizerError::ProcessError(msg) => assert!(msg.contains("undecodable output"), "{msg}"),
        other => panic!("Unexpected error type: {other:?}"),
    }
}
