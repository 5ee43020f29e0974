//! Bindings for host applications that run the summarizer as a child process.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::SummarizerError;

/// Runs the summarizer program once per batch over stdin/stdout.
#[derive(Debug, Clone)]
pub struct SummarizerProcess {
    program: PathBuf,
    args: Vec<String>,
    envs: HashMap<String, String>,
    current_dir: Option<PathBuf>,
}

impl SummarizerProcess {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: HashMap::new(),
            current_dir: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Summarizes `texts` in a fresh child process.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned, produces no output
    /// (the summarizer writes nothing on failure), writes something that is
    /// not a JSON array of strings, or returns a different number of
    /// summaries than texts given.
    pub async fn summarize(&self, texts: &[String]) -> Result<Vec<String>, SummarizerError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let payload = serde_json::to_string(texts)
            .map_err(|e| SummarizerError::EncodeError(e.to_string()))?;

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .envs(&self.envs)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        info!(
            "Spawning {} to summarize {} texts",
            self.program.display(),
            texts.len()
        );
        let mut child = command.spawn()?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            SummarizerError::ProcessError("child stdin was not captured".to_string())
        })?;
        stdin.write_all(payload.as_bytes()).await?;
        stdin.write_all(b"\n").await?;
        stdin.flush().await?;
        drop(stdin);

        let output = child.wait_with_output().await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("Summarizer exited with {}", output.status);

        let Some(first_line) = stdout.lines().next().filter(|l| !l.trim().is_empty()) else {
            return Err(SummarizerError::ProcessError(format!(
                "no output from summarizer ({})",
                output.status
            )));
        };

        let summaries: Vec<String> = serde_json::from_str(first_line)
            .map_err(|e| SummarizerError::ProcessError(format!("undecodable output: {e}")))?;
        if summaries.len() != texts.len() {
            return Err(SummarizerError::ProcessError(format!(
                "expected {} summaries, got {}",
                texts.len(),
                summaries.len()
            )));
        }
        Ok(summaries)
    }
}
