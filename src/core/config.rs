use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use tracing_subscriber::filter::LevelFilter;
use url::Url;

use crate::errors::SummarizerError;

pub const DEFAULT_LOG_FILE: &str = "combined.log";
pub const DOTENV_FILE: &str = ".env";
pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/sshleifer/distilbart-cnn-12-6";

/// Which model implementation backs the summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelBackend {
    Http,
    Lead,
}

impl FromStr for ModelBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(ModelBackend::Http),
            "lead" => Ok(ModelBackend::Lead),
            other => Err(format!("unknown backend '{other}' (expected 'http' or 'lead')")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `NODE_ENV=production`; disables all logging.
    pub production: bool,
    pub log_file: PathBuf,
    /// Level applied to every target outside this crate.
    pub model_log_verbosity: LevelFilter,
    pub backend: ModelBackend,
    pub model_url: Url,
    pub api_token: Option<String>,
    pub http_timeout: Option<Duration>,
}

impl AppConfig {
    /// Loads `.env` from the working directory, if there is one.
    ///
    /// Parent directories are not searched. Must run before
    /// [`AppConfig::from_env`] so file values are visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_dotenv() -> Result<bool, SummarizerError> {
        Self::load_dotenv_from(Path::new(DOTENV_FILE))
    }

    /// Loads exactly `path` into the environment. `Ok(false)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_dotenv_from(path: &Path) -> Result<bool, SummarizerError> {
        match dotenvy::from_path(path) {
            Ok(()) => Ok(true),
            Err(e) if e.not_found() => Ok(false),
            Err(e) => Err(SummarizerError::ConfigError(format!(
                "{}: {e}",
                path.display()
            ))),
        }
    }

    pub fn from_env() -> Result<Self, SummarizerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let production = lookup("NODE_ENV").is_some_and(|v| v == "production");

        let log_file = lookup("SUMMARIZER_LOG_FILE")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);

        let model_log_verbosity = match lookup("MODEL_LOG_VERBOSITY") {
            Some(raw) => parse_verbosity(&raw)
                .map_err(|e| SummarizerError::ConfigError(format!("MODEL_LOG_VERBOSITY: {e}")))?,
            None => LevelFilter::ERROR,
        };

        let backend = match lookup("SUMMARIZER_BACKEND") {
            Some(raw) => raw
                .parse::<ModelBackend>()
                .map_err(|e| SummarizerError::ConfigError(format!("SUMMARIZER_BACKEND: {e}")))?,
            None => ModelBackend::Http,
        };

        let raw_url = lookup("SUMMARIZER_MODEL_URL").unwrap_or_else(|| DEFAULT_MODEL_URL.to_string());
        let model_url = Url::parse(raw_url.trim())
            .map_err(|e| SummarizerError::ConfigError(format!("SUMMARIZER_MODEL_URL: {e}")))?;

        let api_token = lookup("HF_API_TOKEN").filter(|v| !v.trim().is_empty());

        let http_timeout = match lookup("SUMMARIZER_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    SummarizerError::ConfigError(format!("SUMMARIZER_HTTP_TIMEOUT_SECS: {e}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            production,
            log_file,
            model_log_verbosity,
            backend,
            model_url,
            api_token,
            http_timeout,
        })
    }
}

fn parse_verbosity(raw: &str) -> Result<LevelFilter, String> {
    let normalized = match raw.trim().to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "critical" => "error".to_string(),
        other => other.to_string(),
    };
    LevelFilter::from_str(&normalized).map_err(|_| format!("unknown level '{raw}'"))
}
