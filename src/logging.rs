//! File logging.
//!
//! Every event becomes one line of the form
//! `2026-01-01T12:00:00.000Z [Summarizer] INFO: message`, timestamped in UTC.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

pub const LOGGER_NAME: &str = "Summarizer";

#[must_use]
pub fn level_label(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO",
        Level::WARN => "WARNING",
        Level::ERROR => "ERROR",
    }
}

/// Everything in a log line that precedes the message.
#[must_use]
pub fn line_prefix(timestamp: DateTime<Utc>, level: &Level) -> String {
    format!(
        "{} [{LOGGER_NAME}] {}: ",
        timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        level_label(level)
    )
}

pub struct LogLineFormat;

impl<S, N> FormatEvent<S, N> for LogLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{}", line_prefix(Utc::now(), event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Opens (or creates) the log file for appending.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_log_file(path: &Path) -> Result<File, SummarizerError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SummarizerError::IoError(format!("{}: {e}", path.display())))
}

/// Builds the subscriber that writes to `file`, or `None` in production mode.
///
/// This crate logs at DEBUG; all other targets are held to
/// `config.model_log_verbosity`.
#[must_use]
pub fn file_subscriber(
    config: &AppConfig,
    file: File,
) -> Option<impl Subscriber + Send + Sync + 'static> {
    if config.production {
        return None;
    }

    let filter = EnvFilter::new(format!(
        "{},{}=debug",
        config.model_log_verbosity,
        env!("CARGO_CRATE_NAME")
    ));

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LogLineFormat)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_filter(filter);

    Some(tracing_subscriber::registry().with(file_layer))
}

/// Opens the log file and installs the global subscriber, which also
/// forwards `log` records from dependencies such as reqwest.
///
/// In production mode the file is still created but nothing is ever written.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn setup_logging(config: &AppConfig) -> Result<(), SummarizerError> {
    let file = open_log_file(&config.log_file)?;
    if let Some(subscriber) = file_subscriber(config, file) {
        subscriber
            .try_init()
            .map_err(|e| SummarizerError::LoggingError(e.to_string()))?;
    }
    Ok(())
}
