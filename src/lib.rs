//! Summarizer - turns long news texts into tweet-sized summaries.
//!
//! The `summarizer` binary reads a JSON array of strings from standard input,
//! summarizes each one with a pretrained summarization model, cleans up the
//! generated text, and writes the JSON array of summaries to standard output.
//!
//! # Architecture
//!
//! The crate uses:
//! - a [`ai::SummarizationModel`] trait in front of the model, with an HTTP
//!   inference client and an offline extractive fallback
//! - [`worker::Summarizer`], which owns the model and processes a batch one
//!   text at a time
//! - tracing-subscriber with a custom line format for the `combined.log` file
//! - [`bindings::SummarizerProcess`] for host programs that spawn the binary
//!
//! # Example
//!
//! ```no_run
//! use summarizer::core::config::AppConfig;
//! use summarizer::worker::Summarizer;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     AppConfig::load_dotenv()?;
//!     let config = AppConfig::from_env()?;
//!     summarizer::setup_logging(&config)?;
//!
//!     let summarizer = Summarizer::from_config(&config)?;
//!     let json = summarizer
//!         .summarize_json(r#"["A very long article about the city council..."]"#)
//!         .await?;
//!     println!("{json}");
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod bindings;
pub mod core;
pub mod errors;
pub mod logging;
pub mod utils;
pub mod worker;

pub use logging::setup_logging;
