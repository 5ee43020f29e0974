//! Summarization model backends

pub mod client;
pub mod lead;

use async_trait::async_trait;

use crate::core::config::{AppConfig, ModelBackend};
use crate::core::models::{LengthBounds, SummaryCandidate};
use crate::errors::SummarizerError;

// Re-export main types for convenience
pub use client::HttpModel;
pub use lead::LeadModel;

/// A pretrained summarization model.
///
/// Implementations return candidates ranked best-first; callers use the
/// first one.
#[async_trait]
pub trait SummarizationModel: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        bounds: LengthBounds,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError>;
}

/// Builds the backend selected in `config`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_model(config: &AppConfig) -> Result<Box<dyn SummarizationModel>, SummarizerError> {
    match config.backend {
        ModelBackend::Http => Ok(Box::new(HttpModel::from_config(config)?)),
        ModelBackend::Lead => Ok(Box::new(LeadModel)),
    }
}
