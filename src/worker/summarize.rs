use tracing::{debug, info};
use uuid::Uuid;

use crate::ai::{SummarizationModel, build_model};
use crate::core::config::AppConfig;
use crate::core::models::{LengthBounds, MAX_INPUT_CHARS};
use crate::errors::SummarizerError;
use crate::utils::cleanup::{clean_summary, truncate_chars};

/// Turns long texts (up to about 4000 characters) into tweet-sized summaries.
///
/// Owns the model handle for the lifetime of the process. Texts are
/// summarized one at a time, in order.
pub struct Summarizer {
    model: Box<dyn SummarizationModel>,
    bounds: LengthBounds,
}

impl Summarizer {
    pub fn new(model: Box<dyn SummarizationModel>) -> Self {
        Self {
            model,
            bounds: LengthBounds::TWEET,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the configured model cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizerError> {
        let model = build_model(config)?;
        info!("Summarizer initialized with {:?} backend", config.backend);
        Ok(Self::new(model))
    }

    #[must_use]
    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// Decodes a JSON array of strings and returns the JSON array of their summaries.
    ///
    /// # Errors
    ///
    /// Fails as a whole if the payload is not an array of strings or if any
    /// single text cannot be summarized; partial results are discarded.
    pub async fn summarize_json(&self, payload: &str) -> Result<String, SummarizerError> {
        let texts: Vec<String> = serde_json::from_str(payload)?;
        let summaries = self.summarize_batch(&texts).await?;
        serde_json::to_string(&summaries).map_err(|e| SummarizerError::EncodeError(e.to_string()))
    }

    /// # Errors
    ///
    /// Returns the first per-text failure.
    pub async fn summarize_batch(&self, texts: &[String]) -> Result<Vec<String>, SummarizerError> {
        let correlation_id = Uuid::new_v4();
        info!("Batch {correlation_id}: summarizing {} texts", texts.len());

        let mut summaries = Vec::with_capacity(texts.len());
        for (index, text) in texts.iter().enumerate() {
            debug!(
                "Batch {correlation_id}: summarizing text {} of {}",
                index + 1,
                texts.len()
            );
            summaries.push(self.summarize_one(text).await?);
        }

        info!("Batch {correlation_id}: complete");
        Ok(summaries)
    }

    /// # Errors
    ///
    /// Returns an error if the model fails, returns no candidates, or the
    /// cleaned summary is empty.
    pub async fn summarize_one(&self, text: &str) -> Result<String, SummarizerError> {
        let input = truncate_chars(text, MAX_INPUT_CHARS);
        if input.len() < text.len() {
            debug!(
                "Truncated input from {} to {} chars",
                text.chars().count(),
                MAX_INPUT_CHARS
            );
        }

        let candidates = self.model.summarize(input, self.bounds).await?;
        let best = candidates.into_iter().next().ok_or_else(|| {
            SummarizerError::ModelError("model returned no summary candidates".to_string())
        })?;

        clean_summary(&best.summary_text).ok_or(SummarizerError::EmptySummary)
    }
}
