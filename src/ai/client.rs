//! HTTP model client
//!
//! Talks to a model-serving endpoint that speaks the Hugging Face inference
//! protocol for summarization: the input text plus generation length bounds
//! go in, a ranked list of `{"summary_text": ...}` objects comes out.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use super::SummarizationModel;
use crate::core::config::AppConfig;
use crate::core::models::{LengthBounds, SummaryCandidate};
use crate::errors::SummarizerError;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: LengthBounds,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Ranked(Vec<SummaryCandidate>),
    Single(SummaryCandidate),
    Failure { error: String },
}

/// Summarization model served over HTTP.
pub struct HttpModel {
    client: Client,
    endpoint: Url,
    api_token: Option<String>,
}

impl HttpModel {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        endpoint: Url,
        api_token: Option<String>,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self, SummarizerError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SummarizerError::HttpError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            api_token,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizerError> {
        Self::new(
            config.model_url.clone(),
            config.api_token.clone(),
            config.http_timeout,
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SummarizationModel for HttpModel {
    async fn summarize(
        &self,
        text: &str,
        bounds: LengthBounds,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError> {
        let request_body = InferenceRequest {
            inputs: text,
            parameters: bounds,
        };

        #[cfg(feature = "debug-logs")]
        debug!("Model request payload: {:?}", request_body);

        info!(
            "Requesting summary of {} chars from {}",
            text.chars().count(),
            self.endpoint
        );

        let mut request = self.client.post(self.endpoint.clone()).json(&request_body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SummarizerError::HttpError(format!("Model request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SummarizerError::HttpError(format!("Failed to read model response: {e}")))?;

        #[cfg(feature = "debug-logs")]
        debug!("Model response body: {}", body);

        if !status.is_success() {
            let reason = match serde_json::from_str::<InferenceResponse>(&body) {
                Ok(InferenceResponse::Failure { error }) => error,
                _ => body,
            };
            return Err(SummarizerError::ModelError(format!(
                "Model endpoint returned {status}: {reason}"
            )));
        }

        let parsed: InferenceResponse = serde_json::from_str(&body).map_err(|e| {
            SummarizerError::ModelError(format!("Failed to parse model response: {e}"))
        })?;

        match parsed {
            InferenceResponse::Ranked(candidates) => {
                debug!("Model returned {} candidates", candidates.len());
                Ok(candidates)
            }
            InferenceResponse::Single(candidate) => Ok(vec![candidate]),
            InferenceResponse::Failure { error } => Err(SummarizerError::ModelError(error)),
        }
    }
}
