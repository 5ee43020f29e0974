use serde::{Deserialize, Serialize};

/// Maximum number of characters of an input text handed to the model.
pub const MAX_INPUT_CHARS: usize = 3999;

/// Length bounds for a generated summary, in model-defined units (tokens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub min_length: usize,
    pub max_length: usize,
}

impl LengthBounds {
    /// Roughly the size of a tweet.
    pub const TWEET: LengthBounds = LengthBounds {
        min_length: 20,
        max_length: 280,
    };
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::TWEET
    }
}

/// One ranked candidate returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCandidate {
    pub summary_text: String,
}

impl SummaryCandidate {
    pub fn new(summary_text: impl Into<String>) -> Self {
        Self {
            summary_text: summary_text.into(),
        }
    }
}
