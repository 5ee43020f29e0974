//! Extractive fallback model.
//!
//! Keeps the leading sentences of the input, counting whitespace-separated
//! words as the length unit. Needs no network access, so it serves offline
//! runs and end-to-end tests.

use async_trait::async_trait;

use super::SummarizationModel;
use crate::core::models::{LengthBounds, SummaryCandidate};
use crate::errors::SummarizerError;

#[derive(Debug, Clone, Copy, Default)]
pub struct LeadModel;

/// Splits text after `.`, `!` or `?` (optionally followed by a closing quote)
/// when whitespace follows.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let mut end = idx + c.len_utf8();
        if let Some(&(q_idx, q)) = chars.peek()
            && matches!(q, '"' | '\'' | '\u{201d}')
        {
            end = q_idx + q.len_utf8();
            chars.next();
        }
        if chars.peek().is_none_or(|&(_, next)| next.is_whitespace()) {
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest);
    }
    sentences
}

/// Leading sentences totalling at least `min_length` words where the text
/// allows, never more than `max_length` words.
#[must_use]
pub fn lead_summary(text: &str, bounds: LengthBounds) -> String {
    let mut words: Vec<&str> = Vec::new();

    for sentence in split_sentences(text) {
        let sentence_words: Vec<&str> = sentence.split_whitespace().collect();
        if words.len() + sentence_words.len() > bounds.max_length {
            if words.len() < bounds.min_length {
                let room = bounds.max_length - words.len();
                words.extend(sentence_words.into_iter().take(room));
            }
            break;
        }
        words.extend(sentence_words);
        if words.len() >= bounds.min_length {
            break;
        }
    }

    words.join(" ")
}

#[async_trait]
impl SummarizationModel for LeadModel {
    async fn summarize(
        &self,
        text: &str,
        bounds: LengthBounds,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError> {
        Ok(vec![SummaryCandidate::new(lead_summary(text, bounds))])
    }
}
