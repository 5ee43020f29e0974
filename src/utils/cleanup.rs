//! Post-processing for generated summaries.
//!
//! Abstractive models tend to emit a few recurring artifacts: stray
//! whitespace around the text, a space before sentence-ending periods
//! ("word ."), and a closing quote with no period in front of it.

/// Returns at most the first `max_chars` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Joins every " ." into "." until none remain.
#[must_use]
pub fn join_detached_periods(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains(" .") {
        out = out.replace(" .", ".");
    }
    out
}

/// Inserts a period before a trailing `"` unless one is already there.
#[must_use]
pub fn punctuate_closing_quote(text: &str) -> String {
    let Some(body) = text.strip_suffix('"') else {
        return text.to_string();
    };
    if body.ends_with('.') {
        return text.to_string();
    }
    format!("{body}.\"")
}

/// Applies all fix-ups in order. Returns `None` when nothing is left after trimming.
#[must_use]
pub fn clean_summary(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let joined = join_detached_periods(trimmed);
    Some(punctuate_closing_quote(&joined))
}
