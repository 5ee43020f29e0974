use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use super::summarize::Summarizer;
use crate::errors::SummarizerError;

/// Reads one line of JSON from `input`, summarizes it, and writes the JSON
/// result to `output` without a trailing newline.
///
/// Nothing is written when summarization fails.
///
/// # Errors
///
/// Returns an error if reading, summarizing or writing fails.
pub async fn run<R, W>(
    summarizer: &Summarizer,
    input: &mut R,
    output: &mut W,
) -> Result<(), SummarizerError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    let read = input.read_line(&mut line).await?;
    debug!("Read {} bytes from input", read);

    let result = summarizer.summarize_json(&line).await?;

    output.write_all(result.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
