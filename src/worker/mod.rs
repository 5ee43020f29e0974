//! Batch summarization and the stdio handler

pub mod handler;
pub mod summarize;

// Re-export the main types for convenience
pub use handler::run;
pub use summarize::Summarizer;
