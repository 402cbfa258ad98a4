mod error;
pub mod summary;

pub use error::AnalyzeError;
pub use summary::{summarize, QueryCues, EMPTY_LIST_MESSAGE};

use crate::scoring::ScoredPairing;

pub const FALLBACK_MESSAGE: &str = "Sorry, I couldn't analyze the schedule due to an internal error. Try again or ask a simpler question.";

/// Answer a free-text question about a ranked pairing list.
///
/// Always resolves with text the caller can show verbatim: internal failures
/// are logged and replaced by [`FALLBACK_MESSAGE`]. The work itself is
/// synchronous; the async signature keeps callers ready for analyzers that
/// do have to wait on something.
pub async fn analyze_schedule(pairings: &[ScoredPairing], query: &str) -> String {
    match summarize(pairings, query) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "schedule analysis failed");
            FALLBACK_MESSAGE.to_string()
        }
    }
}
