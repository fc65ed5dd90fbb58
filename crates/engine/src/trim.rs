//! Goal-directed context trimming: keep the few sentences most related to
//! a goal, drop everything else.

use crate::error::{EngineError, Result};
use crate::filler::is_filler;
use crate::score::relevance_score;
use crate::segment::sentences;
use std::cmp::Ordering;

/// One retained sentence with its relevance score and explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    pub text: String,
    pub score: f32,
    pub reason: String,
}

pub const DEFAULT_MAX_CHUNKS: f64 = 5.0;

/// Reduce `text` to at most `max_chunks` sentences relevant to `goal`,
/// highest score first; ties keep original text order.
///
/// Empty `text` or `goal` yields an empty result. `max_chunks` is truncated
/// to an integer; values at or below zero yield an empty result, and there
/// is no upper bound. A non-finite `max_chunks` is the one input that
/// errors: parameter mistakes fail loudly rather than defaulting.
pub fn trim_context(text: &str, goal: &str, max_chunks: f64) -> Result<Vec<ScoredChunk>> {
    if !max_chunks.is_finite() {
        return Err(EngineError::InvalidMaxChunks(max_chunks.to_string()));
    }
    let max_chunks = max_chunks.trunc() as i64;

    if text.is_empty() || goal.is_empty() || max_chunks <= 0 {
        return Ok(Vec::new());
    }

    let mut scored: Vec<(&str, f32)> = sentences(text)
        .filter(|sentence| !is_filler(sentence))
        .filter_map(|sentence| {
            let score = relevance_score(sentence, goal);
            // Strictly positive overlap required; a sentence sharing no
            // goal tokens is never selected.
            (score > 0.0).then_some((sentence, score))
        })
        .collect();

    // Vec::sort_by is stable, so equal scores retain text order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(max_chunks as usize);

    log::debug!("trimmed to {} chunks for goal {goal:?}", scored.len());

    Ok(scored
        .into_iter()
        .map(|(sentence, score)| ScoredChunk {
            text: sentence.to_string(),
            score,
            reason: format!("High relevance to goal (score: {score:.2})"),
        })
        .collect())
}
