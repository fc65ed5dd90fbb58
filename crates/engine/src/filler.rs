//! Filler detection for greetings, sign-offs, and hedges.

use crate::patterns::{library, Category};

/// True when the sentence opens with a greeting/closing/hedging lead-in.
/// Anchored at the start only; mid-sentence pleasantries pass through.
pub fn is_filler(sentence: &str) -> bool {
    let lowered = sentence.trim().to_lowercase();
    library()
        .rules(Category::Filler)
        .any(|regex| regex.is_match(&lowered))
}
