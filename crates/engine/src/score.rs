//! Goal-relatedness scoring.

use std::collections::HashSet;

/// Fraction of the goal's distinct whitespace-separated tokens that also
/// appear in the sentence, in `[0, 1]`. Unweighted bag-of-words overlap:
/// no stemming, no stop-word handling, no length normalization. An empty
/// goal scores `0.0`.
pub fn relevance_score(sentence: &str, goal: &str) -> f32 {
    let goal_lower = goal.to_lowercase();
    let goal_tokens: HashSet<&str> = goal_lower.split_whitespace().collect();
    if goal_tokens.is_empty() {
        return 0.0;
    }

    let sentence_lower = sentence.to_lowercase();
    let sentence_tokens: HashSet<&str> = sentence_lower.split_whitespace().collect();

    let overlap = goal_tokens.intersection(&sentence_tokens).count();
    overlap as f32 / goal_tokens.len() as f32
}
