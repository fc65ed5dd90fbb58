//! Outcome extraction: decisions, action items, and open questions stated
//! explicitly in text. Recognition is by surface pattern only, never
//! semantic inference.

use crate::patterns::{library, Category};
use std::collections::HashSet;

/// Minimum trimmed length for an extracted question; filters stray `?`
/// fragments.
const MIN_QUESTION_LEN: usize = 5;

/// Deduplicated outcome lists, each in first-match order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeSet {
    pub decisions: Vec<String>,
    pub action_items: Vec<String>,
    pub open_questions: Vec<String>,
}

/// Extract explicit outcomes from `text`. Empty input returns three empty
/// lists; this never fails.
pub fn extract_outcomes(text: &str) -> OutcomeSet {
    if text.is_empty() {
        return OutcomeSet::default();
    }

    let outcomes = OutcomeSet {
        decisions: collect_matches(text, Category::Decision),
        action_items: collect_matches(text, Category::ActionItem),
        open_questions: collect_questions(text),
    };

    log::debug!(
        "extracted {} decisions, {} action items, {} open questions",
        outcomes.decisions.len(),
        outcomes.action_items.len(),
        outcomes.open_questions.len()
    );

    outcomes
}

/// Union of all rule matches for one category, trimmed, deduplicated by
/// exact string with the first occurrence keeping its position.
fn collect_matches(text: &str, category: Category) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for regex in library().rules(category) {
        for m in regex.find_iter(text) {
            let matched = m.as_str().trim();
            if !matched.is_empty() && seen.insert(matched.to_string()) {
                out.push(matched.to_string());
            }
        }
    }

    out
}

/// Questions get an extra normalization pass: leading bullet glyphs are
/// stripped and very short matches are dropped.
fn collect_questions(text: &str) -> Vec<String> {
    let lib = library();
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for regex in lib.rules(Category::Question) {
        for m in regex.find_iter(text) {
            let question = m.as_str().trim();
            if question.chars().count() <= MIN_QUESTION_LEN {
                continue;
            }
            let question = lib.strip_bullet(question);
            if !question.is_empty() && seen.insert(question.to_string()) {
                out.push(question.to_string());
            }
        }
    }

    out
}
