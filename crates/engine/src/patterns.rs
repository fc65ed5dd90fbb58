//! Fixed pattern tables for outcome extraction and filler detection.
//!
//! Rules are compiled once at first use and shared read-only across all
//! requests. Matching is surface-level: case-insensitive, multi-line, with
//! `.`/`!`/`?`/newline as each rule's right edge. Nothing here infers
//! meaning from context.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Outcome category a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Decision,
    ActionItem,
    Question,
    Filler,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Decision => "decision",
            Category::ActionItem => "action_item",
            Category::Question => "question",
            Category::Filler => "filler",
        }
    }
}

/// One row of the pattern table.
pub struct PatternRule {
    pub category: Category,
    pub regex: Regex,
}

/// Ordered, immutable rule table. Within a category, rule order is match
/// order: earlier rules claim the first position for a string matched by
/// more than one rule.
pub struct PatternLibrary {
    rules: Vec<PatternRule>,
    bullet_prefix: Regex,
}

static LIBRARY: Lazy<PatternLibrary> = Lazy::new(PatternLibrary::compile);

/// Process-wide pattern library, compiled on first access.
pub fn library() -> &'static PatternLibrary {
    &LIBRARY
}

fn rule(category: Category, pattern: &str) -> PatternRule {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .expect("pattern table entry must compile");
    PatternRule { category, regex }
}

// Filler rows match against the lowercased sentence and must anchor at its
// start only, so `^` stays single-line here: an embedded newline inside one
// sentence must not create a new anchor point.
fn filler_rule(pattern: &str) -> PatternRule {
    let regex = Regex::new(pattern).expect("pattern table entry must compile");
    PatternRule {
        category: Category::Filler,
        regex,
    }
}

impl PatternLibrary {
    fn compile() -> Self {
        let rules = vec![
            // Decisions: actor + decision verb, explicit label, or a
            // committed "will/shall <adopt-verb>" phrase.
            rule(
                Category::Decision,
                r"(?:we|they|the team|i)?\s*(?:decided|chose|selected|agreed|concluded)\s+(?:to\s+)?[^.!?\n]+[.!?]",
            ),
            rule(Category::Decision, r"(?:decision|choice):\s*[^.!?\n]+[.!?]"),
            rule(
                Category::Decision,
                r"(?:will|shall)\s+(?:go with|use|implement|adopt)\s+[^.!?\n]+[.!?]",
            ),
            // Action items: labels, modals, bracketed tags, list items
            // carrying a modal.
            rule(
                Category::ActionItem,
                r"(?:TODO|Action|Task|Action item):\s*[^.\n]+\.?",
            ),
            rule(
                Category::ActionItem,
                r"(?:will|shall|should|must|need to)\s+[^.!?\n]+[.!?]",
            ),
            rule(Category::ActionItem, r"\[(?:TODO|ACTION)\]\s*[^.\n]+\.?"),
            rule(
                Category::ActionItem,
                r"^\s*[-*]\s*[^.\n]+(?:will|should|needs? to|must)[^.\n]+\.?",
            ),
            // Questions: any run of non-terminators ending in '?'.
            rule(Category::Question, r"[^.!?\n]*\?"),
            // Filler lead-ins, anchored at sentence start.
            filler_rule(r"^(?:hi|hello|hey|dear|greetings)"),
            filler_rule(r"^(?:thanks|thank you|cheers)"),
            filler_rule(r"^(?:best|regards|sincerely)"),
            filler_rule(r"^(?:hope this helps|let me know)"),
            filler_rule(r"^(?:i think|i feel|i believe|in my opinion)"),
        ];

        let bullet_prefix = RegexBuilder::new(r"^\s*[-*\u{2022}]\s*")
            .build()
            .expect("bullet prefix pattern must compile");

        Self {
            rules,
            bullet_prefix,
        }
    }

    /// Rules for one category, in table order.
    pub fn rules(&self, category: Category) -> impl Iterator<Item = &Regex> {
        self.rules
            .iter()
            .filter(move |r| r.category == category)
            .map(|r| &r.regex)
    }

    /// Strip a single leading bullet/dash/asterisk glyph and the whitespace
    /// around it.
    pub fn strip_bullet<'a>(&self, text: &'a str) -> &'a str {
        match self.bullet_prefix.find(text) {
            Some(m) => &text[m.end()..],
            None => text,
        }
    }
}
