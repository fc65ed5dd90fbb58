//! # Text Intel Engine
//!
//! Pattern-based text analysis for agent tooling: extract explicitly stated
//! outcomes (decisions, action items, open questions) and trim text down to
//! the sentences relevant to a goal.
//!
//! The engine is a pure, stateless function of its inputs. The only
//! process-wide state is the immutable pattern library, compiled once on
//! first use and shared read-only across concurrent callers. There is no
//! I/O anywhere in this crate.

mod error;
mod filler;
mod outcomes;
mod patterns;
mod score;
mod segment;
mod trim;

pub use error::{EngineError, Result};
pub use filler::is_filler;
pub use outcomes::{extract_outcomes, OutcomeSet};
pub use patterns::{library, Category, PatternLibrary, PatternRule};
pub use score::relevance_score;
pub use segment::{sentences, Sentences};
pub use trim::{trim_context, ScoredChunk, DEFAULT_MAX_CHUNKS};
