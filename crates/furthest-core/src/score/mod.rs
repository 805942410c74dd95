//! Scoring: answers, the round history and the end-of-run summary.

mod answer;
mod summary;
mod tracker;

pub use answer::Answer;
pub use summary::SessionSummary;
pub use tracker::{RoundRecord, ScoreTracker};
