use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::question::Question;
use crate::score::Answer;

/// Every state change of a session produces an Event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    RoundStarted {
        round: u64,
        question: Question,
        at: DateTime<Utc>,
    },
    AnswerRecorded {
        round: u64,
        /// The line exactly as typed, without the line terminator.
        raw: String,
        answer: Answer,
        correct: bool,
        at: DateTime<Utc>,
    },
    RoundTimedOut {
        round: u64,
        at: DateTime<Utc>,
    },
    /// Player quit or input closed. The open round, if any, was discarded.
    SessionEnded {
        completed_rounds: usize,
        discarded_round: Option<u64>,
        at: DateTime<Utc>,
    },
}
