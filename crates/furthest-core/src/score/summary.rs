use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tracker::{RoundRecord, ScoreTracker};

/// Snapshot of a finished session, for printing or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub questions_asked: usize,
    pub correct_answers: usize,
    pub elapsed_ms: u64,
    pub score: f64,
    pub answer_timeout_secs: u64,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub rounds: Vec<RoundRecord>,
}

impl SessionSummary {
    /// Plain-text end-of-run report followed by the round transcript.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("You quit the game____\n");
        out.push_str(&format!("Questions asked.....: {}\n", self.questions_asked));
        out.push_str(&format!("Correct answers.....: {}\n", self.correct_answers));
        out.push_str(&format!(
            "Total game duration.: {} milliseconds\n",
            self.elapsed_ms
        ));
        out.push_str(&format!("Your score is {:.2}\n", self.score));
        out.push_str(&self.transcript());
        out
    }

    /// One line per matched round: the displayed numbers, an arrow, the answer.
    pub fn transcript(&self) -> String {
        self.rounds
            .iter()
            .map(|round| format!("{round}\n"))
            .collect()
    }
}

impl ScoreTracker {
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            questions_asked: self.question_count(),
            correct_answers: self.correct_count(),
            elapsed_ms: self.elapsed_ms(),
            score: self.score(),
            answer_timeout_secs: self.answer_timeout().as_secs(),
            started_at: self.started_at(),
            ended_at: self.ended_at(),
            rounds: self.rounds().collect(),
        }
    }
}
