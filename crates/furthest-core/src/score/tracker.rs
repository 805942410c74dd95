//! Round history and scoring.
//!
//! Questions and answers are kept in two parallel vectors: index `i` in both
//! is round `i`. Between `record_question` and `record_answer` the question
//! vector is one longer; that trailing entry is the pending round. Every
//! statistic only looks at matched rounds.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

use super::answer::Answer;
use crate::question::Question;

/// Weight of the correctness ratio in the final score.
const CORRECTNESS_WEIGHT: f64 = 0.8;
/// Weight of the speed ratio in the final score.
const SPEED_WEIGHT: f64 = 0.2;

/// One matched question/answer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundRecord {
    pub question: Question,
    pub answer: Answer,
    pub correct: bool,
}

impl fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  -> {}", self.question, self.answer)
    }
}

#[derive(Debug, Clone)]
pub struct ScoreTracker {
    answer_timeout: Duration,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    started: Option<Instant>,
    ended: Option<Instant>,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl ScoreTracker {
    /// `answer_timeout` is the per-round deadline; it scales the speed ratio.
    pub fn new(answer_timeout: Duration) -> Self {
        Self {
            answer_timeout,
            questions: Vec::new(),
            answers: Vec::new(),
            started: None,
            ended: None,
            started_at: None,
            ended_at: None,
        }
    }

    // ── Clock ────────────────────────────────────────────────────────

    pub fn start_clock(&mut self) {
        self.start_clock_at(Instant::now());
    }

    /// Arm the start stamp. Only the first call has an effect.
    pub fn start_clock_at(&mut self, at: Instant) {
        if self.started.is_none() {
            self.started = Some(at);
            self.started_at = Some(Utc::now());
        }
    }

    pub fn stop_clock(&mut self) {
        self.stop_clock_at(Instant::now());
    }

    /// Arm the end stamp. Only the first call has an effect.
    pub fn stop_clock_at(&mut self, at: Instant) {
        if self.ended.is_none() {
            self.ended = Some(at);
            self.ended_at = Some(Utc::now());
        }
    }

    pub fn is_clock_running(&self) -> bool {
        self.started.is_some() && self.ended.is_none()
    }

    /// Milliseconds between the start and end stamps.
    ///
    /// `0` until the clock has been both started and stopped.
    pub fn elapsed_ms(&self) -> u64 {
        match (self.started, self.ended) {
            (Some(start), Some(end)) => end.saturating_duration_since(start).as_millis() as u64,
            _ => 0,
        }
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub fn answer_timeout(&self) -> Duration {
        self.answer_timeout
    }

    // ── Recording ────────────────────────────────────────────────────

    /// Open a new round with `question`.
    pub fn record_question(&mut self, question: Question) {
        debug_assert!(!self.has_pending(), "previous round was never resolved");
        self.questions.push(question);
    }

    /// Close the pending round with `answer`.
    ///
    /// There must be a pending round.
    pub fn record_answer(&mut self, answer: Answer) {
        debug_assert!(self.has_pending(), "answer recorded without a question");
        self.answers.push(answer);
    }

    /// Drop the pending question, if any. Used when the player quits mid-round.
    pub fn discard_pending_question(&mut self) -> Option<Question> {
        if self.has_pending() {
            self.questions.pop()
        } else {
            None
        }
    }

    pub fn has_pending(&self) -> bool {
        self.questions.len() > self.answers.len()
    }

    /// The question of the open round.
    pub fn pending_question(&self) -> Option<&Question> {
        if self.has_pending() {
            self.questions.last()
        } else {
            None
        }
    }

    // ── Statistics ───────────────────────────────────────────────────

    /// Number of matched rounds.
    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    pub fn correct_count(&self) -> usize {
        self.rounds().filter(|r| r.correct).count()
    }

    /// Matched rounds in order.
    pub fn rounds(&self) -> impl Iterator<Item = RoundRecord> + '_ {
        self.questions
            .iter()
            .zip(self.answers.iter())
            .map(|(&question, &answer)| RoundRecord {
                question,
                answer,
                correct: i64::from(question.correct_answer()) == answer.value(),
            })
    }

    /// Composite score: 80% correctness ratio, 20% speed ratio, times 100.
    ///
    /// The correctness ratio is `questions / correct`, which grows as fewer
    /// answers are right. The speed ratio compares the time budget for all
    /// questions with the time spent per correct answer. Not clamped.
    /// Exactly `0.0` without a single correct answer.
    pub fn score(&self) -> f64 {
        let correct = self.correct_count();
        if correct == 0 {
            return 0.0;
        }
        let questions = self.question_count() as f64;
        let correct = correct as f64;

        let correctness = questions / correct;
        let budget_ms = questions * self.answer_timeout.as_millis() as f64;
        let ms_per_correct = (self.elapsed_ms() as f64 / correct).max(1.0);
        let speed = budget_ms / ms_per_correct;

        100.0 * (CORRECTNESS_WEIGHT * correctness + SPEED_WEIGHT * speed)
    }
}
