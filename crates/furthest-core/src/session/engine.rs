//! Session state machine.
//!
//! The engine owns the question source and the score tracker and knows
//! nothing about terminals or timers. The async runner asks it to open a
//! round, then reports whichever happened first: a line of input or the
//! deadline. Each report names the round it belongs to, so a report for a
//! round that is already resolved is ignored and can never record a second
//! answer.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> AwaitingAnswer -> (Answered | TimedOut) -> AwaitingAnswer ...
//!                        \-> Terminated
//! ```

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::Event;
use crate::question::{Question, QuestionSource};
use crate::score::{Answer, ScoreTracker};

/// Monotonic round number, starting at 1.
pub type RoundId = u64;

/// Typed to end the session.
pub const QUIT_TOKEN: &str = "q";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    AwaitingAnswer,
    Answered,
    TimedOut,
    Terminated,
}

/// An open round handed to the runner for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub id: RoundId,
    pub question: Question,
}

/// Whether an input line is the quit command.
pub fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(QUIT_TOKEN)
}

pub struct SessionEngine<S> {
    source: S,
    tracker: ScoreTracker,
    state: SessionState,
    pending: Option<RoundId>,
    last_round: RoundId,
}

impl<S: QuestionSource> SessionEngine<S> {
    pub fn new(source: S, answer_timeout: Duration) -> Self {
        Self {
            source,
            tracker: ScoreTracker::new(answer_timeout),
            state: SessionState::Idle,
            pending: None,
            last_round: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pending_round(&self) -> Option<RoundId> {
        self.pending
    }

    pub fn tracker(&self) -> &ScoreTracker {
        &self.tracker
    }

    pub fn into_tracker(self) -> ScoreTracker {
        self.tracker
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Open the next round. Starts the session clock on the first call.
    ///
    /// Returns `None` while a round is still open or after termination.
    pub fn begin_round(&mut self) -> Option<Round> {
        match self.state {
            SessionState::Idle => self.tracker.start_clock(),
            SessionState::Answered | SessionState::TimedOut => {}
            SessionState::AwaitingAnswer | SessionState::Terminated => return None,
        }

        let question = self.source.next_question();
        self.tracker.record_question(question);
        self.last_round += 1;
        self.pending = Some(self.last_round);
        self.state = SessionState::AwaitingAnswer;

        emit(Event::RoundStarted {
            round: self.last_round,
            question,
            at: Utc::now(),
        });
        Some(Round {
            id: self.last_round,
            question,
        })
    }

    /// A full line arrived for `round`.
    ///
    /// The quit command terminates the session; anything else is recorded
    /// as the round's answer, parsed leniently.
    pub fn submit_line(&mut self, round: RoundId, line: &str) -> Option<Event> {
        if !self.is_pending(round) {
            debug!(round, "ignoring input for a resolved round");
            return None;
        }
        if is_quit(line) {
            return self.terminate();
        }

        let answer = Answer::parse_lenient(line);
        let correct = self
            .tracker
            .pending_question()
            .is_some_and(|q| i64::from(q.correct_answer()) == answer.value());
        self.tracker.record_answer(answer);
        self.pending = None;
        self.state = SessionState::Answered;

        Some(emit(Event::AnswerRecorded {
            round,
            raw: line.to_string(),
            answer,
            correct,
            at: Utc::now(),
        }))
    }

    /// The deadline for `round` elapsed first.
    pub fn time_out(&mut self, round: RoundId) -> Option<Event> {
        if !self.is_pending(round) {
            debug!(round, "ignoring deadline for a resolved round");
            return None;
        }

        self.tracker.record_answer(Answer::TIMED_OUT);
        self.pending = None;
        self.state = SessionState::TimedOut;

        Some(emit(Event::RoundTimedOut {
            round,
            at: Utc::now(),
        }))
    }

    /// End the session: drop the open round, stop the clock.
    pub fn terminate(&mut self) -> Option<Event> {
        if self.state == SessionState::Terminated {
            return None;
        }

        let discarded_round = self.pending.take();
        self.tracker.discard_pending_question();
        self.tracker.stop_clock();
        self.state = SessionState::Terminated;

        Some(emit(Event::SessionEnded {
            completed_rounds: self.tracker.question_count(),
            discarded_round,
            at: Utc::now(),
        }))
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn is_pending(&self, round: RoundId) -> bool {
        self.state == SessionState::AwaitingAnswer && self.pending == Some(round)
    }
}

fn emit(event: Event) -> Event {
    debug!(?event, "session event");
    event
}
