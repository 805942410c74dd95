//! Async driver for a session.
//!
//! Each round races one input line against the answer deadline with a biased
//! `select!`. The deadline is polled first, so a line that only becomes ready
//! at the very instant the deadline fires belongs to the next round. The loser
//! is dropped when the `select!` returns, so a deadline can never fire into a
//! later round. [`LineReader::next_line`] is cancel safe: a line that was only
//! partly typed when the deadline hit stays buffered and is delivered to the
//! next round.

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use super::engine::SessionEngine;
use super::input::LineReader;
use crate::error::Result;
use crate::events::Event;
use crate::question::{Question, QuestionSource};
use crate::score::ScoreTracker;

pub const BANNER: &str = "Starting the game. Good luck!\n\n";
pub const TIMEOUT_NOTICE: &str = "\nYou didn't give your answer in time. Asking a new one!\n\n";

pub fn prompt(question: &Question) -> String {
    format!("\nNumbers : {question}\nAnswer (q to quit): ")
}

pub fn acknowledgement(raw: &str) -> String {
    format!("Your answer is '{raw}'\n")
}

enum Outcome {
    Line(Option<String>),
    Deadline,
}

/// A live quiz bound to an input and an output stream.
pub struct Session<S, R, W> {
    engine: SessionEngine<S>,
    input: LineReader<R>,
    output: W,
    answer_timeout: Duration,
}

impl<S, R, W> Session<S, R, W>
where
    S: QuestionSource,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// `input` may already have been read from, e.g. for a startup prompt;
    /// any partial line it holds is kept.
    pub fn new(source: S, input: LineReader<R>, output: W, answer_timeout: Duration) -> Self {
        Self {
            engine: SessionEngine::new(source, answer_timeout),
            input,
            output,
            answer_timeout,
        }
    }

    /// Play rounds until the player quits or input closes.
    pub async fn run(&mut self) -> Result<()> {
        info!(timeout_secs = self.answer_timeout.as_secs(), "session started");
        self.write(BANNER).await?;

        while let Some(round) = self.engine.begin_round() {
            self.write(&prompt(&round.question)).await?;

            let deadline = Instant::now() + self.answer_timeout;
            let outcome = tokio::select! {
                biased;
                () = sleep_until(deadline) => Outcome::Deadline,
                line = self.input.next_line() => Outcome::Line(line?),
            };

            let event = match outcome {
                Outcome::Line(Some(line)) => self.engine.submit_line(round.id, &line),
                Outcome::Line(None) => {
                    debug!(round = round.id, "input closed");
                    self.engine.terminate()
                }
                Outcome::Deadline => self.engine.time_out(round.id),
            };

            match event {
                Some(Event::AnswerRecorded { raw, .. }) => {
                    self.write(&acknowledgement(&raw)).await?;
                }
                Some(Event::RoundTimedOut { .. }) => self.write(TIMEOUT_NOTICE).await?,
                Some(Event::SessionEnded { .. }) | Some(Event::RoundStarted { .. }) | None => {
                    break;
                }
            }
        }

        self.output.flush().await?;
        let tracker = self.engine.tracker();
        info!(
            questions = tracker.question_count(),
            correct = tracker.correct_count(),
            elapsed_ms = tracker.elapsed_ms(),
            "session finished"
        );
        Ok(())
    }

    pub fn engine(&self) -> &SessionEngine<S> {
        &self.engine
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_tracker(self) -> ScoreTracker {
        self.engine.into_tracker()
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
