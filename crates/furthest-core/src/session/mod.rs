mod engine;
mod input;
mod runner;

pub use engine::{is_quit, Round, RoundId, SessionEngine, SessionState, QUIT_TOKEN};
pub use input::LineReader;
pub use runner::{acknowledgement, prompt, Session, BANNER, TIMEOUT_NOTICE};

use std::time::Duration;

use crate::error::ValidationError;

/// Seconds the player has to answer a question.
pub const DEFAULT_ANSWER_TIMEOUT_SECS: u64 = 6;

/// Turn a configured timeout into a deadline length. Zero is rejected.
pub fn answer_timeout(secs: u64) -> Result<Duration, ValidationError> {
    if secs == 0 {
        return Err(ValidationError::InvalidTimeout { secs });
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use crate::question::{Question, QuestionSource};

    pub fn q(values: [u32; 3]) -> Question {
        Question::new(values).unwrap()
    }

    /// Hands out a fixed list of questions.
    pub struct Scripted(VecDeque<Question>);

    impl Scripted {
        pub fn new(questions: &[[u32; 3]]) -> Self {
            Self(questions.iter().copied().map(q).collect())
        }
    }

    impl QuestionSource for Scripted {
        fn next_question(&mut self) -> Question {
            self.0.pop_front().expect("script ran out of questions")
        }
    }
}
