//! Random question generation.
//!
//! One PCG engine per generator, seeded once (from entropy or an explicit
//! seed for reproducible runs). Draws are rejected and repeated until the
//! triple satisfies the [`Question`] invariants, then shuffled so the display
//! order does not leak the answer position.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use tracing::{debug, trace};

use super::{Question, LOWEST_NUMBER};

/// Anything that can hand the session its next question.
pub trait QuestionSource {
    fn next_question(&mut self) -> Question;
}

/// Uniform random question generator.
///
/// `highest` must already be validated with
/// [`validate_highest_number`](super::validate_highest_number); with fewer
/// than four reachable values [`generate`](Self::generate) never returns.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    highest: u32,
    rng: Mcg128Xsl64,
}

impl QuestionGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new(highest: u32) -> Self {
        Self {
            highest,
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed.
    pub fn with_seed(highest: u32, seed: u64) -> Self {
        Self {
            highest,
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    /// Draw until the triple is valid, then shuffle it into display order.
    pub fn generate(&mut self) -> Question {
        let mut attempts = 0u32;
        let mut values = loop {
            attempts += 1;
            let draw = [self.draw(), self.draw(), self.draw()];
            if Question::is_valid(draw) {
                break draw;
            }
            trace!(?draw, attempts, "rejected draw");
        };
        values.shuffle(&mut self.rng);

        debug!(?values, attempts, "generated question");
        Question(values)
    }

    fn draw(&mut self) -> u32 {
        self.rng.gen_range(LOWEST_NUMBER..=self.highest)
    }
}

impl QuestionSource for QuestionGenerator {
    fn next_question(&mut self) -> Question {
        self.generate()
    }
}
