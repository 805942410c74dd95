//! Questions and the rule that decides their correct answer.
//!
//! A question is three distinct numbers. The player has to name the extreme
//! (lowest or highest) that lies further from the remaining middle number:
//!
//! ```text
//! 9 3 7   ->  sorted 3 7 9, gaps 4 and 2  ->  3 is furthest from 7
//! ```

mod generator;

pub use generator::{QuestionGenerator, QuestionSource};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Smallest value a question can contain.
pub const LOWEST_NUMBER: u32 = 1;
/// Smallest accepted maximum. Below this there are not enough
/// unambiguous triples and generation could spin forever.
pub const MIN_HIGHEST_NUMBER: u32 = 4;
/// Largest accepted maximum.
pub const MAX_HIGHEST_NUMBER: u32 = 100;

/// Three distinct numbers in display order.
///
/// Invariants: pairwise distinct, and once sorted as `a < b < c` the gaps
/// `b - a` and `c - b` differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u32; 3]", into = "[u32; 3]")]
pub struct Question([u32; 3]);

impl Question {
    /// Build a question from values in display order, checking both invariants.
    pub fn new(values: [u32; 3]) -> Result<Self, ValidationError> {
        if !Self::is_valid(values) {
            let [a, b, c] = sorted(values);
            if a == b || b == c {
                return Err(ValidationError::DuplicateValues(values));
            }
            return Err(ValidationError::AmbiguousGaps(values));
        }
        Ok(Self(values))
    }

    /// Whether `values` would form a valid question.
    pub fn is_valid(values: [u32; 3]) -> bool {
        let [a, b, c] = sorted(values);
        a != b && b != c && (b - a) != (c - b)
    }

    /// Values in the order they are shown to the player.
    pub fn values(&self) -> [u32; 3] {
        self.0
    }

    /// Values in ascending order.
    pub fn sorted(&self) -> [u32; 3] {
        sorted(self.0)
    }

    /// The extreme value that lies further from the middle value.
    ///
    /// Independent of display order.
    pub fn correct_answer(&self) -> u32 {
        let [a, b, c] = self.sorted();
        if (b - a) > (c - b) {
            a
        } else {
            c
        }
    }
}

fn sorted(mut values: [u32; 3]) -> [u32; 3] {
    values.sort_unstable();
    values
}

impl TryFrom<[u32; 3]> for Question {
    type Error = ValidationError;

    fn try_from(values: [u32; 3]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Question> for [u32; 3] {
    fn from(question: Question) -> Self {
        question.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a} {b} {c}")
    }
}

/// Check the startup maximum and narrow it to the generator's type.
pub fn validate_highest_number(value: i64) -> Result<u32, ValidationError> {
    if value < MIN_HIGHEST_NUMBER as i64 || value > MAX_HIGHEST_NUMBER as i64 {
        return Err(ValidationError::HighestNumberOutOfRange {
            value,
            min: MIN_HIGHEST_NUMBER,
            max: MAX_HIGHEST_NUMBER,
        });
    }
    Ok(value as u32)
}
