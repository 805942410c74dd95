use std::fmt;

use serde::{Deserialize, Serialize};

/// A recorded answer. `0` stands for "no answer in time".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answer(i64);

impl Answer {
    /// Sentinel recorded when the deadline fires first.
    pub const TIMED_OUT: Answer = Answer(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Best-effort integer parse that never fails.
    ///
    /// Skips leading whitespace, accepts one optional sign and then the longest
    /// run of ASCII digits. Anything without leading digits yields `0`, so
    /// `"12abc"` is 12 and `"abc"` is 0. Saturates instead of overflowing.
    pub fn parse_lenient(text: &str) -> Self {
        let rest = text.trim_start();
        let (negative, digits) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };

        let mut value: i64 = 0;
        for byte in digits.bytes().take_while(u8::is_ascii_digit) {
            let digit = i64::from(byte - b'0');
            value = value.saturating_mul(10);
            value = if negative {
                value.saturating_sub(digit)
            } else {
                value.saturating_add(digit)
            };
        }
        Self(value)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
