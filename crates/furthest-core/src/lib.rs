//! # Furthest Number Core Library
//!
//! This library provides the core logic for the Furthest Number quiz: three
//! distinct numbers are shown, and the player names the extreme value that
//! lies further from the middle one before a deadline expires.
//!
//! ## Architecture
//!
//! - **Question generation**: rejection sampling over a seeded PCG engine,
//!   shuffled for display
//! - **Session engine**: a synchronous state machine that opens rounds and
//!   accepts exactly one resolution (answer, timeout or quit) per round
//! - **Session runner**: races a line of input against the answer deadline on
//!   a tokio runtime and drives the engine
//! - **Score tracker**: round history, correctness and the composite score
//!
//! ## Key Components
//!
//! - [`QuestionGenerator`]: Random, validated questions
//! - [`SessionEngine`]: Round state machine
//! - [`Session`]: Async prompt/answer/timeout loop
//! - [`ScoreTracker`]: History and scoring
//! - [`Config`]: Startup defaults stored as TOML

pub mod error;
pub mod events;
pub mod question;
pub mod score;
pub mod session;
pub mod storage;

pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use question::{validate_highest_number, Question, QuestionGenerator, QuestionSource};
pub use score::{Answer, RoundRecord, ScoreTracker, SessionSummary};
pub use session::{answer_timeout, LineReader, Session, SessionEngine, SessionState};
pub use storage::{Config, GameConfig};
