//! Core domain types for the game
//!
//! Words, per-letter feedback and keyboard letter status. Nothing in here knows
//! about dictionaries, sessions or terminals.

mod feedback;
mod letter_status;
mod word;

pub use feedback::{Feedback, FeedbackRow};
pub use letter_status::LetterStatus;
pub use word::{Word, WordError};
