//! The word-guessing game: a secret word, six attempts, and a verdict for
//! every letter of every attempt.
//!
//! [`core`] scores guesses, [`game`] holds the state machine and its views,
//! and [`GameRegistry`] keeps live games under a host-chosen handle.

/// Attempts allowed before a game is lost.
pub const MAX_ATTEMPTS: usize = 6;

mod error;
pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub mod core;
pub use self::core::{score, Attempt, TargetWord, UserId, Verdict, Verdicts};

pub mod game;
pub use game::{
    options::GameStyle, project, GameRecord, GameRegistry, GameState, RenderSnapshot, Status,
    Terminal, TryOutcome,
};

pub mod words_list;
pub use words_list::{WordSource, WordsList};
