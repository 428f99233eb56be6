use std::{collections::BTreeSet, fmt::Display};

use serde::{Deserialize, Serialize};
use tinyvec::TinyVec;
use tracing::{info, warn};

use super::{
    core::{Attempt, TargetWord, UserId},
    words_list::WordSource,
    Error, Result, MAX_ATTEMPTS,
};

mod cache;
pub use cache::GameRegistry;

pub mod message;

pub mod options;

mod record;
pub use record::{AttemptRecord, GameRecord};

pub mod render;
pub use render::{project, RenderSnapshot};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// A status a game can be forced into with [`GameState::end_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    Won,
    Lost,
}

impl From<Terminal> for Status {
    fn from(value: Terminal) -> Self {
        match value {
            Terminal::Won => Self::Won,
            Terminal::Lost => Self::Lost,
        }
    }
}

/// What a successful attempt did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TryOutcome {
    Win,
    Lose,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: TargetWord,
    attempts: TinyVec<[Attempt; MAX_ATTEMPTS]>,
    initiator: UserId,
    status: Status,
}

impl GameState {
    /// Starts a game around `target`, which is normalized first.
    pub fn new(target: &str, initiator: impl Into<UserId>) -> Result<Self> {
        Ok(Self::with_target(TargetWord::new(target)?, initiator))
    }

    pub fn with_target(target: TargetWord, initiator: impl Into<UserId>) -> Self {
        let initiator = initiator.into();
        info!(%initiator, len = target.len(), "new game");

        Self {
            target,
            attempts: TinyVec::default(),
            initiator,
            status: Status::Playing,
        }
    }

    pub fn random(words: &impl WordSource, initiator: impl Into<UserId>) -> Result<Self> {
        Self::new(&words.random_word(), initiator)
    }

    pub fn target(&self) -> &TargetWord {
        &self.target
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    pub fn initiator(&self) -> &UserId {
        &self.initiator
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub const fn max_attempts(&self) -> usize {
        MAX_ATTEMPTS
    }

    /// Scores `guess` and returns the game with the attempt appended.
    ///
    /// `self` is left untouched, so an error means nothing happened.
    pub fn submit_attempt(
        &self,
        guess: &str,
        submitter: impl Into<UserId>,
    ) -> Result<(TryOutcome, Self)> {
        if self.is_over() {
            return Err(Error::already_over(self.status));
        }

        if self.attempts.len() >= MAX_ATTEMPTS {
            return Err(Error::limit_reached(MAX_ATTEMPTS));
        }

        let verdicts = self.target.score(guess)?;
        let guess = super::core::normalize(guess);
        let submitter = submitter.into();

        let mut next = self.clone();
        next.attempts
            .push(Attempt::new(guess, submitter.clone(), verdicts));

        let outcome = if next.attempts.last().is_some_and(Attempt::is_correct) {
            next.status = Status::Won;
            TryOutcome::Win
        } else if next.attempts.len() == MAX_ATTEMPTS {
            next.status = Status::Lost;
            TryOutcome::Lose
        } else {
            TryOutcome::Continue
        };

        info!(
            %submitter,
            attempt = next.attempts.len(),
            status = %next.status,
            ?outcome
        );

        Ok((outcome, next))
    }

    /// Forces the game into `ending`, whatever its attempts say.
    pub fn end_game(&self, ending: Terminal) -> Self {
        let status = Status::from(ending);

        if self.is_over() {
            warn!(from = %self.status, to = %status, "overriding a finished game");
        } else {
            info!(%status, attempts = self.attempts.len(), "game ended early");
        }

        Self {
            status,
            ..self.clone()
        }
    }

    /// Every letter tried so far, in alphabetical order.
    pub fn used_letters(&self) -> BTreeSet<char> {
        self.attempts
            .iter()
            .flat_map(|attempt| attempt.guess().chars())
            .collect()
    }

    /// The letters `A..=Z` that haven't been tried yet.
    pub fn unused_letters(&self) -> BTreeSet<char> {
        let used = self.used_letters();
        ('A'..='Z').filter(|ch| !used.contains(ch)).collect()
    }

    /// The initiator, then everyone else who submitted, by first attempt.
    pub fn participants(&self) -> Vec<&UserId> {
        let mut users = vec![&self.initiator];

        for attempt in &self.attempts {
            if !users.contains(&attempt.submitter()) {
                users.push(attempt.submitter());
            }
        }

        users
    }

    pub fn record(&self) -> GameRecord {
        GameRecord::new(self)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        project(self)
    }
}
