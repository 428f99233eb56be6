use std::fmt::Display;

use thisslime::TracingError;

use super::game::Status;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, TracingError)]
pub enum Error {
    #[error(transparent)]
    EmptyTargetWord(#[from] EmptyTargetWord),

    #[error(transparent)]
    LengthMismatch(#[from] LengthMismatch),

    #[error(transparent)]
    GameAlreadyOver(#[from] GameAlreadyOver),

    #[error(transparent)]
    AttemptLimitReached(#[from] AttemptLimitReached),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error(transparent)]
    HandleInUse(#[from] HandleInUse),
}

impl Error {
    pub fn empty_target(raw: impl Into<String>) -> Self {
        Self::EmptyTargetWord(EmptyTargetWord { raw: raw.into() })
    }

    pub fn length_mismatch(expected: usize, found: usize) -> Self {
        Self::LengthMismatch(LengthMismatch { expected, found })
    }

    pub fn already_over(status: Status) -> Self {
        Self::GameAlreadyOver(GameAlreadyOver { status })
    }

    pub fn limit_reached(limit: usize) -> Self {
        Self::AttemptLimitReached(AttemptLimitReached { limit })
    }

    pub fn not_found(handle: impl Display) -> Self {
        Self::NotFound(NotFound {
            handle: handle.to_string(),
        })
    }

    pub fn handle_in_use(handle: impl Display) -> Self {
        Self::HandleInUse(HandleInUse {
            handle: handle.to_string(),
        })
    }
}

/// The word had no letters left once normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, TracingError)]
#[error("the target word is empty")]
#[event(level = ERROR)]
pub struct EmptyTargetWord {
    #[field(print = Debug)]
    pub raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, TracingError)]
#[error("guess has {found} letters, should have exactly {expected}")]
#[event(level = INFO)]
pub struct LengthMismatch {
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, TracingError)]
#[error("this game is already over ({status})")]
#[event(level = WARN)]
pub struct GameAlreadyOver {
    #[field(print = Display)]
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, TracingError)]
#[error("all {limit} attempts have been used")]
#[event(level = WARN)]
pub struct AttemptLimitReached {
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, TracingError)]
#[error("no game found for `{handle}`")]
#[event(level = INFO)]
pub struct NotFound {
    #[field(print = Display)]
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, TracingError)]
#[error("a game is already running for `{handle}`")]
#[event(level = WARN)]
pub struct HandleInUse {
    #[field(print = Display)]
    pub handle: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use thisslime::TracingError;
    use tracing_test::traced_test;

    use super::Error;
    use crate::games::wordle::Status;

    #[test]
    fn messages() {
        assert_eq!(
            Error::length_mismatch(4, 5).to_string(),
            "guess has 5 letters, should have exactly 4"
        );
        assert_eq!(
            Error::already_over(Status::Won).to_string(),
            "this game is already over (won)"
        );
        assert_eq!(Error::not_found("msg1").to_string(), "no game found for `msg1`");
    }

    #[test]
    #[traced_test]
    fn levels_per_error() {
        Error::length_mismatch(4, 5).trace();
        Error::handle_in_use("msg1").trace();
        Error::empty_target("  ").trace();

        logs_assert(|lines: &[&str]| {
            let level_of = |message: &str| {
                lines
                    .iter()
                    .find(|line| line.contains(message))
                    .ok_or_else(|| format!("no line with {message:?}"))
                    .map(|line| line.to_owned())
            };

            for (message, level) in [
                ("should have exactly 4", "INFO"),
                ("a game is already running for `msg1`", "WARN"),
                ("the target word is empty", "ERROR"),
            ] {
                let line = level_of(message)?;
                if !line.contains(level) {
                    return Err(format!("{message:?} not logged at {level}: {line}"));
                }
            }

            Ok(())
        });
    }
}
