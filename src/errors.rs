use thiserror::Error as ThisError;
use thisslime::TracingError;

use crate::{framework::config, games::wordle};

#[derive(Debug, ThisError, TracingError)]
pub enum Error {
    #[error(transparent)]
    Game(#[from] wordle::Error),

    #[error(transparent)]
    WordsList(#[from] wordle::words_list::Error),

    #[error("problem loading config: {0}")]
    Config(#[from] config::Error),

    #[error("io error: {0}")]
    #[event(level = ERROR)]
    Io(#[from] std::io::Error),

    #[error("couldn't serialize: {0}")]
    #[event(level = ERROR)]
    Json(#[from] serde_json::Error),
}
