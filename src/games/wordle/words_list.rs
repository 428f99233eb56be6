use std::{
    fs,
    path::{Path, PathBuf},
};

use rand::seq::SliceRandom;
use thisslime::TracingError;
use tracing::{debug, warn};

const DEFAULT_WORDS: &str = include_str!("../../../words/default.txt");

#[derive(Debug, thiserror::Error, TracingError)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Empty(#[from] EmptyList),
}

#[derive(Debug, thiserror::Error, TracingError)]
#[error("couldn't read words list at {path:?}: {source}")]
#[event(level = ERROR)]
pub struct ReadError {
    #[field(print = Debug)]
    path: PathBuf,

    #[field(print = Display)]
    source: std::io::Error,
}

#[derive(Debug, thiserror::Error, TracingError)]
#[error("words list at {path:?} has no words")]
#[event(level = ERROR)]
pub struct EmptyList {
    #[field(print = Debug)]
    path: PathBuf,
}

/// Supplies target words. Whatever it returns is normalized by the game.
pub trait WordSource {
    fn random_word(&self) -> String;
}

impl<F> WordSource for F
where
    F: Fn() -> String,
{
    fn random_word(&self) -> String {
        self()
    }
}

#[derive(Debug, Clone)]
pub struct WordsList {
    answers: Vec<String>,
}

impl WordsList {
    fn parse(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(super::core::normalize)
            .collect()
    }

    /// The list shipped with the crate.
    pub fn embedded() -> Self {
        Self {
            answers: Self::parse(DEFAULT_WORDS),
        }
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| ReadError {
            path: path.to_owned(),
            source,
        })?;

        let answers = Self::parse(&text);
        if answers.is_empty() {
            return Err(EmptyList {
                path: path.to_owned(),
            }
            .into());
        }

        debug!(count = answers.len(), "loaded words list");

        Ok(Self { answers })
    }

    /// Loads `path` if given, falling back to the embedded list.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self, Error> {
        path.map_or_else(|| Ok(Self::embedded()), Self::load)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = super::core::normalize(word);
        self.answers.contains(&word)
    }
}

impl FromIterator<String> for WordsList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|word| super::core::normalize(&word))
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }
}

impl WordSource for WordsList {
    fn random_word(&self) -> String {
        self.answers
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| {
                warn!("words list is empty");
                String::new()
            })
    }
}
