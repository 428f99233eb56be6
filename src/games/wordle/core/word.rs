use std::{collections::HashMap, ops::Index, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use super::super::Error;
use super::guess::{Verdict, Verdicts};

/// Keeps only letters, without diacritics, uppercased: `" Été "` becomes
/// `"ETE"` and `"new-york"` becomes `"NEWYORK"`.
pub fn normalize(raw: &str) -> String {
    raw.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(|ch| ch.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

/// The secret answer of a game. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetWord {
    letters: Vec<char>,
    letter_counts: HashMap<char, usize>,
}

impl TargetWord {
    pub fn new(raw: &str) -> Result<Self, Error> {
        let letters = normalize(raw).chars().collect::<Vec<char>>();

        if letters.is_empty() {
            return Err(Error::empty_target(raw));
        }

        let mut letter_counts: HashMap<char, usize> = HashMap::new();
        for letter in &letters {
            *letter_counts.entry(*letter).or_default() += 1;
        }

        Ok(Self {
            letters,
            letter_counts,
        })
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn first_letter(&self) -> char {
        self.letters[0]
    }

    /// How many times `letter` appears in the word.
    pub fn count_of(&self, letter: char) -> usize {
        self.letter_counts.get(&letter).copied().unwrap_or_default()
    }

    /// Scores `guess` position by position.
    ///
    /// Exact matches are settled first so that a repeated letter in the guess
    /// is only marked [`Verdict::Elsewhere`] while the target still has an
    /// unmatched copy of it.
    pub fn score(&self, guess: &str) -> Result<Verdicts, Error> {
        let guess = normalize(guess).chars().collect::<Vec<char>>();

        if guess.len() != self.len() {
            return Err(Error::length_mismatch(self.len(), guess.len()));
        }

        debug!(answer = %self, guess = %guess.iter().collect::<String>());

        let mut remaining = self.letter_counts.clone();
        let mut verdicts = Verdicts::absent(self.len());

        for (index, letter) in guess.iter().enumerate() {
            if self[index] == *letter {
                verdicts.mark(index, Verdict::Correct);
                if let Some(count) = remaining.get_mut(letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (index, letter) in guess.iter().enumerate() {
            if verdicts[index] == Verdict::Correct {
                continue;
            }

            if let Some(count) = remaining.get_mut(letter).filter(|count| **count > 0) {
                trace!("{letter}: elsewhere");

                verdicts.mark(index, Verdict::Elsewhere);
                *count -= 1;
            }
        }

        debug!(%verdicts);

        Ok(verdicts)
    }
}

/// Scores `guess` against `target`; see [`TargetWord::score`].
pub fn score(target: &TargetWord, guess: &str) -> Result<Verdicts, Error> {
    target.score(guess)
}

impl FromStr for TargetWord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TargetWord {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TargetWord> for String {
    fn from(value: TargetWord) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for TargetWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters.iter().collect::<String>())
    }
}

impl Index<usize> for TargetWord {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        self.letters.index(index)
    }
}
