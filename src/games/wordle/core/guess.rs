use std::{
    borrow::Cow,
    fmt::Display,
    ops::{Deref, Index},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::{AsEmoji, UserId};

/// Per-letter classification of a guess against the target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Verdict {
    #[default]
    Absent,
    /// The letter is in the target, but not at this position.
    Elsewhere,
    Correct,
}

impl AsEmoji for Verdict {
    fn as_emoji(&self) -> Cow<str> {
        match self {
            Self::Correct => "🟩",   // green square
            Self::Elsewhere => "🟨", // yellow square
            Self::Absent => "⬛",    // black square
        }
        .into()
    }
}

/// Text that isn't made of `O`, `o` and `.`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a verdict, expected `O`, `o` or `.`")]
pub struct ParseVerdictError(String);

impl TryFrom<char> for Verdict {
    type Error = ParseVerdictError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'O' => Ok(Self::Correct),
            'o' => Ok(Self::Elsewhere),
            '.' => Ok(Self::Absent),
            _ => Err(ParseVerdictError(value.to_string())),
        }
    }
}

impl FromStr for Verdict {
    type Err = ParseVerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::try_from(ch),
            _ => Err(ParseVerdictError(s.to_owned())),
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Correct => "O",
            Self::Elsewhere => "o",
            Self::Absent => ".",
        })
    }
}

/// The verdicts for one guess, one per position.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Verdicts(Vec<Verdict>);

impl Verdicts {
    pub(super) fn absent(len: usize) -> Self {
        Self(vec![Verdict::Absent; len])
    }

    pub(super) fn mark(&mut self, index: usize, verdict: Verdict) {
        self.0[index] = verdict;
    }

    pub fn is_correct(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|verdict| *verdict == Verdict::Correct)
    }

    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|v| **v == verdict).count()
    }

    pub fn as_slice(&self) -> &[Verdict] {
        &self.0
    }
}

impl Deref for Verdicts {
    type Target = [Verdict];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Index<usize> for Verdicts {
    type Output = Verdict;

    fn index(&self, index: usize) -> &Self::Output {
        self.0.index(index)
    }
}

impl FromIterator<Verdict> for Verdicts {
    fn from_iter<T: IntoIterator<Item = Verdict>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Verdicts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|verdict| verdict.fmt(f))
    }
}

impl FromStr for Verdicts {
    type Err = ParseVerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Verdict::try_from).collect()
    }
}

impl TryFrom<String> for Verdicts {
    type Error = ParseVerdictError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Verdicts> for String {
    fn from(value: Verdicts) -> Self {
        value.to_string()
    }
}

impl PartialEq<&str> for Verdicts {
    fn eq(&self, other: &&str) -> bool {
        &self.to_string() == other
    }
}

impl AsEmoji for Verdicts {
    fn as_emoji(&self) -> Cow<str> {
        self.0
            .iter()
            .map(|verdict| verdict.as_emoji())
            .collect::<String>()
            .into()
    }
}

/// One scored guess, attributed to whoever submitted it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    guess: String,
    submitter: UserId,
    verdicts: Verdicts,
}

impl Attempt {
    pub(crate) fn new(guess: String, submitter: UserId, verdicts: Verdicts) -> Self {
        Self {
            guess,
            submitter,
            verdicts,
        }
    }

    /// The normalized (uppercase, unaccented) guess.
    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn submitter(&self) -> &UserId {
        &self.submitter
    }

    pub fn verdicts(&self) -> &Verdicts {
        &self.verdicts
    }

    pub fn is_correct(&self) -> bool {
        self.verdicts.is_correct()
    }

    pub fn letters(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        self.guess.chars().zip(self.verdicts.iter().copied())
    }
}

impl AsEmoji for Attempt {
    fn as_emoji(&self) -> Cow<str> {
        self.verdicts.as_emoji()
    }

    fn emoji_with_letters(&self) -> String {
        let (letters, states) = self.letters().fold(
            (String::new(), String::new()),
            |(letters, states), (letter, verdict)| {
                (
                    letters + "\u{200c}" /* zero-width non-joiner */ + &letter.as_emoji(),
                    states + &verdict.as_emoji(),
                )
            },
        );

        letters + "\n" + &states
    }

    fn emoji_with_letters_spaced(&self) -> String {
        let (letters, states) = self.letters().fold(
            (String::new(), String::new()),
            |(letters, states), (letter, verdict)| {
                (
                    letters + " " + &letter.as_emoji(),
                    states + " " + &verdict.as_emoji(),
                )
            },
        );

        letters.trim().to_owned() + "\n" + states.trim()
    }
}
