use std::borrow::Cow;

use serde::{Deserialize, Serialize};

mod word;
pub use word::{normalize, score, TargetWord};

pub mod guess;
pub use guess::{Attempt, Verdict, Verdicts};

use super::game::options::GameStyle;

/// Opaque identifier of whoever started or played a game.
///
/// The engine never resolves or validates these; it only compares them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for UserId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

pub trait AsEmoji {
    fn as_emoji(&self) -> Cow<str>;

    fn emoji_with_letters(&self) -> String {
        self.as_emoji().into()
    }

    fn emoji_with_letters_spaced(&self) -> String {
        self.emoji_with_letters()
    }

    fn emoji_with_style(&self, style: GameStyle) -> Cow<str> {
        match style {
            GameStyle::Colors => self.as_emoji(),
            GameStyle::Letters => self.emoji_with_letters().into(),
            GameStyle::SpacedLetters => self.emoji_with_letters_spaced().into(),
        }
    }
}

impl AsEmoji for char {
    /// Regional indicator for `A..=Z`; anything else is shown as-is.
    fn as_emoji(&self) -> Cow<str> {
        let alphabet_letters = 'A'..='Z';
        let emoji_letters = '🇦'..='🇿';

        alphabet_letters
            .zip(emoji_letters)
            .find_map(|(letter, emoji)| (self.to_ascii_uppercase() == letter).then_some(emoji))
            .unwrap_or(*self)
            .to_string()
            .into()
    }
}
