use serde::{Deserialize, Serialize};

/// How a board is drawn by the text renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GameStyle {
    /// Colored squares only; safe to share without spoiling the word.
    #[serde(alias = "colors_only", alias = "hidden")]
    #[value(alias = "hidden")]
    Colors,
    #[default]
    #[serde(alias = "with_letters")]
    Letters,
    #[serde(alias = "spaced", alias = "with_spaces")]
    #[value(alias = "spaced")]
    SpacedLetters,
}
