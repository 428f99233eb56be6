//! Presentation-agnostic view of a game.
//!
//! A [`RenderSnapshot`] is everything a host needs to draw the board and
//! decide whether to offer another attempt. Turning it into buttons, embeds
//! or plain text is the host's business; [`super::message`] has a text
//! renderer for terminals.

use std::borrow::Cow;

use serde::Serialize;

use super::{
    super::core::{AsEmoji, UserId, Verdict},
    GameState, Status,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSnapshot {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub rows: Vec<Row>,
    /// Whether the host should offer to submit another attempt.
    pub can_submit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Healthy,
    Warning,
    Critical,
}

impl Severity {
    fn from_progress(attempts: usize) -> Self {
        match attempts {
            0..=2 => Self::Healthy,
            3..=4 => Self::Warning,
            _ => Self::Critical,
        }
    }
}

/// One line of the board: a submitted attempt, or a slot still to play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub submitter: Option<UserId>,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub letter: Option<char>,
    pub marker: Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Correct,
    Elsewhere,
    Absent,
    Empty,
}

impl From<Verdict> for Marker {
    fn from(value: Verdict) -> Self {
        match value {
            Verdict::Correct => Self::Correct,
            Verdict::Elsewhere => Self::Elsewhere,
            Verdict::Absent => Self::Absent,
        }
    }
}

impl AsEmoji for Marker {
    fn as_emoji(&self) -> Cow<str> {
        match self {
            Self::Correct => "🟩",
            Self::Elsewhere => "🟨",
            Self::Absent => "⬛",
            Self::Empty => "⬜", // white square
        }
        .into()
    }
}

impl Row {
    fn empty(len: usize) -> Self {
        Self {
            submitter: None,
            cells: vec![
                Cell {
                    letter: None,
                    marker: Marker::Empty,
                };
                len
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.submitter.is_none()
    }

    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.cells.iter().map(|cell| cell.marker)
    }
}

/// Builds the snapshot for `game`. Any state can be projected.
pub fn project(game: &GameState) -> RenderSnapshot {
    let attempts = game.attempts();
    let target = game.target();

    let description = match game.status() {
        Status::Playing => format!(
            "the word has {len} letters and starts with {first}. game started by {initiator}",
            len = target.len(),
            first = target.first_letter(),
            initiator = game.initiator(),
        ),
        Status::Won => format!(
            "you win! found in {count} {attempts}",
            count = attempts.len(),
            attempts = if attempts.len() == 1 {
                "attempt"
            } else {
                "attempts"
            },
        ),
        Status::Lost => format!("game over! the word was {target}"),
    };

    let severity = match game.status() {
        Status::Playing => Severity::from_progress(attempts.len()),
        Status::Won => Severity::Healthy,
        Status::Lost => Severity::Critical,
    };

    let mut rows = attempts
        .iter()
        .map(|attempt| Row {
            submitter: Some(attempt.submitter().clone()),
            cells: attempt
                .letters()
                .map(|(letter, verdict)| Cell {
                    letter: Some(letter),
                    marker: verdict.into(),
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    rows.resize_with(game.max_attempts().max(rows.len()), || {
        Row::empty(target.len())
    });

    RenderSnapshot {
        title: format!(
            "motus {count}/{max}",
            count = attempts.len(),
            max = game.max_attempts()
        ),
        description,
        severity,
        rows,
        can_submit: game.status() == Status::Playing,
    }
}
