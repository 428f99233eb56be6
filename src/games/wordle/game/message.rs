use std::borrow::Cow;

use super::{
    super::core::AsEmoji,
    options::GameStyle,
    render::{RenderSnapshot, Row},
};

impl AsEmoji for Row {
    fn as_emoji(&self) -> Cow<str> {
        self.cells
            .iter()
            .map(|cell| cell.marker.as_emoji())
            .collect::<String>()
            .into()
    }

    fn emoji_with_letters(&self) -> String {
        if self.is_empty() {
            return self.as_emoji().into_owned();
        }

        let (letters, markers) = self.cells.iter().fold(
            (String::new(), String::new()),
            |(letters, markers), cell| {
                (
                    letters
                        + "\u{200c}" /* zero-width non-joiner */
                        + &cell
                            .letter
                            .map(|ch| ch.as_emoji().into_owned())
                            .unwrap_or_default(),
                    markers + &cell.marker.as_emoji(),
                )
            },
        );

        letters + "\n" + &markers
    }

    fn emoji_with_letters_spaced(&self) -> String {
        let markers = self
            .cells
            .iter()
            .map(|cell| cell.marker.as_emoji())
            .collect::<Vec<_>>()
            .join(" ");

        if self.is_empty() {
            return markers;
        }

        let letters = self
            .cells
            .iter()
            .filter_map(|cell| cell.letter.map(|ch| ch.as_emoji().into_owned()))
            .collect::<Vec<_>>()
            .join(" ");

        letters + "\n" + &markers
    }
}

/// Plain-text rendering of a snapshot: title, board, then description.
pub fn content(snapshot: &RenderSnapshot, style: GameStyle) -> String {
    let board = snapshot
        .rows
        .iter()
        .map(|row| row.emoji_with_style(style))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{title}\n{board}\n{description}",
        title = snapshot.title,
        description = snapshot.description,
    )
}

impl RenderSnapshot {
    pub fn content(&self, style: GameStyle) -> String {
        content(self, style)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::content;
    use crate::games::wordle::game::{options::GameStyle, GameState};

    #[test]
    fn colors_only() {
        let game = GameState::new("chat", "u1").expect("not empty");
        let (_, game) = game.submit_attempt("plat", "u1").expect("valid guess");

        let text = content(&game.snapshot(), GameStyle::Colors);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "motus 1/6");
        assert_eq!(lines[1], "⬛⬛🟩🟩");
        assert_eq!(lines[2], "⬜⬜⬜⬜");
        assert!(!text.contains('🇵'));
    }

    #[test]
    fn spaced_letters() {
        let game = GameState::new("chat", "u1").expect("not empty");
        let (_, game) = game.submit_attempt("plat", "u1").expect("valid guess");

        let text = game.snapshot().content(GameStyle::SpacedLetters);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[1], "🇵 🇱 🇦 🇹");
        assert_eq!(lines[2], "⬛ ⬛ 🟩 🟩");
        assert_eq!(lines[3], "⬜ ⬜ ⬜ ⬜");
    }
}
