use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{
    super::core::{AsEmoji, UserId, Verdicts},
    GameState, Status,
};

/// Summary of a game, for hosts that keep statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub initiator: UserId,
    pub target: String,
    pub attempts: Vec<AttemptRecord>,
    pub status: Status,
    pub solved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub submitter: UserId,
    pub guess: String,
    pub verdicts: Verdicts,
}

impl GameRecord {
    pub fn new(game: &GameState) -> Self {
        let attempts = game
            .attempts()
            .iter()
            .map(|attempt| AttemptRecord {
                submitter: attempt.submitter().clone(),
                guess: attempt.guess().to_owned(),
                verdicts: attempt.verdicts().clone(),
            })
            .collect::<Vec<_>>();

        Self {
            initiator: game.initiator().clone(),
            target: game.target().to_string(),
            solved: game.last_attempt().is_some_and(|attempt| attempt.is_correct()),
            status: game.status(),
            attempts,
        }
    }

    pub fn num_attempts(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_over()
    }
}

impl AsEmoji for GameRecord {
    fn as_emoji(&self) -> Cow<str> {
        self.attempts
            .iter()
            .map(|attempt| attempt.verdicts.as_emoji())
            .collect::<Vec<_>>()
            .join("\n")
            .into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::{GameState, Status, Terminal};
    use super::GameRecord;
    use crate::games::wordle::core::AsEmoji;

    #[test]
    fn record_of_a_won_game() {
        let game = GameState::new("chat", "u1").expect("not empty");
        let (_, game) = game.submit_attempt("plat", "u2").expect("valid guess");
        let (_, game) = game.submit_attempt("chat", "u1").expect("valid guess");

        let record = game.record();
        assert_eq!(record.num_attempts(), 2);
        assert_eq!(record.status, Status::Won);
        assert!(record.solved);
        assert!(record.is_finished());
        assert_eq!(record.attempts[0].submitter, "u2");
        assert_eq!(record.as_emoji(), "⬛⬛🟩🟩\n🟩🟩🟩🟩");

        let json = serde_json::to_value(&record).expect("serializable");
        assert_eq!(json["status"], "won");
        assert_eq!(json["attempts"][0]["verdicts"], "..OO");
        assert_eq!(json["target"], "CHAT");
    }

    #[test]
    fn corrupt_records_are_refused() {
        let json = r#"{
            "initiator": "u1",
            "target": "CHAT",
            "attempts": [{ "submitter": "u1", "guess": "PLAT", "verdicts": "X?OO" }],
            "status": "playing",
            "solved": false
        }"#;

        assert!(serde_json::from_str::<GameRecord>(json).is_err());
        assert!(serde_json::from_str::<GameRecord>(&json.replace("X?OO", "..OO")).is_ok());
    }

    #[test]
    fn given_up_game_is_not_solved() {
        let game = GameState::new("chat", "u1")
            .expect("not empty")
            .end_game(Terminal::Lost);

        let record = game.record();
        assert!(!record.solved);
        assert!(record.is_finished());
        assert!(record.attempts.is_empty());
    }
}
