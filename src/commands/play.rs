use std::{
    io::{BufRead, Write},
    sync::Arc,
};

use motus::{
    framework::Config,
    games::wordle::{
        GameRecord, GameRegistry, GameState, GameStyle, Terminal, UserId, WordsList,
    },
    Error,
};
use thisslime::TracingError;
use tracing::{debug, info};

use crate::cli::Play;

/// The terminal has a single conversation, so a single handle.
const HANDLE: &str = "terminal";

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Blank,
    Unused,
    GiveUp,
    /// Starts with `!` but isn't a command; never submitted as a guess.
    Unknown(&'a str),
    Guess { guess: &'a str, submitter: UserId },
}

impl<'a> Input<'a> {
    fn parse(line: &'a str, player: &UserId) -> Self {
        let line = line.trim();

        match line {
            "" => Self::Blank,
            "!unused" => Self::Unused,
            "!give-up" | "!giveup" => Self::GiveUp,
            _ if line.starts_with('!') => line
                .strip_prefix("!as ")
                .and_then(|rest| rest.trim().split_once(char::is_whitespace))
                .map_or(Self::Unknown(line), |(user, guess)| Self::Guess {
                    guess: guess.trim(),
                    submitter: UserId::from(user),
                }),
            _ => Self::Guess {
                guess: line,
                submitter: player.clone(),
            },
        }
    }
}

fn new_game(play: &Play, config: &Config, player: &UserId) -> Result<GameState, Error> {
    let game = if let Some(word) = &play.word {
        GameState::new(word, player.clone())?
    } else {
        let words = WordsList::load_or_embedded(config.wordle.words_file.as_deref())?;
        debug!(words = words.len(), "picking a random word");
        GameState::random(&words, player.clone())?
    };

    Ok(game)
}

fn show(output: &mut impl Write, game: &GameState, style: GameStyle) -> Result<(), Error> {
    writeln!(output, "{}\n", game.snapshot().content(style))?;
    Ok(())
}

/// Plays one game, reading a guess per line of `input`.
///
/// Returns the record of the finished game, or `None` if `input` ran out
/// first.
pub fn run(
    play: &Play,
    config: &Config,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<Option<GameRecord>, Error> {
    let player = UserId::from(play.user.as_str());
    let style = play.style.unwrap_or(config.wordle.style);
    let handle = HANDLE.to_owned();

    let registry = GameRegistry::new();
    let game = registry.create(handle.clone(), new_game(play, config, &player)?)?;
    show(&mut output, &game, style)?;

    for line in input.lines() {
        let line = line?;

        let game: Arc<GameState> = match Input::parse(&line, &player) {
            Input::Blank => continue,
            Input::Unused => {
                let unused = registry.get(&handle)?.unused_letters();
                writeln!(
                    output,
                    "unused letters: {}",
                    unused.into_iter().map(String::from).collect::<Vec<_>>().join(", ")
                )?;
                continue;
            }
            Input::Unknown(command) => {
                debug!(command, "unknown command");
                writeln!(
                    output,
                    "unknown command `{command}`, try `!unused`, `!give-up` or `!as NAME GUESS`"
                )?;
                continue;
            }
            Input::GiveUp => registry.end(&handle, Terminal::Lost)?,
            Input::Guess { guess, submitter } => {
                match registry.submit(&handle, guess, &submitter) {
                    Ok((outcome, game)) => {
                        debug!(?outcome);
                        game
                    }
                    Err(err) => {
                        err.trace();
                        writeln!(output, "{err}")?;
                        continue;
                    }
                }
            }
        };

        show(&mut output, &game, style)?;

        if game.is_over() {
            registry.remove(&handle);

            let record = game.record();
            info!(status = %record.status, attempts = record.num_attempts(), "game finished");
            writeln!(output, "{}", serde_json::to_string_pretty(&record)?)?;

            return Ok(Some(record));
        }
    }

    registry.remove(&handle);
    Ok(None)
}
