use std::io::{BufRead, Write};

use motus::{framework::Config, Error};
use thisslime::TracingError;

use crate::cli::Command;

pub mod play;
pub mod score;

pub fn run(command: Command, config: &Config) -> Result<(), Error> {
    let stdout = std::io::stdout();
    run_with(command, config, std::io::stdin().lock(), stdout.lock())
}

/// Runs `command` against the given streams, logging whatever error it ends with.
pub fn run_with(
    command: Command,
    config: &Config,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), Error> {
    let result = match command {
        Command::Play(play) => play::run(&play, config, input, output).map(|_| ()),
        Command::Score(score) => score::run(&score, output),
        Command::Config => show_config(config, &mut output),
    };

    if let Err(ref err) = result {
        err.trace();
    }

    result
}

fn show_config(config: &Config, mut output: impl Write) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(config)?;
    writeln!(output, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use motus::framework::Config;
    use tracing_test::traced_test;

    use super::run_with;
    use crate::cli::{Command, Score};

    #[test]
    fn config_is_printed_as_json() {
        let mut output = Vec::new();
        run_with(Command::Config, &Config::default(), Cursor::new(""), &mut output)
            .expect("serializable");

        let json: serde_json::Value =
            serde_json::from_slice(&output).expect("printed valid json");
        assert_eq!(json["logs"]["filter"], "motus=info");
        assert_eq!(json["wordle"]["style"], "letters");
    }

    #[test]
    #[traced_test]
    fn failing_commands_are_logged() {
        let command = Command::Score(Score {
            target: "chat".to_owned(),
            guess: "chien".to_owned(),
        });

        let result = run_with(command, &Config::default(), Cursor::new(""), Vec::new());

        assert!(result.is_err());
        assert!(logs_contain("guess has 5 letters, should have exactly 4"));
    }
}
