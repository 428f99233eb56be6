use std::io::Write;

use motus::{
    games::wordle::{core::AsEmoji, TargetWord},
    Error,
};

use crate::cli::Score;

pub fn run(score: &Score, mut output: impl Write) -> Result<(), Error> {
    let target = TargetWord::new(&score.target)?;
    let verdicts = target.score(&score.guess)?;

    writeln!(output, "{verdicts} {}", verdicts.as_emoji())?;

    Ok(())
}
