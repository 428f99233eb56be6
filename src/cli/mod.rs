use std::path::PathBuf;

use motus::{framework::config, games::wordle::GameStyle};

#[derive(clap::Parser, Debug, Clone)]
#[command(name = "motus", version, about = "guess the word in six attempts")]
pub struct Cli {
    /// Config file; defaults to $MOTUS_CONFIG, then ./motus.toml if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn config_path(&self) -> config::Path {
        config::Path::resolve(self.config.clone())
    }
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Play a game in the terminal.
    Play(Play),
    /// Score one guess against a word.
    Score(Score),
    /// Print the effective configuration.
    Config,
}

#[derive(clap::Args, Debug, Clone)]
pub struct Play {
    /// Play this word instead of a random one.
    #[arg(long)]
    pub word: Option<String>,

    /// Who is playing.
    #[arg(long, default_value = "player")]
    pub user: String,

    #[arg(long, value_enum)]
    pub style: Option<GameStyle>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct Score {
    pub target: String,
    pub guess: String,
}
