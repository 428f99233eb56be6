use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thisslime::TracingError;
use tracing::{debug, trace};

use crate::{framework::logging::DEFAULT_FILTER, games::wordle::GameStyle};

pub use AppConfig as Config;

const ENV_PREFIX: &str = "MOTUS";

#[derive(Debug, thiserror::Error, TracingError)]
pub enum Error {
    #[error("file read error: {0}")]
    #[event(level = ERROR)]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    #[event(level = ERROR)]
    Parse(::config::ConfigError),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub logs: LogsConfig,

    #[serde(default)]
    pub wordle: WordleConfig,
}

impl AppConfig {
    #[tracing::instrument(skip_all, name = "config")]
    pub fn load(path: &Path) -> Result<Self, Error> {
        trace!(?path, required = path.required, "looking for config file");

        let config: Self = ::config::Config::builder()
            .add_source(
                ::config::File::from(path.inner.as_path())
                    .format(::config::FileFormat::Toml)
                    .required(path.required),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        debug!(?config, "done!");

        Ok(config)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LogsConfig {
    #[serde(default = "LogsConfig::default_filter")]
    pub filter: String,
}

impl LogsConfig {
    fn default_filter() -> String {
        DEFAULT_FILTER.to_owned()
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WordleConfig {
    /// Newline-separated answers; the embedded list is used when unset.
    #[serde(default)]
    pub words_file: Option<PathBuf>,

    #[serde(default)]
    pub style: GameStyle,
}

/// Where to look for the config file.
///
/// An explicitly chosen file must exist; the default one is optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    inner: PathBuf,
    required: bool,
}

impl Path {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: path.into(),
            required: true,
        }
    }

    pub fn from_var() -> Option<Self> {
        std::env::var("MOTUS_CONFIG").map(Self::new).ok()
    }

    /// `explicit` if given, else `MOTUS_CONFIG`, else the default.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        explicit
            .map(Self::new)
            .or_else(Self::from_var)
            .unwrap_or_default()
    }
}

impl Default for Path {
    fn default() -> Self {
        Self {
            inner: PathBuf::from("motus.toml"),
            required: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use tempfile::NamedTempFile;

    use super::{AppConfig, Error, Path};
    use crate::games::wordle::GameStyle;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("motus-")
            .suffix(".toml")
            .tempfile()
            .expect("temp dir is writable");
        file.write_all(contents.as_bytes())
            .expect("temp dir is writable");
        file
    }

    #[test]
    fn missing_default_file_gives_defaults() {
        let path = Path {
            inner: "definitely-not-here.toml".into(),
            required: false,
        };

        let config = AppConfig::load(&path).expect("optional file");
        assert_eq!(config.logs.filter, "motus=info");
        assert_eq!(config.wordle.style, GameStyle::Letters);
        assert_eq!(config.wordle.words_file, None);
    }

    #[test]
    fn missing_explicit_file_fails() {
        let path = Path::new("definitely-not-here.toml");
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn reads_toml() {
        let file = toml_file(
            r#"
            [logs]
            filter = "motus=debug"

            [wordle]
            words_file = "/srv/motus/words.txt"
            style = "spaced_letters"
            "#,
        );

        let config = AppConfig::load(&Path::new(file.path())).expect("valid config");

        assert_eq!(config.logs.filter, "motus=debug");
        assert_eq!(config.wordle.style, GameStyle::SpacedLetters);
        assert_eq!(
            config.wordle.words_file.as_deref(),
            Some(std::path::Path::new("/srv/motus/words.txt"))
        );
    }

    #[test]
    fn style_aliases() {
        let file = toml_file("[wordle]\nstyle = \"hidden\"\n");

        let config = AppConfig::load(&Path::new(file.path())).expect("valid config");
        assert_eq!(config.wordle.style, GameStyle::Colors);
    }

    #[test]
    fn unknown_style_is_a_parse_error() {
        let file = toml_file("[wordle]\nstyle = \"purple\"\n");

        let result = AppConfig::load(&Path::new(file.path()));
        assert!(matches!(result, Err(Error::Parse(..))), "{result:?}");
    }

    #[test]
    fn explicit_path_wins() {
        let path = Path::resolve(Some("elsewhere.toml".into()));
        assert_eq!(path, Path::new("elsewhere.toml"));
    }
}
