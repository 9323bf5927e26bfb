//! Command-line argument parsing.

use std::time::Duration;

use thiserror::Error;

use crate::config::{self, ConfigError, ForumConfig};

pub const USAGE: &str = "\
Usage: rpg-forum [OPTIONS]

Options:
  --topics-url <URL>     Topics endpoint (env RPG_FORUM_TOPICS_URL)
  --comments-url <URL>   Comments endpoint (env RPG_FORUM_COMMENTS_URL)
  --timeout <SECS>       Request timeout in seconds (env RPG_FORUM_TIMEOUT_SECS)
  -V, --version          Print version
  -h, --help             Print this help";

/// Values given on the command line; they win over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub topics_url: Option<String>,
    pub comments_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl Overrides {
    pub fn apply(&self, mut config: ForumConfig) -> ForumConfig {
        if let Some(url) = &self.topics_url {
            config.topics_url = url.clone();
        }
        if let Some(url) = &self.comments_url {
            config.comments_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI (default)
    Run(Overrides),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("unknown argument '{0}'\n\n{USAGE}")]
    Unknown(String),

    #[error("{0} needs a value")]
    MissingValue(&'static str),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Parse command-line arguments (program name first).
///
/// ```
/// use rpg_forum::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["rpg-forum".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = Overrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        // Accept both `--flag value` and `--flag=value`.
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };
        let mut value = |name: &'static str| {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or(ArgsError::MissingValue(name))
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--topics-url" => {
                let url = value("--topics-url")?;
                overrides.topics_url = Some(config::parse_url("--topics-url", &url)?);
            }
            "--comments-url" => {
                let url = value("--comments-url")?;
                overrides.comments_url = Some(config::parse_url("--comments-url", &url)?);
            }
            "--timeout" => {
                let secs = value("--timeout")?;
                overrides.timeout = Some(config::parse_timeout("--timeout", &secs)?);
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }
    Ok(CliCommand::Run(overrides))
}
