use std::fmt;
use std::time::Duration;

use services::FlowConfig;
use url::Url;

#[derive(Debug)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBaseUrl { raw: String },
    InvalidSeed { raw: String },
    MissingLink,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::MissingLink => write!(f, "view requires a share link or token"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_base_url(raw: String) -> Result<Url, ArgsError> {
    match Url::parse(raw.trim()) {
        Ok(url) if !url.cannot_be_a_base() => Ok(url),
        _ => Err(ArgsError::InvalidBaseUrl { raw }),
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quiz,
    View { link: String },
}

/// Settings resolved from environment then command-line flags.
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub base_url: Url,
    pub no_delay: bool,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Config {
    /// Environment: `NEUROQUANT_BASE_URL`, `NEUROQUANT_NO_DELAY`.
    pub fn from_env() -> Result<Self, ArgsError> {
        let base_url = match std::env::var("NEUROQUANT_BASE_URL") {
            Ok(raw) => parse_base_url(raw)?,
            Err(_) => FlowConfig::default().share_base().clone(),
        };
        Ok(Self {
            command: Command::Quiz,
            base_url,
            no_delay: env_flag("NEUROQUANT_NO_DELAY"),
            seed: None,
            verbose: false,
        })
    }

    /// Apply flags on top of `self`. The first positional picks the command.
    pub fn parse_args(mut self, args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut args = args.into_iter();
        let mut view = false;
        let mut link = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    self.base_url = parse_base_url(require_value(&mut args, "--base-url")?)?;
                }
                "--seed" => {
                    let raw = require_value(&mut args, "--seed")?;
                    let seed = raw
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: raw.clone() })?;
                    self.seed = Some(seed);
                }
                "--no-delay" => self.no_delay = true,
                "--verbose" | "-v" => self.verbose = true,
                "quiz" if !view && link.is_none() => {}
                "view" if !view => view = true,
                other if view && link.is_none() && !other.starts_with("--") => {
                    link = Some(arg);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        self.command = if view {
            Command::View {
                link: link.ok_or(ArgsError::MissingLink)?,
            }
        } else {
            Command::Quiz
        };
        Ok(self)
    }

    #[must_use]
    pub fn flow_config(&self) -> FlowConfig {
        let mut config = FlowConfig::default().with_share_base(self.base_url.clone());
        if self.no_delay {
            config = config
                .with_loading_delay(Duration::ZERO)
                .with_analyzing_delay(Duration::ZERO);
        }
        if let Some(seed) = self.seed {
            config = config.with_shuffle_seed(seed);
        }
        config
    }
}
