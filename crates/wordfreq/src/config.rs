//! Command line configuration

use std::path::PathBuf;

use thiserror::Error;
use url::Url;
use wordfreq_analyser::DEFAULT_TOP_WORDS;
use wordfreq_net::{NetResult, DEFAULT_TIMEOUT_SECS};

/// Where the HTML comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetch over HTTP(S)
    Url(String),
    /// Read a local file
    File(PathBuf),
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Page to analyse
    pub source: Source,
    /// How many words to report
    pub top: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Directory the JSON report is written to
    pub output_dir: PathBuf,
}

impl Config {
    /// Config with defaults for everything but the source
    pub fn new(source: Source) -> Self {
        Self {
            source,
            top: DEFAULT_TOP_WORDS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_dir: PathBuf::from("."),
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Run(Config),
}

/// Command line errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing URL argument")]
    MissingSource,

    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Parse arguments (program name excluded)
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut source = None;
    let mut top = DEFAULT_TOP_WORDS;
    let mut timeout_secs = DEFAULT_TIMEOUT_SECS;
    let mut output_dir = PathBuf::from(".");

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--top" | "-n" => top = parse_number(&arg, args.next())?,
            "--timeout" | "-t" => timeout_secs = parse_number(&arg, args.next())?,
            "--output-dir" | "-o" => {
                output_dir = PathBuf::from(value_of(&arg, args.next())?);
            }
            "--file" => {
                let path = value_of(&arg, args.next())?;
                set_source(&mut source, Source::File(PathBuf::from(path)))?;
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(ConfigError::UnknownOption(arg));
            }
            _ => set_source(&mut source, Source::Url(arg))?,
        }
    }

    let source = source.ok_or(ConfigError::MissingSource)?;
    Ok(Command::Run(Config {
        top,
        timeout_secs,
        output_dir,
        ..Config::new(source)
    }))
}

fn value_of(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value_of(flag, value)?;
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

fn set_source(slot: &mut Option<Source>, source: Source) -> Result<(), ConfigError> {
    if slot.is_some() {
        let extra = match source {
            Source::Url(url) => url,
            Source::File(path) => path.display().to_string(),
        };
        return Err(ConfigError::UnexpectedArgument(extra));
    }
    *slot = Some(source);
    Ok(())
}

/// Parse a URL, assuming https when no scheme is given
pub fn normalize_url(input: &str) -> NetResult<Url> {
    let url = if input.contains("://") {
        Url::parse(input)?
    } else {
        Url::parse(&format!("https://{}", input))?
    };
    Ok(url)
}
