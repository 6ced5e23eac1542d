use std::env;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_QUESTION_COUNT: usize = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY (or CHATGPT_API_KEY) is not set")]
    MissingApiKey,

    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct TriviaConfig {
    pub api_key: String,
    pub model: String,
    /// Upper bound on one generation request.
    pub timeout: Duration,
    pub question_count: usize,
}

impl TriviaConfig {
    /// Reads the process environment. Call `dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .or_else(|| lookup("CHATGPT_API_KEY"))
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = lookup("TRIVIA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_secs = match lookup("TRIVIA_TIMEOUT_SECS") {
            Some(value) => parse_positive("TRIVIA_TIMEOUT_SECS", value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let question_count = match lookup("TRIVIA_QUESTION_COUNT") {
            Some(value) => parse_positive("TRIVIA_QUESTION_COUNT", value)? as usize,
            None => DEFAULT_QUESTION_COUNT,
        };

        Ok(Self {
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
            question_count,
        })
    }
}

fn parse_positive(name: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { name, value }),
    }
}
