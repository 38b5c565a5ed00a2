//! CLI argument definitions and parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::fetch::{DEFAULT_JOKE_URL, DEFAULT_QUOTE_URL, Endpoint, FetchConfig};
use crate::speech::{
    Credentials, DEFAULT_LANGUAGE, DEFAULT_OUTPUT, DEFAULT_SYNTHESIS_URL, SpeechConfig,
};

/// Fetch a random joke or the quote of the day.
#[derive(Parser, Debug)]
#[command(name = "quipcli")]
#[command(about = "Fetch a random joke or the quote of the day, optionally spoken to an MP3")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Also synthesize the line to speech and save it as MP3
    #[arg(short, long, global = true)]
    pub speak: bool,

    /// Output audio file used with --speak
    #[arg(short, long, global = true, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Timeout in seconds for each HTTP request
    #[arg(short, long, global = true, default_value_t = crate::fetch::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Joke endpoint URL
    #[arg(long, global = true, default_value = DEFAULT_JOKE_URL)]
    pub joke_url: String,

    /// Quote-of-the-day endpoint URL
    #[arg(long, global = true, default_value = DEFAULT_QUOTE_URL)]
    pub quote_url: String,

    /// Text-to-speech endpoint URL
    #[arg(long, global = true, default_value = DEFAULT_SYNTHESIS_URL, hide = true)]
    pub tts_url: String,

    /// API key for the text-to-speech service
    #[arg(long, global = true, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// OAuth access token for the text-to-speech service (used when no API key is set)
    #[arg(long, global = true, env = "GOOGLE_OAUTH_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Voice language code
    #[arg(long, global = true, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Print without ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// What to fetch.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fetching your joke
    Joke,

    /// Fetching a quote
    Quote,
}

impl Command {
    /// The endpoint this command reads from.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Command::Joke => Endpoint::Joke,
            Command::Quote => Endpoint::Quote,
        }
    }
}

impl Args {
    /// Fetcher settings taken from the arguments.
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            joke_url: self.joke_url.clone(),
            quote_url: self.quote_url.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }

    /// Speech settings taken from the arguments.
    pub fn speech_config(&self) -> SpeechConfig {
        let credentials =
            resolve_credentials(self.api_key.as_deref(), self.access_token.as_deref());

        SpeechConfig {
            endpoint: self.tts_url.clone(),
            credentials,
            language: self.language.clone(),
            output: self.output.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Pick the speech credential. A non-empty API key wins over an access token.
pub fn resolve_credentials(
    api_key: Option<&str>,
    access_token: Option<&str>,
) -> Option<Credentials> {
    match (api_key, access_token) {
        (Some(key), _) if !key.is_empty() => Some(Credentials::ApiKey(key.to_string())),
        (_, Some(token)) if !token.is_empty() => Some(Credentials::BearerToken(token.to_string())),
        _ => None,
    }
}
