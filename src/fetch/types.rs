//! Fetcher configuration, payload and error types.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default joke endpoint.
pub const DEFAULT_JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// Default quote-of-the-day endpoint.
pub const DEFAULT_QUOTE_URL: &str = "https://quotes.rest/qod";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur while fetching from an endpoint.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Could not decode response: {0}")]
    Decode(String),
}

/// The upstream endpoints this tool knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Joke,
    Quote,
}

impl Endpoint {
    /// Returns the short name used on the command line and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Joke => "joke",
            Endpoint::Quote => "quote",
        }
    }

    /// Whether the endpoint needs an explicit `Accept: application/json` header.
    pub fn wants_json_accept(&self) -> bool {
        matches!(self, Endpoint::Quote)
    }
}

/// Endpoint URLs and transport settings for the fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub joke_url: String,
    pub quote_url: String,
    pub timeout: Duration,
}

impl FetchConfig {
    /// Returns the URL configured for an endpoint.
    pub fn url_for(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Joke => &self.joke_url,
            Endpoint::Quote => &self.quote_url,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            joke_url: DEFAULT_JOKE_URL.to_string(),
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Body of the joke endpoint.
///
/// Fields are optional here; presence is checked by the formatter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JokePayload {
    #[serde(default)]
    pub setup: Option<String>,
    #[serde(default)]
    pub punchline: Option<String>,
}

/// Body of the quote-of-the-day endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuotePayload {
    #[serde(default)]
    pub contents: Option<QuoteContents>,
}

/// The `contents` object of a quote response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuoteContents {
    #[serde(default)]
    pub quotes: Vec<QuoteEntry>,
}

/// A single entry of the `quotes` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuoteEntry {
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl QuotePayload {
    /// Build a payload holding the given `(quote, author)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let quotes = pairs
            .into_iter()
            .map(|(quote, author)| QuoteEntry {
                quote: Some(quote.to_string()),
                author: Some(author.to_string()),
            })
            .collect();

        Self {
            contents: Some(QuoteContents { quotes }),
        }
    }
}

impl JokePayload {
    /// Build a payload with both fields set.
    pub fn new(setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        Self {
            setup: Some(setup.into()),
            punchline: Some(punchline.into()),
        }
    }
}

/// A decoded response body from either endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Joke(JokePayload),
    Quote(QuotePayload),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joke_payload_deserialize_ignores_extra_fields() {
        let json = r#"{
            "type": "general",
            "setup": "Why did the chicken cross the road?",
            "punchline": "To get to the other side.",
            "id": 42
        }"#;

        let payload: JokePayload = serde_json::from_str(json).unwrap();
        assert_eq!(
            payload.setup.as_deref(),
            Some("Why did the chicken cross the road?")
        );
        assert_eq!(payload.punchline.as_deref(), Some("To get to the other side."));
    }

    #[test]
    fn test_joke_payload_missing_fields_decode_as_none() {
        let payload: JokePayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, JokePayload::default());
    }

    #[test]
    fn test_quote_payload_deserialize_nested_list() {
        let json = r#"{
            "success": {"total": 1},
            "contents": {
                "quotes": [
                    {"quote": "Be yourself.", "author": "Oscar Wilde", "length": 12},
                    {"quote": "Second", "author": "Someone"}
                ]
            }
        }"#;

        let payload: QuotePayload = serde_json::from_str(json).unwrap();
        let contents = payload.contents.unwrap();
        assert_eq!(contents.quotes.len(), 2);
        assert_eq!(contents.quotes[0].author.as_deref(), Some("Oscar Wilde"));
    }

    #[test]
    fn test_quote_payload_without_contents() {
        let json = r#"{"error": {"code": 429, "message": "Too Many Requests"}}"#;
        let payload: QuotePayload = serde_json::from_str(json).unwrap();
        assert!(payload.contents.is_none());
    }

    #[test]
    fn test_fetch_config_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.url_for(Endpoint::Joke), DEFAULT_JOKE_URL);
        assert_eq!(config.url_for(Endpoint::Quote), DEFAULT_QUOTE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_only_quote_wants_json_accept() {
        assert!(Endpoint::Quote.wants_json_accept());
        assert!(!Endpoint::Joke.wants_json_accept());
    }
}
