//! Display line construction and rendering.

use std::fmt;

use colored::{Color, Colorize};
use thiserror::Error;

use crate::fetch::{JokePayload, Payload, QuotePayload};

/// Separator placed between the two halves of every line.
pub const SEPARATOR: &str = " - ";

/// Errors raised when a decoded response lacks the fields we need.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("Malformed response: missing field '{0}'")]
    MissingField(&'static str),

    #[error("Malformed response: field '{0}' is empty")]
    EmptyField(&'static str),

    #[error("Malformed response: quote list is empty")]
    NoQuotes,
}

/// Presentation color of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Cyan,
    Green,
    Red,
}

impl From<Tone> for Color {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Cyan => Color::Cyan,
            Tone::Green => Color::Green,
            Tone::Red => Color::Red,
        }
    }
}

/// A run of text with optional color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Option<Tone>,
}

/// The single line shown to the user.
///
/// Content and color are kept apart so the text can be checked (or spoken)
/// without any ANSI escapes in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLine {
    segments: Vec<Segment>,
}

impl DisplayLine {
    /// Create an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment.
    pub fn push(mut self, text: impl Into<String>, tone: Option<Tone>) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            tone,
        });
        self
    }

    /// A line made of one red segment, used for failures.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().push(message, Some(Tone::Red))
    }

    /// The segments making up this line.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The text content with no color applied.
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Render the line, applying segment colors when `color` is set.
    pub fn render(&self, color: bool) -> String {
        if !color {
            return self.plain();
        }

        self.segments
            .iter()
            .map(|segment| match segment.tone {
                Some(tone) => segment.text.color(Color::from(tone)).to_string(),
                None => segment.text.clone(),
            })
            .collect()
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain())
    }
}

/// How a quote line is colored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    /// Whole line in cyan.
    #[default]
    Single,
    /// Quote in cyan, author in green.
    Split,
}

/// A validated joke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeResponse {
    pub setup: String,
    pub punchline: String,
}

/// A validated quote, taken from the first entry of the quote list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteResponse {
    pub quote: String,
    pub author: String,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, FormatError> {
    match value {
        None => Err(FormatError::MissingField(field)),
        Some(text) if text.trim().is_empty() => Err(FormatError::EmptyField(field)),
        Some(text) => Ok(text),
    }
}

impl TryFrom<JokePayload> for JokeResponse {
    type Error = FormatError;

    fn try_from(payload: JokePayload) -> Result<Self, Self::Error> {
        Ok(Self {
            setup: required(payload.setup, "setup")?,
            punchline: required(payload.punchline, "punchline")?,
        })
    }
}

impl TryFrom<QuotePayload> for QuoteResponse {
    type Error = FormatError;

    fn try_from(payload: QuotePayload) -> Result<Self, Self::Error> {
        let contents = payload
            .contents
            .ok_or(FormatError::MissingField("contents"))?;
        let first = contents
            .quotes
            .into_iter()
            .next()
            .ok_or(FormatError::NoQuotes)?;

        // quotes.rest leaves the author blank for anonymous quotes
        let author = first.author.ok_or(FormatError::MissingField("author"))?;

        Ok(Self {
            quote: required(first.quote, "quote")?,
            author,
        })
    }
}

/// Render a joke as `<setup> - <punchline>`.
pub fn format_joke(joke: &JokeResponse) -> DisplayLine {
    DisplayLine::new()
        .push(joke.setup.as_str(), Some(Tone::Cyan))
        .push(SEPARATOR, None)
        .push(joke.punchline.as_str(), Some(Tone::Green))
}

/// Render a quote as `<quote> - <author>`.
pub fn format_quote(quote: &QuoteResponse, style: QuoteStyle) -> DisplayLine {
    match style {
        QuoteStyle::Single => DisplayLine::new().push(
            format!("{}{SEPARATOR}{}", quote.quote, quote.author),
            Some(Tone::Cyan),
        ),
        QuoteStyle::Split => DisplayLine::new()
            .push(quote.quote.as_str(), Some(Tone::Cyan))
            .push(SEPARATOR, None)
            .push(quote.author.as_str(), Some(Tone::Green)),
    }
}

/// Validate a decoded payload and build its display line.
pub fn format_payload(payload: Payload, style: QuoteStyle) -> Result<DisplayLine, FormatError> {
    match payload {
        Payload::Joke(joke) => Ok(format_joke(&JokeResponse::try_from(joke)?)),
        Payload::Quote(quote) => Ok(format_quote(&QuoteResponse::try_from(quote)?, style)),
    }
}
