//! Turning decoded responses into display lines.

mod display;

pub use display::{
    DisplayLine, FormatError, JokeResponse, QuoteResponse, QuoteStyle, SEPARATOR, Segment, Tone,
    format_joke, format_payload, format_quote,
};
