//! quipcli: fetch a random joke or the quote of the day.
//!
//! This crate provides a small command-line pipeline that calls a public joke
//! or quote endpoint, prints the result as one colorized line and can speak
//! the line to an MP3 file through a text-to-speech service.

pub mod cli;
pub mod engine;
pub mod fetch;
pub mod format;
pub mod speech;

#[cfg(test)]
mod test_support;
