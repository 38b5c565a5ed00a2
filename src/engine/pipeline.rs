//! Fetch, format, print and optionally speak, in that order.

use std::io::Write;

use thiserror::Error;
use tracing::debug;

use crate::fetch::{Endpoint, FetchError, Fetcher};
use crate::format::{DisplayLine, FormatError, QuoteStyle, format_payload};
use crate::speech::{SpeechEmitter, SpeechError, Synthesizer};

/// Errors that end a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("{0}")]
    Speech(#[from] SpeechError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl PipelineError {
    /// Process exit code for this failure, one per category.
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::Output(_) => 1,
            PipelineError::Fetch(_) => 3,
            PipelineError::Format(_) => 4,
            PipelineError::Speech(SpeechError::Synthesis(_)) => 5,
            PipelineError::Speech(SpeechError::Write(_)) => 6,
        }
    }

    /// The single red line shown for this failure.
    pub fn to_line(&self) -> DisplayLine {
        DisplayLine::error(self.to_string())
    }
}

/// A single fetch-to-output run, with speech as an optional last stage.
pub struct Pipeline<F: Fetcher, S: Synthesizer> {
    fetcher: F,
    speech: Option<SpeechEmitter<S>>,
    color: bool,
}

impl<F: Fetcher, S: Synthesizer> Pipeline<F, S> {
    /// Create a pipeline without the speech stage.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            speech: None,
            color: true,
        }
    }

    /// Add the speech stage.
    pub fn with_speech(mut self, emitter: SpeechEmitter<S>) -> Self {
        self.speech = Some(emitter);
        self
    }

    /// Enable or disable ANSI color in the printed line.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Whether the speech stage is attached.
    pub fn speaks(&self) -> bool {
        self.speech.is_some()
    }

    /// Quotes are split-colored only when they will also be spoken.
    fn quote_style(&self) -> QuoteStyle {
        if self.speaks() {
            QuoteStyle::Split
        } else {
            QuoteStyle::Single
        }
    }

    /// Run the pipeline for one endpoint, printing the line to `out`.
    ///
    /// Each stage completes before the next starts. The line is printed before
    /// speech runs, so a speech failure still leaves the text on screen.
    pub fn run<W: Write>(
        &self,
        endpoint: Endpoint,
        out: &mut W,
    ) -> Result<DisplayLine, PipelineError> {
        let payload = self.fetcher.fetch(endpoint)?;
        let line = format_payload(payload, self.quote_style())?;
        debug!(endpoint = endpoint.as_str(), text = %line, "formatted");

        writeln!(out, "{}", line.render(self.color))?;
        out.flush()?;

        if let Some(emitter) = &self.speech {
            emitter.emit(&line.plain())?;
        }

        Ok(line)
    }
}
