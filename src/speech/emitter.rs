//! Speech stage: synthesize a line and save the audio.

use std::path::{Path, PathBuf};

use tracing::info;

use super::Synthesizer;
use super::types::{SpeechError, SynthesisRequest};

/// Sends display text to a [`Synthesizer`] and writes the audio to disk.
pub struct SpeechEmitter<S: Synthesizer> {
    synthesizer: S,
    language: String,
    output: PathBuf,
}

impl<S: Synthesizer> SpeechEmitter<S> {
    /// Create a new emitter writing to `output`.
    pub fn new(synthesizer: S, language: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            synthesizer,
            language: language.into(),
            output: output.into(),
        }
    }

    /// Path the audio is written to.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Synthesize `text` with one service call and overwrite the output file.
    ///
    /// Returns the number of bytes written. Nothing is written if synthesis fails.
    pub fn emit(&self, text: &str) -> Result<usize, SpeechError> {
        let request = SynthesisRequest::new(text).with_language(self.language.as_str());
        let audio = self.synthesizer.synthesize(&request)?;

        let written = audio.persist(&self.output)?;
        info!(path = %self.output.display(), bytes = written, "audio saved");

        Ok(written)
    }
}
