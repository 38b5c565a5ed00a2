//! Text-to-speech output.
//!
//! The synthesis service is reached through the [`Synthesizer`] trait; the
//! [`SpeechEmitter`] drives one call and saves the returned audio to a file.

mod client;
mod emitter;
mod types;

pub use client::GoogleTtsClient;
pub use emitter::SpeechEmitter;
pub use types::{
    AudioArtifact, AudioEncoding, Credentials, DEFAULT_LANGUAGE, DEFAULT_OUTPUT,
    DEFAULT_SYNTHESIS_URL, SpeechConfig, SpeechError, SynthesisError, SynthesisRequest,
    SynthesizeResponse, VoiceGender, WriteError,
};

/// Trait for speech synthesis services.
#[cfg_attr(test, mockall::automock)]
pub trait Synthesizer {
    /// Synthesize speech for the request.
    ///
    /// # Returns
    /// The encoded audio exactly as the service produced it
    fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact, SynthesisError>;
}
