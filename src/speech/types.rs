//! Speech synthesis request, audio and error types.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default Cloud Text-to-Speech REST endpoint.
pub const DEFAULT_SYNTHESIS_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Default voice language.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "output.mp3";

/// Errors returned by the synthesis service.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("No speech credentials: set GOOGLE_API_KEY or GOOGLE_OAUTH_ACCESS_TOKEN")]
    MissingCredentials,

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Synthesis failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid synthesis response: {0}")]
    InvalidResponse(String),

    #[error("Audio content is not valid base64: {0}")]
    Decode(String),
}

/// Errors writing the audio file.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create output file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write audio to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Either failure of the speech stage.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Voice gender requested from the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceGender {
    #[default]
    Neutral,
}

/// Audio encoding requested from the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AudioEncoding {
    #[default]
    #[serde(rename = "MP3")]
    Mp3,
}

/// Request for speech synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_language: String,
    pub voice_gender: VoiceGender,
    pub audio_encoding: AudioEncoding,
}

impl SynthesisRequest {
    /// Create a request with the fixed voice: en-US, neutral, MP3.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_language: DEFAULT_LANGUAGE.to_string(),
            voice_gender: VoiceGender::default(),
            audio_encoding: AudioEncoding::default(),
        }
    }

    /// Set the voice language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.voice_language = language.into();
        self
    }

    /// Body in the shape the Text-to-Speech REST API expects.
    pub fn to_wire(&self) -> serde_json::Value {
        serde_json::json!({
            "input": { "text": self.text },
            "voice": {
                "languageCode": self.voice_language,
                "ssmlGender": self.voice_gender,
            },
            "audioConfig": { "audioEncoding": self.audio_encoding },
        })
    }
}

/// Response body of the synthesize call.
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    pub audio_content: String,
}

impl SynthesizeResponse {
    /// Decode the base64 audio payload.
    pub fn into_audio(self) -> Result<AudioArtifact, SynthesisError> {
        base64::engine::general_purpose::STANDARD
            .decode(self.audio_content.as_bytes())
            .map(AudioArtifact::new)
            .map_err(|e| SynthesisError::Decode(e.to_string()))
    }
}

/// Raw audio returned by the synthesis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact(Vec<u8>);

impl AudioArtifact {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Write the audio verbatim to `path`, replacing any existing file.
    pub fn persist(self, path: &Path) -> Result<usize, WriteError> {
        let mut file = fs::File::create(path).map_err(|source| WriteError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        file.write_all(&self.0)
            .and_then(|()| file.flush())
            .map_err(|source| WriteError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(self.0.len())
    }
}

/// Credential handed to the synthesis client.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Sent as the `key` query parameter.
    ApiKey(String),
    /// Sent as an `Authorization: Bearer` header.
    BearerToken(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.write_str("ApiKey(***)"),
            Credentials::BearerToken(_) => f.write_str("BearerToken(***)"),
        }
    }
}

/// Settings for the speech stage.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechConfig {
    pub endpoint: String,
    pub credentials: Option<Credentials>,
    pub language: String,
    pub output: PathBuf,
    pub timeout: Duration,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SYNTHESIS_URL.to_string(),
            credentials: None,
            language: DEFAULT_LANGUAGE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout: Duration::from_secs(30),
        }
    }
}
