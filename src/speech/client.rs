//! HTTP client for the Cloud Text-to-Speech REST API.

use tracing::debug;

use super::Synthesizer;
use super::types::{
    AudioArtifact, Credentials, SpeechConfig, SynthesisError, SynthesisRequest, SynthesizeResponse,
};

/// Synthesizer backed by Google Cloud Text-to-Speech.
pub struct GoogleTtsClient {
    endpoint: String,
    credentials: Credentials,
    client: reqwest::blocking::Client,
}

impl GoogleTtsClient {
    /// Create a client from the speech settings.
    ///
    /// Fails with [`SynthesisError::MissingCredentials`] when no credential is set,
    /// so a misconfigured run stops before any request is made.
    pub fn new(config: &SpeechConfig) -> Result<Self, SynthesisError> {
        let credentials = config
            .credentials
            .clone()
            .ok_or(SynthesisError::MissingCredentials)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SynthesisError::Client(e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            credentials,
            client,
        })
    }

    /// Get the endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Synthesizer for GoogleTtsClient {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact, SynthesisError> {
        debug!(
            endpoint = %self.endpoint,
            language = %request.voice_language,
            chars = request.text.chars().count(),
            "synthesizing speech"
        );

        let mut builder = self.client.post(&self.endpoint).json(&request.to_wire());
        builder = match &self.credentials {
            Credentials::ApiKey(key) => builder.query(&[("key", key.as_str())]),
            Credentials::BearerToken(token) => builder.bearer_auth(token),
        };

        let response = builder
            .send()
            .map_err(|e| SynthesisError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SynthesisError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: SynthesizeResponse = response
            .json()
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))?;

        body.into_audio()
    }
}
