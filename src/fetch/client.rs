//! HTTP client for the joke and quote endpoints.

use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::Fetcher;
use super::types::{Endpoint, FetchConfig, FetchError, JokePayload, Payload, QuotePayload};

/// HTTP-based fetcher.
pub struct HttpFetcher {
    config: FetchConfig,
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with the configured timeout applied to every request.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("quipcli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Get the configuration this fetcher was built with.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Issue a single GET and decode the JSON body.
    fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, FetchError> {
        let url = self.config.url_for(endpoint);
        debug!(endpoint = endpoint.as_str(), %url, "fetching");

        let mut request = self.client.get(url);
        if endpoint.wants_json_accept() {
            request = request.header(ACCEPT, HeaderValue::from_static("application/json"));
        }

        let response = request
            .send()
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = response.status();
        debug!(endpoint = endpoint.as_str(), status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json()
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, endpoint: Endpoint) -> Result<Payload, FetchError> {
        match endpoint {
            Endpoint::Joke => self.get_json::<JokePayload>(endpoint).map(Payload::Joke),
            Endpoint::Quote => self.get_json::<QuotePayload>(endpoint).map(Payload::Quote),
        }
    }
}
