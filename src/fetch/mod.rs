//! Fetching jokes and quotes from the public HTTP endpoints.
//!
//! Provides the [`Fetcher`] trait and an HTTP implementation that issues
//! exactly one GET per call, with no retries.

mod client;
mod types;

pub use client::HttpFetcher;
pub use types::{
    DEFAULT_JOKE_URL, DEFAULT_QUOTE_URL, DEFAULT_TIMEOUT_SECS, Endpoint, FetchConfig, FetchError,
    JokePayload, Payload, QuoteContents, QuoteEntry, QuotePayload,
};

/// Trait for endpoint communication.
///
/// Abstracts the HTTP layer so the pipeline can be driven by mocks in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Fetcher {
    /// Fetch and decode the body of one endpoint.
    ///
    /// # Errors
    /// Network failure, a non-success status or an undecodable body.
    fn fetch(&self, endpoint: Endpoint) -> Result<Payload, FetchError>;
}
