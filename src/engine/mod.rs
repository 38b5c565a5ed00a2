//! Pipeline orchestrator.
//!
//! Ties the fetcher, formatter and optional speech emitter into one
//! sequential run per invocation.

mod pipeline;

pub use pipeline::{Pipeline, PipelineError};
