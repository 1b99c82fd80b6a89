//! Evy Agent pipeline - exposes a retrieval agent running on AWS Lambda as a
//! conversational model inside a chat-pipeline host.
//!
//! The crate is a single request/response translator: each chat turn is
//! forwarded to the configured Lambda function together with a
//! process-lifetime session id, and the structured answer (text plus
//! citation metadata) is rendered into the reply shown to the user, either
//! as one string or as newline-terminated fragments.
//!
//! # Architecture
//!
//! The system uses:
//! - aws-sdk-lambda for the synchronous `Invoke` round-trip
//! - serde/serde_json for the double-encoded request/response envelopes
//! - Tokio for the async runtime
//! - tracing for structured logging
//!
//! # Example
//!
//! ```no_run
//! use evy_pipeline::core::config::Valves;
//! use evy_pipeline::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     evy_pipeline::setup_logging();
//!
//!     let mut pipeline = Pipeline::with_valves(Valves::from_env());
//!     pipeline.on_startup().await;
//!
//!     let output = pipeline
//!         .pipe(
//!             "Where can I charge overnight?",
//!             "evy-agent",
//!             &[],
//!             &serde_json::json!({}),
//!         )
//!         .await?;
//!     println!("{}", output.into_text());
//!     Ok(())
//! }
//! ```
// Module declarations
pub mod agent;
pub mod core;
pub mod errors;
pub mod pipeline;

pub use errors::PipelineError;
pub use pipeline::{MODEL_ID, PipeOutput, Pipeline};

/// Configure structured logging with JSON format for chat-host environments.
///
/// This function sets up tracing-subscriber with a JSON formatter. It should
/// be called once by the embedding process before the first chat turn.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
