//! The pipeline adapter: one request/response translation per chat turn.

pub mod render;

// Re-export main types for convenience
pub use render::{RenderedLines, render_response};

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use crate::agent::{AgentInvoker, LambdaAgentClient};
use crate::core::config::Valves;
use crate::core::models::{AgentRequest, AgentResponse, ChatMessage, InvocationEnvelope, ModelInfo};
use crate::errors::PipelineError;

/// The single model id served by this pipeline.
pub const MODEL_ID: &str = "evy-agent";

const MODEL_NAME: &str = "Evy Agent";

/// Output of one `pipe` call.
pub enum PipeOutput {
    /// The complete rendered text.
    Full(String),
    /// The rendered text re-exposed as newline-terminated fragments.
    Stream(RenderedLines),
}

impl PipeOutput {
    /// Collects the output into one string regardless of mode.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            PipeOutput::Full(text) => text,
            PipeOutput::Stream(lines) => lines.collect(),
        }
    }
}

/// Adapter exposing the remote agent function as a chat model.
///
/// Owns the valves, the lazily-built Lambda client, and a session id that is
/// generated once per instance and sent unchanged with every request.
pub struct Pipeline {
    valves: Valves,
    invoker: Option<Arc<dyn AgentInvoker>>,
    session_id: String,
}

impl Pipeline {
    /// Creates a pipeline with valves sourced from the process environment.
    /// The Lambda client is not built until `on_startup`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_valves(Valves::from_env())
    }

    /// Creates a pipeline with explicit valves.
    #[must_use]
    pub fn with_valves(valves: Valves) -> Self {
        Self {
            valves,
            invoker: None,
            session_id: Uuid::new_v4().to_string(),
        }
    }

    #[must_use]
    pub fn valves(&self) -> &Valves {
        &self.valves
    }

    /// The id correlating every request made over this instance's lifetime.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Installs a substitute invoker, replacing any client built from valves.
    pub fn set_invoker(&mut self, invoker: Arc<dyn AgentInvoker>) {
        self.invoker = Some(invoker);
    }

    /// Builds the Lambda client from the current valves. Safe to call again;
    /// the previous handle is fully replaced.
    pub async fn on_startup(&mut self) {
        self.invoker = Some(Arc::new(LambdaAgentClient::connect(&self.valves).await));
    }

    /// Reserved for host lifecycle symmetry.
    pub async fn on_shutdown(&mut self) {}

    /// Replaces the valves and rebuilds the Lambda client with the updated
    /// credentials, region, and function name.
    pub async fn on_valves_updated(&mut self, valves: Valves) {
        self.valves = valves;
        self.on_startup().await;
    }

    /// Models served by this pipeline, as advertised to the host.
    #[must_use]
    pub fn pipelines(&self) -> Vec<ModelInfo> {
        vec![ModelInfo {
            id: MODEL_ID.to_string(),
            name: MODEL_NAME.to_string(),
        }]
    }

    /// Handles one chat turn.
    ///
    /// The conversation history and raw request body are accepted for host
    /// compatibility and ignored; the agent function keeps its own context
    /// keyed by session id.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::UnknownModel` when `model_id` is not
    /// [`MODEL_ID`]. Every other failure (payload construction, invocation,
    /// decoding) is converted into ordinary output text of the form
    /// `"Error: <message>"` and never surfaces as an error.
    pub async fn pipe(
        &self,
        user_message: &str,
        model_id: &str,
        _messages: &[ChatMessage],
        _body: &Value,
    ) -> Result<PipeOutput, PipelineError> {
        if model_id != MODEL_ID {
            return Err(PipelineError::UnknownModel(model_id.to_string()));
        }

        match self.run_query(user_message).await {
            Ok(response) => {
                let rendered = render_response(&response.answer, &response.metadata);
                if response.stream {
                    Ok(PipeOutput::Stream(RenderedLines::new(rendered)))
                } else {
                    Ok(PipeOutput::Full(rendered))
                }
            }
            Err(e) => {
                error!("Agent invocation failed: {}", e);
                Ok(PipeOutput::Full(format!("Error: {e}")))
            }
        }
    }

    /// One round-trip to the agent function, error union intact.
    async fn run_query(&self, user_message: &str) -> Result<AgentResponse, PipelineError> {
        let invoker = self
            .invoker
            .as_ref()
            .ok_or(PipelineError::ClientNotInitialized)?;

        let request = AgentRequest {
            query: user_message.to_string(),
            session_id: self.session_id.clone(),
        };
        // The deployed function expects the inner envelope as a JSON-encoded
        // string under `body`, and replies with the same nesting.
        let envelope = InvocationEnvelope {
            body: serde_json::to_string(&request)?,
        };
        let payload = serde_json::to_vec(&envelope)?;

        info!(
            "Sending query to {} (session {})",
            self.valves.lambda_function_name, self.session_id
        );
        let raw = invoker
            .invoke(&self.valves.lambda_function_name, payload)
            .await?;

        let envelope: InvocationEnvelope = serde_json::from_slice(&raw)?;
        let response: AgentResponse = serde_json::from_str(&envelope.body)?;
        Ok(response)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
