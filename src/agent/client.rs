//! Lambda client for the agent function.
//!
//! Encapsulates the synchronous `Invoke` round-trip behind a trait so the
//! remote collaborator can be substituted in tests.

use async_trait::async_trait;
use aws_sdk_lambda::Client as LambdaClient;
use aws_sdk_lambda::config::{Credentials, Region};
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use tracing::info;

use crate::core::config::Valves;
use crate::errors::PipelineError;

/// Request/response invocation of a named remote function.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    /// Invokes `function_name` with `payload` and returns the raw response
    /// payload once the function has finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the invocation fails in transport or the response
    /// carries no payload.
    async fn invoke(
        &self,
        function_name: &str,
        payload: Vec<u8>,
    ) -> Result<Vec<u8>, PipelineError>;
}

/// Production invoker backed by `aws-sdk-lambda`.
pub struct LambdaAgentClient {
    client: LambdaClient,
}

impl LambdaAgentClient {
    /// Builds a client from the valves' static credentials and region.
    pub async fn connect(valves: &Valves) -> Self {
        let credentials = Credentials::new(
            valves.aws_access_key_id.clone(),
            valves.aws_secret_access_key.clone(),
            None,
            None,
            "pipeline-valves",
        );
        let shared_config = aws_config::from_env()
            .credentials_provider(credentials)
            .region(Region::new(valves.aws_region.clone()))
            .load()
            .await;

        Self {
            client: LambdaClient::new(&shared_config),
        }
    }
}

#[async_trait]
impl AgentInvoker for LambdaAgentClient {
    async fn invoke(
        &self,
        function_name: &str,
        payload: Vec<u8>,
    ) -> Result<Vec<u8>, PipelineError> {
        info!("Invoking agent function {}", function_name);

        let response = self
            .client
            .invoke()
            .function_name(function_name)
            .invocation_type(InvocationType::RequestResponse)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|e| {
                PipelineError::Invocation(format!("Failed to invoke {function_name}: {e}"))
            })?;

        let payload = response.payload().ok_or_else(|| {
            PipelineError::MalformedResponse("Response payload is empty".to_string())
        })?;
        Ok(payload.as_ref().to_vec())
    }
}
