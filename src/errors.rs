use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Unknown model ID: {0}")]
    UnknownModel(String),

    #[error("Lambda client is not initialized")]
    ClientNotInitialized,

    #[error("Failed to invoke agent function: {0}")]
    Invocation(String),

    #[error("Failed to decode agent response: {0}")]
    MalformedResponse(String),
}

impl From<serde_json::Error> for PipelineError {
    fn from(error: serde_json::Error) -> Self {
        PipelineError::MalformedResponse(error.to_string())
    }
}

impl From<anyhow::Error> for PipelineError {
    fn from(error: anyhow::Error) -> Self {
        PipelineError::Invocation(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E> From<aws_sdk_lambda::error::SdkError<E>> for PipelineError
where
    E: std::fmt::Display,
{
    fn from(error: aws_sdk_lambda::error::SdkError<E>) -> Self {
        PipelineError::Invocation(error.to_string())
    }
}
