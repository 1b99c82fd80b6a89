use serde::{Deserialize, Serialize};

/// Inner request envelope sent to the agent function.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentRequest {
    pub query: String,
    pub session_id: String,
}

/// Inner response envelope returned by the agent function.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentResponse {
    pub answer: String,
    pub metadata: Vec<SourceReference>,
    #[serde(default)]
    pub stream: bool,
}

/// One citation entry attached to an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReference {
    pub location: String,
    #[serde(rename = "pageNumber")]
    pub page_number: u32,
    pub score: f64,
}

/// Outer invocation envelope, both directions.
///
/// The deployed agent function exchanges its request and response as a
/// JSON-encoded *string* under `body`; the double encoding must be kept
/// intact for compatibility.
#[derive(Debug, Serialize, Deserialize)]
pub struct InvocationEnvelope {
    pub body: String,
}

/// A model entry advertised to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
}

/// One turn of conversation history handed over by the host.
///
/// The agent function keeps its own context keyed by session id, so the
/// history is accepted but not forwarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}
