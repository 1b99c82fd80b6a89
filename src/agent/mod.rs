//! All agent invocation functionality

pub mod client;

// Re-export main types for convenience
pub use client::{AgentInvoker, LambdaAgentClient};
