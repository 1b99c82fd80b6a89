use std::env;

pub const DEFAULT_AWS_REGION: &str = "us-east-1";
pub const DEFAULT_FUNCTION_NAME: &str = "evy-agent";

/// Host-editable settings ("valves") for the pipeline.
///
/// Every field has a default, so construction never fails. Missing or empty
/// credentials are not validated here; they surface as a remote invocation
/// failure on the first call.
#[derive(Debug, Clone)]
pub struct Valves {
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub aws_region: String,
    pub lambda_function_name: String,
}

impl Valves {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            aws_access_key_id: env::var("AWS_ACCESS_KEY_ID").unwrap_or_default(),
            aws_secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").unwrap_or_default(),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_AWS_REGION.to_string()),
            lambda_function_name: env::var("LAMBDA_FUNCTION_NAME")
                .unwrap_or_else(|_| DEFAULT_FUNCTION_NAME.to_string()),
        }
    }
}

impl Default for Valves {
    fn default() -> Self {
        Self {
            aws_access_key_id: String::new(),
            aws_secret_access_key: String::new(),
            aws_region: DEFAULT_AWS_REGION.to_string(),
            lambda_function_name: DEFAULT_FUNCTION_NAME.to_string(),
        }
    }
}
