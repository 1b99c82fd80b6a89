use std::error::Error;

use evy_pipeline::errors::PipelineError;

#[test]
fn test_pipeline_error_implements_error_trait() {
    // Verify PipelineError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = PipelineError::UnknownModel("gpt-4".to_string());
    assert_error(&error);
}

#[test]
fn test_pipeline_error_display() {
    // Verify Display implementation works correctly
    let error = PipelineError::UnknownModel("gpt-4".to_string());
    assert_eq!(format!("{error}"), "Unknown model ID: gpt-4");

    let error = PipelineError::ClientNotInitialized;
    assert_eq!(format!("{error}"), "Lambda client is not initialized");

    let error = PipelineError::Invocation("connection reset".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to invoke agent function: connection reset"
    );

    let error = PipelineError::MalformedResponse("missing field `body`".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to decode agent response: missing field `body`"
    );
}

#[test]
fn test_pipeline_error_from_conversions() {
    // Test conversion from anyhow::Error
    let err = anyhow::anyhow!("test error");
    let pipeline_err: PipelineError = err.into();

    match pipeline_err {
        PipelineError::Invocation(msg) => assert!(msg.contains("test error")),
        _ => panic!("Unexpected error type"),
    }

    // Test conversion from serde_json::Error
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let pipeline_err: PipelineError = json_err.into();
    assert!(matches!(pipeline_err, PipelineError::MalformedResponse(_)));

    // We can't easily construct an SdkError directly, but we can verify
    // that the From<SdkError<E>> trait is implemented by checking that
    // our conversion function compiles
    #[allow(unused)]
    fn _check_sdk_conversion(
        err: aws_sdk_lambda::error::SdkError<aws_sdk_lambda::operation::invoke::InvokeError>,
    ) -> PipelineError {
        // This function is never called, it just verifies the conversion exists
        PipelineError::from(err)
    }
}
