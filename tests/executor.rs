//! Tests for the code execution boundary.
mod common;
use common::*;
use nlpflow::config::ExecutionConfig;
use nlpflow::executor::interpret_response;
use nlpflow::prelude::*;
use std::sync::Mutex;

/// Records submitted scripts and answers with a canned response.
struct RecordingExecutor {
    submitted: Mutex<Vec<String>>,
    response: (u16, &'static str),
}

impl RecordingExecutor {
    fn answering(status: u16, body: &'static str) -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            response: (status, body),
        }
    }
}

impl CodeExecutor for RecordingExecutor {
    async fn execute(&self, code: &str) -> std::result::Result<ExecutionOutput, ExecutionError> {
        self.submitted.lock().unwrap().push(code.to_string());
        interpret_response(self.response.0, self.response.1)
    }
}

#[test]
fn test_compiled_script_is_submitted_verbatim() {
    let executor = RecordingExecutor::answering(200, r#"{"output": "Results:\nTokens: ['Hello', 'world']\n"}"#);
    let script = compile_pipeline(&create_linear_chain());

    let result = tokio_test::block_on(executor.execute(script.as_str())).unwrap();
    assert!(result.output.starts_with("Results:"));
    assert_eq!(executor.submitted.lock().unwrap().as_slice(), [script.text.clone()]);
}

#[test]
fn test_every_failure_maps_to_the_same_user_message() {
    let failures = [
        RecordingExecutor::answering(500, r#"{"error": "Internal"}"#),
        RecordingExecutor::answering(200, r#"{"error": "SyntaxError"}"#),
        RecordingExecutor::answering(200, "<html>oops</html>"),
    ];
    for executor in &failures {
        let err = tokio_test::block_on(executor.execute("print(1)")).unwrap_err();
        assert_eq!(err.user_message(), "An error occurred while executing the code.");
    }
}

#[test]
fn test_unreachable_service_is_a_transport_error() {
    // Port 9 on loopback is not expected to be listening.
    let config = ExecutionConfig {
        endpoint: "http://127.0.0.1:9/api".to_string(),
        timeout_secs: 2,
    };
    let executor = HttpExecutor::new(&config).unwrap();
    assert_eq!(executor.execute_url(), "http://127.0.0.1:9/api/execute");

    let err = tokio_test::block_on(executor.execute("print('hi')")).unwrap_err();
    assert!(matches!(err, ExecutionError::Transport(_)), "got {:?}", err);
    assert_eq!(err.user_message(), ExecutionError::USER_MESSAGE);
}
