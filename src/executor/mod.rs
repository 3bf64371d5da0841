//! The code execution boundary.
//!
//! Generated (or hand-edited) script text is handed to an external service that runs it
//! and returns its output. Each call is a single request: there is no cancellation and no
//! retry, and every failure is reported as an [`ExecutionError`].

use crate::error::ExecutionError;
use serde::{Deserialize, Serialize};
use std::future::Future;

mod http;

pub use http::HttpExecutor;

/// The body sent to the execution service.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteRequest<'a> {
    pub code: &'a str,
}

/// A successful execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutput {
    pub output: String,
}

/// Anything that can run script text.
pub trait CodeExecutor {
    fn execute(&self, code: &str)
    -> impl Future<Output = Result<ExecutionOutput, ExecutionError>> + Send;
}

/// Classifies a raw service response.
///
/// A 2xx status with a JSON body holding an `output` string is a success. A non-2xx status,
/// a body without `output`, or a non-empty `error` (or `detail`) field are failures. An
/// `error` that is `null` or `""` counts as absent.
pub fn interpret_response(status: u16, body: &str) -> Result<ExecutionOutput, ExecutionError> {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let error_message = parsed.as_ref().and_then(|value| {
        ["error", "detail"]
            .iter()
            .find_map(|key| value.get(*key).filter(|v| !is_blank(v)))
            .map(|e| match e.as_str() {
                Some(s) => s.to_string(),
                None => e.to_string(),
            })
    });

    if !(200..300).contains(&status) {
        return Err(ExecutionError::Status {
            status,
            message: error_message.unwrap_or_else(|| body.trim().to_string()),
        });
    }

    if let Some(message) = error_message {
        return Err(ExecutionError::Remote(message));
    }

    let value = parsed.ok_or_else(|| {
        ExecutionError::MalformedResponse("response body is not valid JSON".to_string())
    })?;

    value
        .get("output")
        .and_then(|o| o.as_str())
        .map(|output| ExecutionOutput {
            output: output.to_string(),
        })
        .ok_or_else(|| {
            ExecutionError::MalformedResponse("response has no string 'output' field".to_string())
        })
}

fn is_blank(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    }
}
