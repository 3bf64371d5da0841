use super::{CodeExecutor, ExecuteRequest, ExecutionOutput, interpret_response};
use crate::config::ExecutionConfig;
use crate::error::ExecutionError;
use std::time::Duration;

/// Runs scripts by POSTing them to `<endpoint>/execute`.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
    execute_url: String,
}

impl HttpExecutor {
    pub fn new(config: &ExecutionConfig) -> Result<Self, ExecutionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ExecutionError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            execute_url: format!("{}/execute", config.endpoint.trim_end_matches('/')),
        })
    }

    pub fn execute_url(&self) -> &str {
        &self.execute_url
    }
}

impl CodeExecutor for HttpExecutor {
    async fn execute(&self, code: &str) -> Result<ExecutionOutput, ExecutionError> {
        tracing::info!(url = %self.execute_url, bytes = code.len(), "submitting script");

        let response = self
            .client
            .post(&self.execute_url)
            .json(&ExecuteRequest { code })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "execution request failed");
                ExecutionError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ExecutionError::Transport(format!("failed to read response: {}", e)))?;

        let result = interpret_response(status, &body);
        match &result {
            Ok(output) => tracing::info!(status, bytes = output.output.len(), "script executed"),
            Err(e) => tracing::error!(status, error = %e, "script execution failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_url_joins_without_double_slash() {
        let config = ExecutionConfig {
            endpoint: "http://localhost:8000/api/".to_string(),
            timeout_secs: 5,
        };
        let executor = HttpExecutor::new(&config).unwrap();
        assert_eq!(executor.execute_url(), "http://localhost:8000/api/execute");
    }
}
