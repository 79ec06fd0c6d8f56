use super::AgentClient;
use crate::errors::AgentTransportError;
use crate::model::RunOutcome;
use async_trait::async_trait;
use serde_json::json;

/// Default endpoint of the local browser-agent service.
pub const DEFAULT_AGENT_URL: &str = "http://127.0.0.1:9321/run";

/// Client for a browser-automation agent exposed over HTTP: POSTs the task
/// brief and step budget, gets back the run outcome as JSON.
pub struct HttpAgentClient {
    pub endpoint: String,
    client: reqwest::Client,
}

impl HttpAgentClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AgentClient for HttpAgentClient {
    async fn run(&self, task: &str, max_steps: u32) -> anyhow::Result<RunOutcome> {
        let body = json!({
            "task": task,
            "max_steps": max_steps,
        });

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(AgentTransportError::from)?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_else(|_| String::new());
            return Err(AgentTransportError::Status { status, body }.into());
        }

        let outcome = resp
            .json::<RunOutcome>()
            .await
            .map_err(|e| AgentTransportError::Decode(e.to_string()))?;
        Ok(outcome)
    }

    fn provider_name(&self) -> &'static str {
        "browser-agent"
    }
}
