use super::AgentClient;
use crate::model::{AgentStep, RunOutcome};
use async_trait::async_trait;
use serde_json::Map;

/// Scripted agent for tests: always returns the configured outcome.
#[derive(Debug, Default)]
pub struct FakeAgent {
    outcome: RunOutcome,
}

impl FakeAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script one completed step whose output is the given value.
    pub fn with_output(mut self, output: serde_json::Value) -> Self {
        self.outcome.steps.push(AgentStep {
            success: Some(true),
            output: Some(output),
            extra: Map::new(),
        });
        self
    }

    pub fn with_outcome(mut self, outcome: RunOutcome) -> Self {
        self.outcome = outcome;
        self
    }
}

#[async_trait]
impl AgentClient for FakeAgent {
    async fn run(&self, _task: &str, _max_steps: u32) -> anyhow::Result<RunOutcome> {
        Ok(self.outcome.clone())
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
