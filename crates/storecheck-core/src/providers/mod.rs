//! The agent capability seam. The run engine only ever sees this trait, so
//! any browser/LLM automation backend can sit behind it.

pub mod fake;
pub mod http;

use crate::model::RunOutcome;
use async_trait::async_trait;

#[async_trait]
pub trait AgentClient: Send + Sync {
    /// Run one task against the agent, bounded by a step budget. Retries and
    /// browser/session management are the implementation's concern.
    async fn run(&self, task: &str, max_steps: u32) -> anyhow::Result<RunOutcome>;

    fn provider_name(&self) -> &'static str;
}
