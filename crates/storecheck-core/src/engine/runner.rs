use crate::checklist::ChecklistKind;
use crate::errors::RunError;
use crate::model::CheckRecord;
use crate::normalize::normalize_outcome;
use crate::providers::AgentClient;
use crate::report::progress::{ProgressEvent, ProgressSink};
use crate::report::Reporter;
use std::sync::Arc;
use tokio::time::{timeout, Duration};

/// Sequential run engine: every checklist item against every target, one
/// in-flight agent invocation at a time. An invocation failure becomes a
/// failure record and the run moves on; nothing at this layer retries or
/// aborts.
pub struct Runner {
    client: Arc<dyn AgentClient>,
    timeout: Duration,
}

impl Runner {
    pub fn new(client: Arc<dyn AgentClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Run the full checklist against the base URL combined with each product
    /// path (or the base URL alone), merging all records into `reporter`.
    pub async fn run(
        &self,
        base_url: &str,
        products: &[String],
        reporter: &mut Reporter,
        progress: Option<ProgressSink>,
    ) {
        let targets = targets_for(base_url, products);
        let total = targets.len() * ChecklistKind::ALL.len();
        let mut done = 0;

        for url in &targets {
            eprintln!("🔍 Testing {url}...");
            for item in ChecklistKind::ALL {
                let records = self.run_item(item, url).await;
                reporter.merge(records);
                done += 1;
                if let Some(ref sink) = progress {
                    sink(ProgressEvent { done, total });
                }
            }
        }
    }

    async fn run_item(&self, item: ChecklistKind, url: &str) -> Vec<CheckRecord> {
        let task = item.task_for(url);
        let fut = self.client.run(&task, item.max_steps());
        match timeout(self.timeout, fut).await {
            Ok(Ok(outcome)) => normalize_outcome(&outcome),
            Ok(Err(e)) => {
                let err = RunError::invocation(item.agent_name(), e.to_string());
                tracing::warn!(category = item.category(), "{}", err.message);
                vec![err.into_record(item.category())]
            }
            Err(_) => {
                let err = RunError::timeout(item.agent_name());
                tracing::warn!(category = item.category(), "{}", err.message);
                vec![err.into_record(item.category())]
            }
        }
    }
}

/// Targets are the base URL joined with each product path; no paths means the
/// base URL alone is the single target.
pub fn targets_for(base_url: &str, products: &[String]) -> Vec<String> {
    if products.is_empty() {
        vec![base_url.to_string()]
    } else {
        products
            .iter()
            .map(|p| format!("{base_url}{p}"))
            .collect()
    }
}
