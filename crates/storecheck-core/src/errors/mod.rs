//! Failure classification for agent invocations, and the typed transport
//! error for the HTTP agent client. Invocation failures are recovered into
//! check records by the run engine; only report persistence can fail the run.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunErrorKind {
    Timeout,
    Invocation,
}

/// A recovered per-invocation failure, carrying the human-readable message
/// that ends up in the failure record's `details.raw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunError {
    pub kind: RunErrorKind,
    pub message: String,
}

impl RunError {
    pub fn timeout(agent_name: &str) -> Self {
        Self {
            kind: RunErrorKind::Timeout,
            message: format!("{agent_name} timed out"),
        }
    }

    pub fn invocation(agent_name: &str, detail: impl Into<String>) -> Self {
        Self {
            kind: RunErrorKind::Invocation,
            message: format!("{agent_name} failed: {}", detail.into()),
        }
    }

    /// Fold this failure into a record under the checklist item's category.
    pub fn into_record(self, category: &str) -> crate::model::CheckRecord {
        crate::model::CheckRecord::raw(category, self.message)
    }
}

/// Transport-level errors from the agent service.
#[derive(Debug, thiserror::Error)]
pub enum AgentTransportError {
    /// Service answered with a non-success status.
    #[error("agent service error (status {status}): {body}")]
    Status { status: u16, body: String },

    /// Connection, DNS, or protocol failure.
    #[error("agent service unreachable: {0}")]
    Network(String),

    /// Body did not decode into a run outcome.
    #[error("invalid agent outcome payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for AgentTransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
