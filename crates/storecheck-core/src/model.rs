use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category assigned when the agent output carries no usable category of its own.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One canonical check result. Every record carries all four fields; the
/// normalizer fills defaults so downstream code never sees a partial shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRecord {
    pub category: String,
    pub success: bool,
    pub partial: bool,
    /// Always a JSON object. Free-form: agents may attach `issues`, extracted
    /// elements, or a `raw` explanation for unstructured output.
    pub details: Value,
}

impl CheckRecord {
    /// A failure record whose only detail is a raw explanation string.
    pub fn raw(category: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            success: false,
            partial: false,
            details: serde_json::json!({ "raw": raw.into() }),
        }
    }

    pub fn unknown_raw(raw: impl Into<String>) -> Self {
        Self::raw(UNKNOWN_CATEGORY, raw)
    }

    /// Length of the `details.issues` array, 0 when absent or not an array.
    pub fn issue_count(&self) -> usize {
        self.details
            .get("issues")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

/// Derived statistics over a record list. Recomputed from the records on
/// demand, never maintained incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub partial: usize,
    pub total_issues: usize,
}

/// The persisted report: summary plus the full ordered record list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    pub results: Vec<CheckRecord>,
}

/// One step of an agent run as reported by the agent service. The schema is
/// not ours: `output` may be a string, object, array, or absent, and unknown
/// fields are preserved rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw outcome of one agent invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunOutcome {
    #[serde(default)]
    pub steps: Vec<AgentStep>,
}

impl RunOutcome {
    /// The last completed step, if any step completed at all.
    pub fn last_step(&self) -> Option<&AgentStep> {
        self.steps.last()
    }
}
