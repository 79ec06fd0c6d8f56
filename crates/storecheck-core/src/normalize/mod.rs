//! Normalizes raw agent-run outcomes into canonical check records.
//!
//! Agents answer in whatever shape the underlying LLM produced: a JSON
//! object, an array of objects, a JSON-encoded string, or free text. The
//! shape is resolved exactly once into [`StepOutput`] at this boundary; every
//! arm maps to a well-formed record list, so no input can fail or panic.

use crate::model::{CheckRecord, RunOutcome, UNKNOWN_CATEGORY};
use serde_json::{Map, Value};

/// Explanation stored when an agent run produced no completed step.
pub const NO_STEPS_MESSAGE: &str = "No steps completed";

/// Agent output shape, resolved once at the normalization boundary.
#[derive(Debug)]
enum StepOutput {
    Object(Map<String, Value>),
    Array(Vec<Value>),
    /// Text that failed strict JSON decoding.
    Text(String),
    /// Decoded, but neither object nor array (number, bool, null, ...).
    Other(Value),
}

fn classify(output: Value) -> StepOutput {
    match output {
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => StepOutput::Object(map),
            Ok(Value::Array(items)) => StepOutput::Array(items),
            Ok(other) => StepOutput::Other(other),
            Err(_) => StepOutput::Text(text),
        },
        Value::Object(map) => StepOutput::Object(map),
        Value::Array(items) => StepOutput::Array(items),
        other => StepOutput::Other(other),
    }
}

/// Extract structured records from one agent invocation's outcome.
///
/// A run with no completed steps yields a single failure record; everything
/// else flows through [`normalize_output`] on the last step's output, falling
/// back to the step's debug rendering when it has no output field.
pub fn normalize_outcome(outcome: &RunOutcome) -> Vec<CheckRecord> {
    let Some(step) = outcome.last_step() else {
        return vec![CheckRecord::unknown_raw(NO_STEPS_MESSAGE)];
    };
    let output = match &step.output {
        Some(value) => value.clone(),
        None => Value::String(format!("{step:?}")),
    };
    normalize_output(output)
}

/// Normalize one output value of unknown shape.
pub fn normalize_output(output: Value) -> Vec<CheckRecord> {
    match classify(output) {
        StepOutput::Object(map) => vec![record_from_map(map)],
        StepOutput::Array(items) => items.into_iter().map(record_from_element).collect(),
        StepOutput::Text(text) => {
            tracing::debug!("agent output is not valid JSON; wrapping as raw");
            vec![CheckRecord::unknown_raw(text)]
        }
        StepOutput::Other(value) => vec![CheckRecord::unknown_raw(stringify(&value))],
    }
}

/// Normalize already-decoded data: an object becomes one record, an array is
/// normalized element-wise, anything else is wrapped into a single raw record.
/// Used by the reporter's defensive merge path; never drops data.
pub fn records_from_value(value: Value) -> Vec<CheckRecord> {
    match value {
        Value::Array(items) => items.into_iter().map(record_from_element).collect(),
        other => vec![record_from_element(other)],
    }
}

fn record_from_element(element: Value) -> CheckRecord {
    match element {
        Value::Object(map) => record_from_map(map),
        other => CheckRecord::unknown_raw(stringify(&other)),
    }
}

fn record_from_map(map: Map<String, Value>) -> CheckRecord {
    let category = match map.get("category") {
        Some(Value::String(s)) => s.clone(),
        _ => UNKNOWN_CATEGORY.to_string(),
    };
    let success = map.get("success").and_then(Value::as_bool).unwrap_or(false);
    let partial = map.get("partial").and_then(Value::as_bool).unwrap_or(false);
    // Canonical details is always an object; anything else is dropped to {}.
    let details = match map.get("details") {
        Some(Value::Object(d)) => Value::Object(d.clone()),
        _ => Value::Object(Map::new()),
    };
    CheckRecord {
        category,
        success,
        partial,
        details,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AgentStep;
    use serde_json::json;

    fn outcome_with_output(output: Value) -> RunOutcome {
        RunOutcome {
            steps: vec![AgentStep {
                success: Some(true),
                output: Some(output),
                extra: Map::new(),
            }],
        }
    }

    #[test]
    fn no_steps_yields_single_failure_record() {
        let records = normalize_outcome(&RunOutcome::default());
        assert_eq!(
            records,
            vec![CheckRecord::unknown_raw(NO_STEPS_MESSAGE)]
        );
    }

    #[test]
    fn malformed_text_wraps_original_text_exactly() {
        let text = "I checked the page and everything { looked fine";
        let records = normalize_outcome(&outcome_with_output(json!(text)));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, UNKNOWN_CATEGORY);
        assert!(!records[0].success);
        assert_eq!(records[0].details["raw"], text);
    }

    #[test]
    fn complete_object_is_preserved_exactly() {
        let output = json!({
            "category": "Image Validation",
            "success": true,
            "partial": false,
            "details": { "images": [{"src": "a.jpg", "status": "ok"}], "issues": [] }
        });
        let records = normalize_outcome(&outcome_with_output(output.clone()));
        assert_eq!(records.len(), 1);
        assert_eq!(serde_json::to_value(&records[0]).unwrap(), output);
    }

    #[test]
    fn json_encoded_string_decodes_to_record() {
        let encoded = r#"{"category":"Error Detection","success":false,"partial":true,"details":{"issues":["500 on /api/cart"]}}"#;
        let records = normalize_outcome(&outcome_with_output(json!(encoded)));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Error Detection");
        assert!(records[0].partial);
        assert_eq!(records[0].issue_count(), 1);
    }

    #[test]
    fn object_missing_fields_gets_defaults() {
        let records = normalize_outcome(&outcome_with_output(json!({ "success": true })));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, UNKNOWN_CATEGORY);
        assert!(records[0].success);
        assert!(!records[0].partial);
        assert_eq!(records[0].details, json!({}));
    }

    #[test]
    fn non_object_details_is_reset_to_empty_object() {
        let records =
            normalize_outcome(&outcome_with_output(json!({ "details": "just a string" })));
        assert_eq!(records[0].details, json!({}));
    }

    #[test]
    fn array_elements_normalize_independently() {
        let output = json!([
            { "category": "Product Page Validation", "success": true },
            { "partial": true },
            "stray text element",
            42
        ]);
        let records = normalize_outcome(&outcome_with_output(output));
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].category, "Product Page Validation");
        assert!(records[0].success);
        assert!(records[1].partial);
        assert_eq!(records[1].category, UNKNOWN_CATEGORY);
        assert_eq!(records[2].details["raw"], "stray text element");
        assert_eq!(records[3].details["raw"], "42");
    }

    #[test]
    fn scalar_output_wraps_compact_rendering() {
        let records = normalize_outcome(&outcome_with_output(json!(true)));
        assert_eq!(records[0].details["raw"], "true");
        let records = normalize_outcome(&outcome_with_output(json!(null)));
        assert_eq!(records[0].details["raw"], "null");
    }

    #[test]
    fn step_without_output_falls_back_to_debug_rendering() {
        let outcome = RunOutcome {
            steps: vec![AgentStep::default()],
        };
        let records = normalize_outcome(&outcome);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, UNKNOWN_CATEGORY);
        let raw = records[0].details["raw"].as_str().unwrap();
        assert!(raw.contains("AgentStep"), "unexpected fallback: {raw}");
    }

    #[test]
    fn records_from_value_wraps_non_sequence_input() {
        let records = records_from_value(json!("plain text"));
        assert_eq!(records, vec![CheckRecord::unknown_raw("plain text")]);
        let records = records_from_value(json!({ "category": "Error Detection" }));
        assert_eq!(records[0].category, "Error Detection");
    }
}
