//! JSON entry point for hosts that cannot link the Rust API directly
//! (WASM, FFI shims).
//!
//! Request:
//!
//! ```json
//! {
//!   "records": { "p1": { "title": "Quick Fox" } },
//!   "config": { "mode": "edit_distance", "use_substring_bonus": false, "max_results": 10 },
//!   "query": "Quick Fox",
//!   "thresholds": { "max_distance": 2 }
//! }
//! ```
//!
//! Response: `{"results": {"p1": 0.0}, "total": 1}` or `{"error": "..."}`.

use crate::config::{QueryThresholds, SearchConfig};
use crate::engine::FuzzEngine;
use crate::error::{FuzzError, FuzzResult};
use crate::rank::ResultSet;
use crate::record::RecordSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input for the JSON search function
#[derive(Debug, Deserialize)]
pub struct SearchInput {
    pub records: Value,
    #[serde(default)]
    pub config: Value,
    pub query: String,
    #[serde(default)]
    pub thresholds: QueryThresholds,
}

/// Output of the JSON search function
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub results: ResultSet,
    pub total: usize,
}

#[derive(Serialize)]
struct ErrorOutput {
    error: String,
}

/// Parse and run a search request
pub fn run_search(input: &str) -> FuzzResult<SearchOutput> {
    let parsed: SearchInput = serde_json::from_str(input)
        .map_err(|e| FuzzError::InvalidInput(format!("invalid search input: {e}")))?;

    let config = match parsed.config {
        Value::Null => SearchConfig::default(),
        value => serde_json::from_value::<SearchConfig>(value)
            .map(SearchConfig::normalized)
            .map_err(|e| FuzzError::InvalidConfiguration(e.to_string()))?,
    };

    let records = RecordSet::from_json_object(&parsed.records).ok_or_else(|| {
        FuzzError::InvalidInput("records must be an object of key -> fields".to_string())
    })?;

    let engine = FuzzEngine::new(records, config);
    let results = engine.search_with(&parsed.query, &parsed.thresholds);
    let total = results.len();

    Ok(SearchOutput { results, total })
}

/// JSON entry point: deserialize request, search, serialize output.
pub fn search_json(input: &str) -> String {
    let serialized = match run_search(input) {
        Ok(output) => serde_json::to_string(&output),
        Err(e) => serde_json::to_string(&ErrorOutput {
            error: e.to_string(),
        }),
    };

    match serialized {
        Ok(json) => json,
        Err(e) => format!(r#"{{"error":"serialization failed: {}"}}"#, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_json_roundtrip() {
        let input = json!({
            "records": {
                "p1": {"title": "Quick Fox"},
                "p2": {"title": "Quack Fix"}
            },
            "config": {"mode": "levenshtein", "max_results": 5},
            "query": "Quick Fox"
        })
        .to_string();

        let result = search_json(&input);
        let parsed: Value = serde_json::from_str(&result).unwrap();

        assert!(parsed["error"].is_null(), "unexpected error: {}", result);
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["results"]["p1"], 0.0);
        assert_eq!(parsed["results"]["p2"], 2.0);
        assert!(result.find("\"p1\"").unwrap() < result.find("\"p2\"").unwrap());
    }

    #[test]
    fn ties_follow_document_order() {
        let input = r#"{"records":{"zeta":{"t":"abc"},"alpha":{"t":"abd"}},"query":"abx"}"#;
        assert_eq!(
            search_json(input),
            r#"{"results":{"zeta":1.0,"alpha":1.0},"total":2}"#
        );
    }

    #[test]
    fn zero_similarity_serializes_without_sign() {
        let input = json!({
            "records": {"a": {"t": "abc"}},
            "config": {"mode": "windowed_similarity"},
            "query": "xyz"
        })
        .to_string();
        assert_eq!(search_json(&input), r#"{"results":{"a":0.0},"total":1}"#);
    }

    #[test]
    fn default_config_when_missing() {
        let input = json!({
            "records": {"a": {"t": "fox"}},
            "query": "fox",
            "thresholds": {"max_distance": 0}
        })
        .to_string();

        let output = run_search(&input).unwrap();
        assert_eq!(output.total, 1);
    }

    #[test]
    fn invalid_input() {
        let result = search_json("not json");
        let parsed: Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["error"]
            .as_str()
            .unwrap()
            .contains("invalid search input"));
    }

    #[test]
    fn unknown_mode_is_configuration_error() {
        let input = json!({
            "records": {},
            "config": {"mode": "soundex"},
            "query": "x"
        })
        .to_string();

        assert!(matches!(
            run_search(&input),
            Err(FuzzError::InvalidConfiguration(_))
        ));
        assert!(search_json(&input).contains("invalid configuration"));
    }

    #[test]
    fn records_must_be_object() {
        let input = json!({"records": [1, 2], "query": "x"}).to_string();
        assert!(matches!(run_search(&input), Err(FuzzError::InvalidInput(_))));
    }

    #[test]
    fn empty_records_give_empty_results() {
        let input = json!({"records": {}, "query": "anything"}).to_string();
        assert_eq!(search_json(&input), r#"{"results":{},"total":0}"#);
    }
}
