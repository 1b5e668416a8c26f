use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const ENDPOINT_ERROR_PREFIX: &str = "Error analyzing code:";
const UNPARSABLE_SUGGESTION: &str = "Unable to parse the analysis response";
const UNPARSABLE_EXPLANATION: &str = "Failed to parse the AI response. Please try again.";
const ENDPOINT_FAILURE_EXPLANATION: &str = "Analysis failed due to API error";

/// Structured analysis of one snippet.
///
/// Any JSON object deserializes: missing or null keys become empty values, a lone
/// string becomes a one-item list, and non-string scalars are stringified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "lenient_text")]
    pub explanation: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub suggestions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub improvements: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub security: Vec<String>,
}

impl AnalysisResult {
    /// Fallback for a completion that carried no recoverable JSON.
    pub fn unparsable() -> Self {
        Self {
            explanation: UNPARSABLE_EXPLANATION.to_string(),
            suggestions: vec![UNPARSABLE_SUGGESTION.to_string()],
            improvements: Vec::new(),
            security: Vec::new(),
        }
    }

    /// Fallback for a rejected endpoint call.
    pub fn endpoint_failure(message: &str) -> Self {
        Self {
            explanation: ENDPOINT_FAILURE_EXPLANATION.to_string(),
            suggestions: vec![format!("{ENDPOINT_ERROR_PREFIX} {message}")],
            improvements: Vec::new(),
            security: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.suggestions
            .first()
            .is_some_and(|first| first.starts_with(ENDPOINT_ERROR_PREFIX))
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

// Nested arrays and objects inside a list are dropped.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        Value::Object(_) | Value::Null => Vec::new(),
        scalar => scalar_text(scalar).into_iter().collect(),
    })
}
