use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use crate::enums::extraction_error::ExtractionError;
use crate::structs::analysis_result::AnalysisResult;

static FENCED_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:json)?\s*(\{[\s\S]*?\})\s*```").expect("valid fenced-block regex"));

// First `{` to the nearest `}`. A nested object or a stray brace in leading prose
// yields the wrong span; only the first candidate is ever tried.
static FIRST_BRACE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[\s\S]*?\}").expect("valid brace-span regex"));

/// Recovers an [`AnalysisResult`] from a model completion.
///
/// Tried in order: the whole text as JSON, the first fenced block holding an
/// object, then the first brace-delimited span. Once a fenced block matches,
/// its verdict is final.
pub fn extract(raw_text: &str) -> Result<AnalysisResult, ExtractionError> {
    if let Ok(result) = parse_object(raw_text) {
        return Ok(result);
    }

    if let Some(captures) = FENCED_OBJECT.captures(raw_text) {
        if let Some(candidate) = captures.get(1) {
            log::debug!("🔎 Parsing fenced JSON block at byte {}", candidate.start());
            return parse_object(candidate.as_str());
        }
    }

    let candidate = FIRST_BRACE_SPAN
        .find(raw_text)
        .ok_or(ExtractionError::NoJsonFound)?;
    log::debug!("🔎 Parsing brace span at byte {}", candidate.start());
    parse_object(candidate.as_str())
}

/// Same as [`extract`], substituting the unparsable fallback record on failure.
pub fn extract_or_fallback(raw_text: &str) -> AnalysisResult {
    match extract(raw_text) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("⚠️ Failed to parse model response: {e}");
            log::debug!("Raw response: {raw_text}");
            AnalysisResult::unparsable()
        }
    }
}

fn parse_object(candidate: &str) -> Result<AnalysisResult, ExtractionError> {
    let value: Value = serde_json::from_str(candidate)?;
    if !value.is_object() {
        return Err(ExtractionError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            explanation: "ok".to_string(),
            suggestions: vec!["a".to_string()],
            improvements: vec![],
            security: vec![],
        }
    }

    #[test]
    fn parses_plain_json() {
        let raw = r#"{"explanation":"ok","suggestions":["a"],"improvements":[],"security":[]}"#;
        assert_eq!(extract(raw).unwrap(), sample());
    }

    #[test]
    fn parses_json_with_surrounding_whitespace() {
        let raw = "\n  {\"explanation\":\"ok\",\"suggestions\":[\"a\"]}  \n";
        assert_eq!(extract(raw).unwrap(), sample());
    }

    #[test]
    fn parses_fenced_block_with_json_tag() {
        let raw = "```json\n{\"explanation\":\"ok\",\"suggestions\":[\"a\"],\"improvements\":[],\"security\":[]}\n```";
        assert_eq!(extract(raw).unwrap(), sample());
    }

    #[test]
    fn parses_untagged_fence_inside_prose() {
        let raw = "Here is my analysis:\n```\n{\"explanation\":\"ok\",\"suggestions\":[\"a\"]}\n```\nHope it helps!";
        assert_eq!(extract(raw).unwrap(), sample());
    }

    #[test]
    fn fenced_block_keeps_nested_objects() {
        let raw = "```json\n{\"explanation\":\"ok\",\"suggestions\":[\"a\"],\"meta\":{\"x\":1}}\n```";
        assert_eq!(extract(raw).unwrap(), sample());
    }

    #[test]
    fn uses_first_fenced_block_only() {
        let raw = "```json\n{\"explanation\":\"first\"}\n```\n```json\n{\"explanation\":\"second\"}\n```";
        assert_eq!(extract(raw).unwrap().explanation, "first");
    }

    #[test]
    fn invalid_fenced_block_does_not_fall_through() {
        let raw = "```json\n{\"explanation\": oops}\n```\nlater {\"explanation\":\"ok\"}";
        assert!(matches!(extract(raw), Err(ExtractionError::InvalidJson(_))));
    }

    #[test]
    fn recovers_object_after_prose() {
        let raw = "Sure! The analysis is {\"explanation\":\"ok\",\"suggestions\":[\"a\"]} as requested.";
        assert_eq!(extract(raw).unwrap(), sample());
    }

    #[test]
    fn only_first_of_several_objects_is_recovered() {
        let raw = "A: {\"explanation\":\"one\"} B: {\"explanation\":\"two\"}";
        assert_eq!(extract(raw).unwrap().explanation, "one");
    }

    #[test]
    fn stray_brace_in_prose_captures_wrong_span() {
        let raw = "use {braces} carefully: {\"explanation\":\"ok\"}";
        assert!(matches!(extract(raw), Err(ExtractionError::InvalidJson(_))));
    }

    #[test]
    fn nested_object_outside_fence_is_truncated() {
        let raw = "Result: {\"explanation\":\"ok\",\"meta\":{\"x\":1}} done";
        assert!(extract(raw).is_err());
    }

    #[test]
    fn top_level_non_object_is_rejected() {
        assert!(matches!(extract("[1, 2, 3]"), Err(ExtractionError::NoJsonFound)));
        assert!(matches!(extract("\"just a string\""), Err(ExtractionError::NoJsonFound)));
    }

    #[test]
    fn lone_string_list_is_wrapped() {
        let raw = r#"{"explanation":"ok","suggestions":"use const","improvements":[],"security":[]}"#;
        let result = extract(raw).unwrap();
        assert_eq!(result.suggestions, vec!["use const".to_string()]);
        assert_ne!(extract_or_fallback(raw), AnalysisResult::unparsable());
    }

    #[test]
    fn numbers_in_lists_are_stringified() {
        let result = extract(r#"{"explanation":"ok","suggestions":["a", 3]}"#).unwrap();
        assert_eq!(result.suggestions, vec!["a".to_string(), "3".to_string()]);
    }

    #[test]
    fn numeric_explanation_is_kept_as_text() {
        assert_eq!(extract(r#"{"explanation": 42}"#).unwrap().explanation, "42");
    }

    #[test]
    fn text_without_json_is_reported() {
        assert!(matches!(extract("not json at all"), Err(ExtractionError::NoJsonFound)));
        assert!(matches!(extract(""), Err(ExtractionError::NoJsonFound)));
    }

    #[test]
    fn fallback_is_returned_for_unparsable_text() {
        assert_eq!(extract_or_fallback("not json at all"), AnalysisResult::unparsable());
    }
}
