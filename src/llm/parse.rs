use crate::analysis::{null_as_empty, ModernPattern, Suggestion, TypeIssue};
use anyhow::Context;
use serde::Deserialize;

/// The JSON object the model is asked to return.
///
/// Missing or `null` arrays decode as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalysisPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub suggestions: Vec<Suggestion>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub type_issues: Vec<TypeIssue>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub modern_patterns: Vec<ModernPattern>,
}

/// Strip a markdown code fence wrapped around a JSON response
fn strip_markdown_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let clean = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    clean.strip_suffix("```").unwrap_or(clean).trim()
}

/// Parse the message content returned by the model
pub(crate) fn parse_analysis_content(content: &str) -> anyhow::Result<AnalysisPayload> {
    let clean = strip_markdown_fences(content);
    serde_json::from_str(clean).context("Model response was not valid analysis JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Severity, SuggestionKind};

    #[test]
    fn test_parse_full_payload() {
        let content = r#"{
            "suggestions": [{"type": "error", "message": "Unsafe any", "line": 4, "severity": "high"}],
            "typeIssues": [{"message": "Implicit any", "line": 2, "solution": "Add a type"}],
            "modernPatterns": [{"name": "Satisfies", "description": "d", "example": "e", "benefits": ["a", "b"]}]
        }"#;
        let payload = parse_analysis_content(content).unwrap();
        assert_eq!(payload.suggestions.len(), 1);
        assert_eq!(payload.suggestions[0].kind, SuggestionKind::Error);
        assert_eq!(payload.suggestions[0].severity, Severity::High);
        assert_eq!(payload.suggestions[0].line, Some(4));
        assert_eq!(payload.type_issues[0].line, 2);
        assert_eq!(payload.modern_patterns[0].benefits, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let payload = parse_analysis_content(r#"{"typeIssues": []}"#).unwrap();
        assert!(payload.suggestions.is_empty());
        assert!(payload.type_issues.is_empty());
        assert!(payload.modern_patterns.is_empty());
    }

    #[test]
    fn test_null_arrays_default_to_empty() {
        let content = r#"{"suggestions": null, "typeIssues": [], "modernPatterns": null}"#;
        let payload = parse_analysis_content(content).unwrap();
        assert!(payload.suggestions.is_empty());
        assert!(payload.type_issues.is_empty());
        assert!(payload.modern_patterns.is_empty());
    }

    #[test]
    fn test_fenced_json_is_accepted() {
        let content = "```json\n{\"suggestions\": []}\n```";
        assert!(parse_analysis_content(content).is_ok());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = parse_analysis_content("Sure! Here are my thoughts").unwrap_err();
        assert!(err.to_string().contains("not valid analysis JSON"));
    }

    #[test]
    fn test_strip_markdown_fences_plain_text_untouched() {
        assert_eq!(strip_markdown_fences("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_markdown_fences("```\n[]\n```"), "[]");
    }
}
