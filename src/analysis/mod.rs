//! Analysis data model
//!
//! Plain, immutable records describing what the reviewer found in a snippet.
//! Field names serialize in camelCase so the same types decode the model's
//! JSON payload and encode the headless `--json` report.

mod response;

pub use response::{ApiError, ApiResponse, ANALYSIS_FAILED};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Kind of suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Improvement,
    Warning,
    Error,
    Optimization,
}

impl SuggestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::Improvement => "improvement",
            SuggestionKind::Warning => "warning",
            SuggestionKind::Error => "error",
            SuggestionKind::Optimization => "optimization",
        }
    }

    /// Single-glyph marker shown before a suggestion
    pub fn icon(&self) -> &'static str {
        match self {
            SuggestionKind::Error => "✖",
            SuggestionKind::Warning => "▲",
            SuggestionKind::Improvement => "◆",
            SuggestionKind::Optimization => "✦",
        }
    }
}

/// Severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// A single actionable recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    pub severity: Severity,
    /// Example replacement text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modern_alternative: Option<String>,
}

impl Suggestion {
    pub fn new(kind: SuggestionKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
            severity,
            modern_alternative: None,
        }
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_alternative(mut self, alternative: impl Into<String>) -> Self {
        self.modern_alternative = Some(alternative.into());
        self
    }
}

/// A defect tied to a specific line, with a proposed fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeIssue {
    pub message: String,
    pub line: u32,
    pub solution: String,
}

/// An educational recommendation not tied to a particular defect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModernPattern {
    pub name: String,
    pub description: String,
    pub example: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub benefits: Vec<String>,
}

/// Decode a list where an explicit `null` means empty
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The aggregate result of reviewing one snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub id: Uuid,
    pub code: String,
    pub suggestions: Vec<Suggestion>,
    pub type_issues: Vec<TypeIssue>,
    pub modern_patterns: Vec<ModernPattern>,
    pub timestamp: DateTime<Utc>,
}

impl Analysis {
    /// Build a fresh analysis with a new id, stamped now.
    pub fn new(
        code: impl Into<String>,
        suggestions: Vec<Suggestion>,
        type_issues: Vec<TypeIssue>,
        modern_patterns: Vec<ModernPattern>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            suggestions,
            type_issues,
            modern_patterns,
            timestamp: Utc::now(),
        }
    }

    pub fn total_findings(&self) -> usize {
        self.suggestions.len() + self.type_issues.len() + self.modern_patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_findings() == 0
    }
}
