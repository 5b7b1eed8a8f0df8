//! Demo payload returned when no credential is available

use crate::analysis::{ModernPattern, Severity, Suggestion, SuggestionKind, TypeIssue};
use std::time::Duration;

/// Simulated API latency for the demo path
pub const MOCK_DELAY: Duration = Duration::from_millis(1500);

pub(crate) fn demo_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            SuggestionKind::Improvement,
            Severity::Medium,
            "Consider using const assertions for better type inference",
        )
        .with_line(1)
        .with_alternative(r#"const config = { apiUrl: "..." } as const;"#),
        Suggestion::new(
            SuggestionKind::Optimization,
            Severity::Low,
            "Use readonly arrays for immutable data structures",
        )
        .with_alternative("readonly string[] instead of string[]"),
    ]
}

pub(crate) fn demo_type_issues() -> Vec<TypeIssue> {
    vec![TypeIssue {
        message: "Missing return type annotation".to_string(),
        line: 3,
        solution: "Add explicit return type: (): Promise<User> =>".to_string(),
    }]
}

pub(crate) fn demo_patterns() -> Vec<ModernPattern> {
    vec![
        ModernPattern {
            name: "Branded Types".to_string(),
            description: "Create type-safe IDs using branded types".to_string(),
            example: "type UserId = string & { readonly __brand: unique symbol };".to_string(),
            benefits: vec![
                "Type safety".to_string(),
                "Prevents mixing different ID types".to_string(),
                "Zero runtime cost".to_string(),
            ],
        },
        ModernPattern {
            name: "Template Literal Types".to_string(),
            description: "Use template literal types for dynamic string types".to_string(),
            example: "type EventName<T> = `on${Capitalize<T>}`;".to_string(),
            benefits: vec![
                "Compile-time string validation".to_string(),
                "Better autocomplete".to_string(),
                "Type-safe event handling".to_string(),
            ],
        },
    ]
}
