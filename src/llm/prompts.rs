//! Prompt text for the review request

pub const ANALYZE_SYSTEM: &str = r#"You are an expert TypeScript developer focused on modern patterns.
Analyze TypeScript code and provide suggestions for:
1. Modern TypeScript patterns (generics, utility types, conditional types)
2. Type safety improvements
3. Performance optimizations
4. Code quality enhancements

Respond with a JSON object matching this structure:
{
  "suggestions": [{"type": "improvement|warning|error|optimization", "message": "...", "line": 1, "severity": "low|medium|high", "modernAlternative": "..."}],
  "typeIssues": [{"message": "...", "line": 1, "solution": "..."}],
  "modernPatterns": [{"name": "...", "description": "...", "example": "...", "benefits": ["..."]}]
}"#;

/// User message embedding the submitted code
pub fn analyze_user_prompt(code: &str) -> String {
    format!("Please analyze this TypeScript code:\n\n{}", code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_names_every_section() {
        assert!(ANALYZE_SYSTEM.contains("\"suggestions\""));
        assert!(ANALYZE_SYSTEM.contains("\"typeIssues\""));
        assert!(ANALYZE_SYSTEM.contains("\"modernPatterns\""));
    }

    #[test]
    fn test_user_prompt_embeds_code_verbatim() {
        let prompt = analyze_user_prompt("type A = `x`;\n");
        assert!(prompt.starts_with("Please analyze this TypeScript code:\n\n"));
        assert!(prompt.ends_with("type A = `x`;\n"));
    }
}
