//! Analysis wrapper: live (completions API) and demo paths
//!
//! Both paths produce an [`ApiResponse<Analysis>`]. The live path never
//! returns `Err`; every failure is folded into `ANALYSIS_FAILED`.

pub mod client;
pub mod mock;
pub mod models;
pub mod parse;
pub mod prompts;

pub use mock::MOCK_DELAY;
pub use models::{LlmConfig, Model, Usage, OPENAI_URL};

use crate::analysis::{Analysis, ApiError, ApiResponse};
use std::time::Duration;

const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Review `code` with the hosted model described by `config`.
pub async fn analyze_live(code: &str, config: &LlmConfig) -> ApiResponse<Analysis> {
    tracing::info!(model = %config.model(), chars = code.len(), "analyzing code with OpenAI");

    match request_analysis(code, config).await {
        Ok(analysis) => {
            tracing::info!(
                id = %analysis.id,
                findings = analysis.total_findings(),
                "code analysis completed"
            );
            ApiResponse::success(analysis)
        }
        Err(e) => {
            let message = format!("{:#}", e);
            tracing::error!(error = %message, "OpenAI analysis failed");
            let message = if message.trim().is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                message
            };
            ApiResponse::failure(
                ApiError::analysis_failed(message).with_detail("model", config.model().id()),
            )
        }
    }
}

async fn request_analysis(code: &str, config: &LlmConfig) -> anyhow::Result<Analysis> {
    let prompt = prompts::analyze_user_prompt(code);
    let response = client::call_llm(config, prompts::ANALYZE_SYSTEM, &prompt).await?;

    if let Some(usage) = &response.usage {
        tracing::debug!(
            model = response.model.as_deref().unwrap_or("unknown"),
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            "completion usage"
        );
    }

    let payload = parse::parse_analysis_content(&response.content)?;
    Ok(Analysis::new(
        code,
        payload.suggestions,
        payload.type_issues,
        payload.modern_patterns,
    ))
}

/// Demo analysis after the standard simulated delay. Never fails.
pub async fn analyze_mock(code: &str) -> ApiResponse<Analysis> {
    analyze_mock_after(code, MOCK_DELAY).await
}

/// Demo analysis after an explicit delay.
pub async fn analyze_mock_after(code: &str, delay: Duration) -> ApiResponse<Analysis> {
    tracing::info!(delay_ms = delay.as_millis() as u64, "running demo analysis");
    tokio::time::sleep(delay).await;

    ApiResponse::success(Analysis::new(
        code,
        mock::demo_suggestions(),
        mock::demo_type_issues(),
        mock::demo_patterns(),
    ))
}
