use super::models::{LlmConfig, Usage};
use serde::{Deserialize, Serialize};

/// Response from the completions API: message content plus usage stats
#[derive(Debug)]
pub struct LlmResponse {
    pub content: String,
    pub usage: Option<Usage>,
    pub model: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    max_tokens: u32,
    temperature: f64,
    stream: bool,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
    model: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<MessageContent>,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

/// Send one system + user exchange and return the first choice's content.
///
/// Single round trip: no retries, no timeout beyond the transport defaults.
pub(crate) async fn call_llm(
    config: &LlmConfig,
    system: &str,
    user: &str,
) -> anyhow::Result<LlmResponse> {
    let client = reqwest::Client::new();
    let model = config.model();

    let request = ChatRequest {
        model: model.id(),
        messages: [
            Message {
                role: "system",
                content: system,
            },
            Message {
                role: "user",
                content: user,
            },
        ],
        max_tokens: config.max_tokens(),
        temperature: config.temperature(),
        stream: false,
    };

    tracing::debug!(
        endpoint = config.endpoint(),
        model = model.id(),
        max_tokens = request.max_tokens,
        "sending completion request"
    );

    let response = client
        .post(config.endpoint())
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", config.api_key))
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            status = status.as_u16(),
            body = truncate_str(&body, 300),
            "completion request rejected"
        );
        anyhow::bail!(
            "OpenAI API error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        );
    }

    let text = response.text().await?;
    let parsed: ChatResponse = serde_json::from_str(&text).map_err(|e| {
        anyhow::anyhow!(
            "Failed to parse OpenAI response: {} ({})",
            e,
            truncate_str(&text, 200)
        )
    })?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("No response content from OpenAI"))?;

    Ok(LlmResponse {
        content,
        usage: parsed.usage,
        model: parsed.model,
    })
}

/// Truncate a string for display (Unicode-safe)
pub(crate) fn truncate_str(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
