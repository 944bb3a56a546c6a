use serde::Deserialize;
use tracing::{debug, instrument, trace, warn};

use crate::error::{Error, Result};

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Post a chat completion request and return the first choice's content,
/// trimmed. Every failure mode (transport, non-success status, unexpected
/// payload) maps to [`Error::Provider`]; there are no retries.
#[instrument(level = "trace", skip(api_key, body))]
pub async fn request_completion(
    api_key: &str,
    body: &serde_json::Value,
    url: &str,
) -> Result<String> {
    debug!(url, "sending chat completion request");

    let client = reqwest::Client::new();
    let resp = client
        .post(url)
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "provider API error");
        return Err(Error::Provider(format!(
            "provider API error {status}: {err_text}"
        )));
    }

    let raw = resp.text().await?;
    trace!(raw = %raw, "chat response");
    parse_chat_content(&raw)
}

/// Extract the reply text from a raw chat completion response body.
pub fn parse_chat_content(raw: &str) -> Result<String> {
    let chat: ChatResponse = serde_json::from_str(raw)
        .map_err(|err| Error::Provider(format!("unexpected provider response: {err}")))?;
    let content = chat
        .choices
        .first()
        .ok_or_else(|| Error::Provider("missing chat choice".to_string()))?
        .message
        .content
        .trim()
        .to_string();
    Ok(content)
}
