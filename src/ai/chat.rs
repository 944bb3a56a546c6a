use tracing::instrument;

use crate::ai::common::{request_completion, OPENAI_CHAT_URL};
use crate::ai::prompts::SYSTEM_PROMPT;
use crate::db::history::ChatMessage;
use crate::error::Result;

/// Generate a reply to a user utterance.
///
/// The request carries the fixed assistant instruction plus the assembled
/// context as the system message, the stored dialogue so far, and the new
/// utterance last. The reply text is returned verbatim.
#[instrument(level = "trace", skip(api_key, context, history, question))]
pub async fn generate_reply(
    api_key: &str,
    model: &str,
    context: &str,
    history: &[ChatMessage],
    question: &str,
    url: Option<&str>,
) -> Result<String> {
    let url = url.unwrap_or(OPENAI_CHAT_URL);

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(serde_json::json!({
        "role": "system",
        "content": format!("{SYSTEM_PROMPT}\n\n{context}"),
    }));
    for turn in history {
        messages.push(serde_json::json!({ "role": turn.role, "content": turn.content }));
    }
    messages.push(serde_json::json!({ "role": "user", "content": question }));

    let body = serde_json::json!({ "model": model, "messages": messages });

    request_completion(api_key, &body, url).await
}
