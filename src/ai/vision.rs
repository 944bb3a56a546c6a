use base64::Engine as _;
use tracing::instrument;

use crate::ai::common::{request_completion, OPENAI_CHAT_URL};
use crate::ai::prompts::IMAGE_PROMPT;
use crate::annotation::ImageAnnotation;
use crate::error::Result;

/// Ask the provider to describe and tag a photo. The raw reply is split into
/// an [`ImageAnnotation`] by the label heuristics in [`crate::annotation`].
#[instrument(level = "trace", skip(api_key, bytes))]
pub async fn describe_and_tag(
    api_key: &str,
    model: &str,
    bytes: &[u8],
    url: Option<&str>,
) -> Result<ImageAnnotation> {
    let url = url.unwrap_or(OPENAI_CHAT_URL);
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    let data_url = format!("data:{};base64,{}", image_mime(bytes), encoded);
    let body = serde_json::json!({
        "model": model,
        "messages": [
            {
                "role": "system",
                "content": IMAGE_PROMPT,
            },
            {
                "role": "user",
                "content": [ { "type": "image_url", "image_url": { "url": data_url } } ],
            }
        ]
    });

    let reply = request_completion(api_key, &body, url).await?;
    Ok(ImageAnnotation::from_reply(&reply))
}

fn image_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else {
        "image/jpeg"
    }
}
