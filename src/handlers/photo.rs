use anyhow::Result;
use teloxide::{prelude::*, types::ChatAction};
use tracing::{debug, info, warn};

use crate::ai::{vision::describe_and_tag, AiConfig};
use crate::annotation::ImageAnnotation;
use crate::db::{Database, ROLE_ASSISTANT};
use crate::messages;
use crate::utils::download_telegram_file;

/// Handle an uploaded photo: have the provider describe and tag it, store
/// the annotation, and tell the user. A provider failure degrades to fixed
/// placeholder text; it never ends the session.
pub async fn annotate_photo(bot: Bot, msg: Message, db: Database, ai: AiConfig) -> Result<()> {
    let Some(sizes) = msg.photo() else {
        return Ok(());
    };
    let Some(file_id) = sizes
        .iter()
        .max_by_key(|p| p.file.size)
        .map(|p| &p.file.id)
    else {
        debug!("photo had no usable sizes");
        return Ok(());
    };

    bot.send_chat_action(msg.chat.id, ChatAction::Typing)
        .await?;
    let bytes = download_telegram_file(&bot, file_id).await?;

    debug!(model = %ai.vision_model, "describing photo");
    let annotation =
        match describe_and_tag(&ai.api_key, &ai.vision_model, &bytes, ai.chat_url.as_deref()).await
        {
            Ok(annotation) => annotation,
            Err(err) => {
                warn!(chat_id = msg.chat.id.0, error = %err, "photo description failed");
                ImageAnnotation::describe_failed()
            }
        };

    db.set_annotation(msg.chat.id, &annotation).await?;
    db.append_history(
        msg.chat.id,
        ROLE_ASSISTANT,
        &messages::photo_analyzed_notice(&annotation),
    )
    .await?;

    info!(chat_id = msg.chat.id.0, "Annotated photo");
    bot.send_message(msg.chat.id, messages::image_reply_text(&annotation))
        .await?;

    Ok(())
}
