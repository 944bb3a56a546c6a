use anyhow::Result;
use teloxide::{prelude::*, types::InputFile};

use crate::db::Database;
use crate::faq::DefaultFaq;
use crate::messages::{
    self, EXAMPLE_FAQ, EXAMPLE_FAQ_FILE_NAME, FAQ_PREVIEW_HEADER, NO_FAQ_LOADED, NO_IMAGE_YET,
    SESSION_RESET,
};

/// Show a preview of the FAQ the chat is currently grounded in, falling back
/// to the default document when nothing was uploaded.
pub async fn show_faq(bot: Bot, msg: Message, db: Database, default_faq: DefaultFaq) -> Result<()> {
    let mut entries = db.list_faq(msg.chat.id).await?;
    if entries.is_empty() {
        entries = default_faq.entries().to_vec();
    }

    if entries.is_empty() {
        bot.send_message(msg.chat.id, NO_FAQ_LOADED).await?;
    } else {
        let preview = format!("{FAQ_PREVIEW_HEADER}\n{}", messages::faq_preview(&entries));
        bot.send_message(msg.chat.id, preview).await?;
    }
    Ok(())
}

pub async fn show_image(bot: Bot, msg: Message, db: Database) -> Result<()> {
    match db.get_annotation(msg.chat.id).await? {
        Some(annotation) => {
            bot.send_message(msg.chat.id, messages::image_reply_text(&annotation))
                .await?;
        }
        None => {
            bot.send_message(msg.chat.id, NO_IMAGE_YET).await?;
        }
    }
    Ok(())
}

/// Drop everything the chat has accumulated: dialogue, FAQ and annotation.
pub async fn reset_session(bot: Bot, msg: Message, db: Database) -> Result<()> {
    db.clear_history(msg.chat.id).await?;
    db.clear_faq(msg.chat.id).await?;
    db.clear_annotation(msg.chat.id).await?;
    tracing::info!(chat_id = msg.chat.id.0, "Reset session");
    bot.send_message(msg.chat.id, SESSION_RESET).await?;
    Ok(())
}

/// Send the built-in sample document so users can see the expected format.
pub async fn send_example(bot: Bot, msg: Message) -> Result<()> {
    let file = InputFile::memory(EXAMPLE_FAQ).file_name(EXAMPLE_FAQ_FILE_NAME);
    bot.send_document(msg.chat.id, file).await?;
    Ok(())
}
