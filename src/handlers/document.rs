use anyhow::Result;
use teloxide::prelude::*;
use tracing::{info, warn};

use crate::db::Database;
use crate::faq::{parse_faq_json, parse_faq_text};
use crate::messages::{self, FAQ_PARSE_EMPTY, FAQ_REJECTED, UNSUPPORTED_DOCUMENT};
use crate::utils::download_telegram_file;

/// Handle an uploaded FAQ document. A successfully parsed document replaces
/// the chat's previous one wholesale; any rejection leaves the previous
/// document untouched.
pub async fn load_faq_from_document(bot: Bot, msg: Message, db: Database) -> Result<()> {
    let Some(document) = msg.document() else {
        return Ok(());
    };

    let file_name = document
        .file_name
        .clone()
        .unwrap_or_default()
        .to_lowercase();
    let is_json = file_name.ends_with(".json");
    if !is_json && !file_name.ends_with(".txt") {
        bot.send_message(msg.chat.id, UNSUPPORTED_DOCUMENT).await?;
        return Ok(());
    }

    let bytes = download_telegram_file(&bot, &document.file.id).await?;
    let parsed = if is_json {
        parse_faq_json(&bytes)
    } else {
        parse_faq_text(&bytes)
    };

    match parsed {
        Ok(entries) if entries.is_empty() => {
            warn!(chat_id = msg.chat.id.0, "uploaded FAQ contained no pairs");
            bot.send_message(msg.chat.id, FAQ_PARSE_EMPTY).await?;
        }
        Ok(entries) => {
            db.replace_faq(msg.chat.id, &entries).await?;
            info!(
                chat_id = msg.chat.id.0,
                count = entries.len(),
                "Loaded FAQ document"
            );
            bot.send_message(msg.chat.id, messages::faq_loaded_text(&entries))
                .await?;
        }
        Err(err) => {
            warn!(chat_id = msg.chat.id.0, error = %err, "rejected FAQ document");
            bot.send_message(msg.chat.id, FAQ_REJECTED).await?;
        }
    }

    Ok(())
}
