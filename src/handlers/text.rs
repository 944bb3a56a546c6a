use anyhow::Result;
use teloxide::{prelude::*, types::ChatAction};
use tracing::{info, warn};

use crate::ai::{chat::generate_reply, AiConfig};
use crate::context::assemble_context;
use crate::db::{Database, ROLE_ASSISTANT, ROLE_USER};
use crate::faq::DefaultFaq;
use crate::messages::{GREETING, HELP_TEXT, REPLY_FALLBACK};

pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT)
        .parse_mode(teloxide::types::ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn greet(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, GREETING).await?;
    Ok(())
}

/// Handle a free-form user utterance: rebuild the grounding context from the
/// chat's current FAQ and photo annotation, send it with the dialogue so far
/// and the new question, and record both sides of the exchange. A provider
/// failure records the fixed fallback reply instead.
pub async fn answer_question(
    bot: Bot,
    msg: Message,
    db: Database,
    ai: AiConfig,
    default_faq: DefaultFaq,
) -> Result<()> {
    let Some(question) = msg.text() else {
        return Ok(());
    };
    let chat_id = msg.chat.id;

    bot.send_chat_action(chat_id, ChatAction::Typing).await?;

    let mut faq = db.list_faq(chat_id).await?;
    if faq.is_empty() {
        faq = default_faq.entries().to_vec();
    }
    let annotation = db.get_annotation(chat_id).await?;
    let context = assemble_context(&faq, annotation.as_ref());
    let history = db.list_history(chat_id).await?;

    let reply = match generate_reply(
        &ai.api_key,
        &ai.gpt_model,
        &context,
        &history,
        question,
        ai.chat_url.as_deref(),
    )
    .await
    {
        Ok(reply) => reply,
        Err(err) => {
            warn!(chat_id = chat_id.0, error = %err, "reply generation failed");
            REPLY_FALLBACK.to_string()
        }
    };

    db.append_history(chat_id, ROLE_USER, question).await?;
    db.append_history(chat_id, ROLE_ASSISTANT, &reply).await?;

    info!(chat_id = chat_id.0, "Answered question");
    bot.send_message(chat_id, reply).await?;

    Ok(())
}
