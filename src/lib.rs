use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;

pub mod ai;
pub mod annotation;
pub mod commands;
pub mod config;
pub mod context;
pub mod db;
pub mod error;
pub mod faq;
pub mod handlers;
pub mod messages;
pub mod system_info;
pub mod utils;

pub use annotation::{extract_keywords, ImageAnnotation};
pub use config::Config;
pub use context::assemble_context;
pub use error::Error;
pub use faq::{parse_faq_json, parse_faq_text, DefaultFaq, QaEntry};

use commands::Command;
use db::Database;
use handlers::{annotate_photo, answer_question, load_faq_from_document};

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting FAQ assistant bot...");

    // A missing provider key stops startup here; everything downstream
    // assumes the provider is reachable in principle.
    let config = Config::from_env()?;

    let bot = Bot::from_env();

    let db = db::init_db(&config.db_url).await?;
    tracing::info!("Database ready.");

    let default_faq = faq::DefaultFaq::load(config.default_faq_path.as_deref());

    // --- Handler Setup ---
    let handler = dptree::entry().branch(
        Update::filter_message()
            .branch(
                dptree::entry()
                    .filter(|msg: Message| msg.document().is_some())
                    .endpoint(load_faq_from_document),
            )
            .branch(
                dptree::entry()
                    .filter(|msg: Message| msg.photo().is_some())
                    .endpoint(annotate_photo),
            )
            .branch(dptree::entry().filter_command::<Command>().endpoint(
                |bot: Bot,
                 msg: Message,
                 cmd: Command,
                 db: Database,
                 default_faq: DefaultFaq| async move {
                    cmd.dispatch(bot, msg, db, default_faq).await
                },
            ))
            .branch(dptree::endpoint(answer_question)),
    );

    // --- Dispatcher ---
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![db, config.ai, default_faq])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
