use std::env;
use std::path::PathBuf;

use crate::ai::AiConfig;
use crate::error::Result;

#[derive(Clone)]
pub struct Config {
    pub db_url: String,
    pub default_faq_path: Option<PathBuf>,
    pub ai: AiConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let db_url = env::var("DB_URL").unwrap_or_else(|_| "sqlite:faqbot.db".to_string());
        let default_faq_path = env::var("FAQBOT_DEFAULT_FAQ").ok().map(PathBuf::from);
        let ai = AiConfig::from_env()?;
        Ok(Self {
            db_url,
            default_faq_path,
            ai,
        })
    }
}
