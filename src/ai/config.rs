use std::env;

use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct AiConfig {
    pub api_key: String,
    pub gpt_model: String,
    pub vision_model: String,
    pub chat_url: Option<String>,
}

impl AiConfig {
    /// Read the provider configuration from the environment. A missing API
    /// key is a configuration error: the bot cannot answer anything without
    /// the provider, so startup stops here.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| Error::Config("OPENAI_API_KEY is not set".to_string()))?;
        Ok(Self {
            api_key,
            gpt_model: env::var("OPENAI_GPT_MODEL").unwrap_or_else(|_| "gpt-4.1".to_string()),
            vision_model: env::var("OPENAI_VISION_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            chat_url: env::var("OPENAI_CHAT_URL").ok(),
        })
    }
}
