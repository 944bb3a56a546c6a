use faqbot::ai::AiConfig;
use faqbot::{Config, Error};
use serial_test::serial;

#[test]
#[serial]
fn ai_config_missing_key_is_a_config_error() {
    std::env::remove_var("OPENAI_API_KEY");
    std::env::remove_var("OPENAI_GPT_MODEL");
    std::env::remove_var("OPENAI_VISION_MODEL");
    let err = AiConfig::from_env().unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
#[serial]
fn ai_config_from_env_defaults() {
    std::env::set_var("OPENAI_API_KEY", "k");
    std::env::remove_var("OPENAI_GPT_MODEL");
    std::env::remove_var("OPENAI_VISION_MODEL");
    std::env::remove_var("OPENAI_CHAT_URL");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "k");
    assert_eq!(cfg.gpt_model, "gpt-4.1");
    assert_eq!(cfg.vision_model, "gpt-4o");
    assert!(cfg.chat_url.is_none());
}

#[test]
#[serial]
fn ai_config_from_env_custom_models() {
    std::env::set_var("OPENAI_API_KEY", "k");
    std::env::set_var("OPENAI_GPT_MODEL", "g");
    std::env::set_var("OPENAI_VISION_MODEL", "v");
    std::env::set_var("OPENAI_CHAT_URL", "http://localhost:1/chat");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.gpt_model, "g");
    assert_eq!(cfg.vision_model, "v");
    assert_eq!(cfg.chat_url.as_deref(), Some("http://localhost:1/chat"));
    std::env::remove_var("OPENAI_GPT_MODEL");
    std::env::remove_var("OPENAI_VISION_MODEL");
    std::env::remove_var("OPENAI_CHAT_URL");
}

#[test]
#[serial]
fn config_from_env_reads_db_url_and_default_faq() {
    std::env::set_var("OPENAI_API_KEY", "k");
    std::env::set_var("DB_URL", "sqlite:custom.db");
    std::env::set_var("FAQBOT_DEFAULT_FAQ", "/tmp/default_faq.txt");
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.db_url, "sqlite:custom.db");
    assert_eq!(
        cfg.default_faq_path.as_deref(),
        Some(std::path::Path::new("/tmp/default_faq.txt"))
    );
    std::env::remove_var("DB_URL");
    std::env::remove_var("FAQBOT_DEFAULT_FAQ");
}

#[test]
#[serial]
fn config_from_env_defaults_db_url() {
    std::env::set_var("OPENAI_API_KEY", "k");
    std::env::remove_var("DB_URL");
    std::env::remove_var("FAQBOT_DEFAULT_FAQ");
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.db_url, "sqlite:faqbot.db");
    assert!(cfg.default_faq_path.is_none());
}
