//! Post-processing of the model's photo reply.
//!
//! The vision prompt asks for a reply shaped as `Opis: ... Tagi: ...`. Models
//! do not always comply, so the splitter degrades step by step: both labels,
//! one label, and finally a keyword heuristic over the raw reply.

use tracing::debug;

pub const DESCRIPTION_LABEL: &str = "Opis:";
pub const TAGS_LABEL: &str = "Tagi:";

pub const NO_DESCRIPTION: &str = "Brak opisu.";
pub const NO_TAGS: &str = "Brak tagów.";
pub const NO_CLEAR_TAGS: &str = "Brak wyraźnych tagów.";
/// Substituted when the provider call itself fails.
pub const DESCRIBE_FAILED: &str = "Nie udało się opisać zdjęcia.";

/// Filler words excluded from heuristic tag extraction.
const STOP_WORDS: [&str; 16] = [
    "a", "an", "the", "is", "are", "on", "in", "of", "with", "and", "or", "dla", "do", "na", "w",
    "z",
];

const KEYWORD_CAP: usize = 10;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct ImageAnnotation {
    pub description: String,
    pub tags: String,
}

impl ImageAnnotation {
    /// Split a model reply into description and tags.
    pub fn from_reply(reply: &str) -> Self {
        let text = reply.trim();
        let has_description = text.contains(DESCRIPTION_LABEL);

        if has_description {
            if let Some((before, after)) = text.split_once(TAGS_LABEL) {
                return Self {
                    description: before.replace(DESCRIPTION_LABEL, "").trim().to_string(),
                    tags: after.trim().to_string(),
                };
            }
            return Self {
                description: text.replace(DESCRIPTION_LABEL, "").trim().to_string(),
                tags: NO_TAGS.to_string(),
            };
        }

        if text.contains(TAGS_LABEL) {
            return Self {
                description: NO_DESCRIPTION.to_string(),
                tags: text.replace(TAGS_LABEL, "").trim().to_string(),
            };
        }

        // No labels at all: the whole reply becomes the description and tags
        // are guessed, but only when there is enough text to guess from.
        debug!("photo reply carried no labels, falling back to keyword extraction");
        let description = text.to_string();
        let tags = if description.split_whitespace().count() > 5 {
            let keywords = extract_keywords(&description);
            if keywords.is_empty() {
                NO_CLEAR_TAGS.to_string()
            } else {
                keywords.join(", ")
            }
        } else {
            NO_CLEAR_TAGS.to_string()
        };

        Self { description, tags }
    }

    /// Fixed placeholder annotation recorded when the provider call fails.
    pub fn describe_failed() -> Self {
        Self {
            description: DESCRIBE_FAILED.to_string(),
            tags: NO_TAGS.to_string(),
        }
    }
}

/// Heuristic tag guesses: lowercase words longer than two characters, minus
/// stop words, deduplicated in order of first occurrence, at most ten.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for word in text.to_lowercase().split_whitespace() {
        let cleaned = word.trim_matches(|c| c == ',' || c == '.');
        if cleaned.chars().count() <= 2 || STOP_WORDS.contains(&cleaned) {
            continue;
        }
        if !keywords.iter().any(|k| k == cleaned) {
            keywords.push(cleaned.to_string());
        }
        if keywords.len() == KEYWORD_CAP {
            break;
        }
    }
    keywords
}
