//! FAQ document ingestion.
//!
//! Uploaded documents come in two shapes: an informal line-based text format
//! where pairs are separated by blank lines and may be prefixed with
//! `Pytanie:` / `Odpowiedź:` labels, and a JSON array of question/answer
//! objects. Both produce the same ordered list of [`QaEntry`] values.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

/// Case-insensitive label marking a question line.
pub const QUESTION_LABEL: &str = "pytanie:";
/// Case-insensitive label marking an answer line.
pub const ANSWER_LABEL: &str = "odpowiedź:";

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

/// Parse the informal line-based FAQ format.
///
/// A pending-question slot drives the pairing: a blank line clears it, a
/// `Pytanie:` line fills it, an `Odpowiedź:` line pairs with it, and any
/// other line either becomes the pending question or answers it. An answer
/// label with no pending question is dropped. Entries that would end up with
/// an empty question or answer are never emitted.
pub fn parse_faq_text(bytes: &[u8]) -> Result<Vec<QaEntry>> {
    let content = std::str::from_utf8(bytes)
        .map_err(|err| Error::InputFormat(format!("document is not valid UTF-8: {err}")))?;

    let mut entries = Vec::new();
    let mut pending_question: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            pending_question = None;
            continue;
        }

        if let Some(rest) = strip_label(line, QUESTION_LABEL) {
            pending_question = non_empty(rest.trim());
        } else if let Some(rest) = strip_label(line, ANSWER_LABEL) {
            match pending_question.take() {
                Some(question) => push_entry(&mut entries, question, rest.trim()),
                None => trace!(line, "answer label without a pending question, dropping line"),
            }
        } else {
            match pending_question.take() {
                Some(question) => push_entry(&mut entries, question, line),
                None => pending_question = Some(line.to_string()),
            }
        }
    }

    debug!(count = entries.len(), "parsed FAQ text document");
    Ok(entries)
}

#[derive(Deserialize)]
struct RawJsonEntry {
    #[serde(alias = "pytanie")]
    question: String,
    #[serde(alias = "odpowiedz", alias = "odpowiedź")]
    answer: String,
}

/// Parse the JSON variant: an array of objects with a question and an answer
/// field. Polish field names are accepted as aliases. A document that is not
/// a JSON array of such objects is rejected wholesale.
pub fn parse_faq_json(bytes: &[u8]) -> Result<Vec<QaEntry>> {
    let raw: Vec<RawJsonEntry> = serde_json::from_slice(bytes)
        .map_err(|err| Error::InputFormat(format!("document is not a valid JSON FAQ: {err}")))?;

    let mut entries = Vec::new();
    for entry in raw {
        let question = entry.question.trim();
        let answer = entry.answer.trim();
        if question.is_empty() || answer.is_empty() {
            warn!("skipping JSON FAQ entry with an empty question or answer");
            continue;
        }
        entries.push(QaEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        });
    }

    debug!(count = entries.len(), "parsed FAQ JSON document");
    Ok(entries)
}

/// Strip `label` from the start of `line`, ignoring case. Returns the rest of
/// the line after the label, or `None` when the line does not start with it.
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let mut rest = line;
    for expected in label.chars() {
        let c = rest.chars().next()?;
        if !c.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        rest = &rest[c.len_utf8()..];
    }
    Some(rest)
}

fn push_entry(entries: &mut Vec<QaEntry>, question: String, answer: &str) {
    if answer.is_empty() {
        trace!(question = %question, "dropping pair with an empty answer");
        return;
    }
    entries.push(QaEntry {
        question,
        answer: answer.to_string(),
    });
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// FAQ entries parsed once at startup and used for chats that have not
/// uploaded a document of their own.
#[derive(Clone, Default)]
pub struct DefaultFaq(Arc<Vec<QaEntry>>);

impl DefaultFaq {
    pub fn new(entries: Vec<QaEntry>) -> Self {
        Self(Arc::new(entries))
    }

    /// Read and parse the configured file. Any failure degrades to an empty
    /// default, with a warning, rather than stopping the bot.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read default FAQ file");
                return Self::default();
            }
        };
        match parse_faq_text(&bytes) {
            Ok(entries) => {
                debug!(path = %path.display(), count = entries.len(), "loaded default FAQ");
                Self::new(entries)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not parse default FAQ file");
                Self::default()
            }
        }
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.0
    }
}
