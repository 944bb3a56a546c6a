//! Grounding context sent with every conversational call.
//!
//! The context is a plain text block rebuilt on demand from whatever FAQ and
//! image annotation the chat currently has; it is never stored.

use crate::annotation::ImageAnnotation;
use crate::faq::QaEntry;

/// Emitted alone when the chat has no FAQ loaded.
pub const NO_FAQ_PLACEHOLDER: &str = "Brak dostępnego kontekstu FAQ.\n";

/// Assemble the context block: the FAQ section always comes first, the image
/// section follows only when an annotation with a description is present.
/// Pure and idempotent; identical inputs produce identical output.
pub fn assemble_context(faq: &[QaEntry], annotation: Option<&ImageAnnotation>) -> String {
    let mut context = String::new();

    if faq.is_empty() {
        context.push_str(NO_FAQ_PLACEHOLDER);
    } else {
        context.push_str("Kontekst FAQ:\n");
        for entry in faq {
            context.push_str(&format!(
                "Pytanie: {}\nOdpowiedź: {}\n---\n",
                entry.question, entry.answer
            ));
        }
    }

    if let Some(annotation) = annotation {
        if !annotation.description.is_empty() {
            context.push_str(&format!("\nKontekst zdjęcia:\nOpis: {}\n", annotation.description));
            if !annotation.tags.is_empty() {
                context.push_str(&format!("Tagi: {}\n", annotation.tags));
            }
        }
    }

    context
}
