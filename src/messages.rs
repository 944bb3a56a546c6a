//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and
//! are easy to update or translate. The bot speaks Polish.

use crate::annotation::ImageAnnotation;
use crate::faq::QaEntry;

pub const GREETING: &str = "Cześć! Jestem Twoim asystentem. Jak mogę pomóc?";

pub const HELP_TEXT: &str =
    "Potrafię odpowiadać na pytania dotyczące FAQ lub przesłanego zdjęcia.\n\
     Wyślij plik .txt lub .json, aby załadować FAQ, wyślij zdjęcie, aby je opisać,\n\
     albo po prostu napisz wiadomość, aby porozmawiać.\n\n\
     <b>Komendy:</b>\n\
     /faq - Pokaż podgląd załadowanego FAQ.\n\
     /image - Pokaż opis ostatniego zdjęcia.\n\
     /example - Wyślij przykładowy plik FAQ.\n\
     /reset - Wyczyść rozmowę, FAQ i zdjęcie.\n\
     /info - Pokaż informacje o wersji.";

pub const FAQ_LOADED: &str = "FAQ załadowane pomyślnie!";
pub const FAQ_PREVIEW_HEADER: &str = "Podgląd załadowanego FAQ:";
pub const FAQ_PARSE_EMPTY: &str =
    "Nie udało się sparsować FAQ. Sprawdź format pliku. Poprzednie FAQ pozostaje bez zmian.";
pub const FAQ_REJECTED: &str =
    "Nie udało się wczytać FAQ: nieprawidłowy format pliku. Poprzednie FAQ pozostaje bez zmian.";
pub const UNSUPPORTED_DOCUMENT: &str = "Obsługiwane są tylko pliki .txt i .json.";
pub const NO_FAQ_LOADED: &str =
    "Brak załadowanego FAQ. Wyślij plik .txt lub .json, aby je załadować.";
pub const NO_IMAGE_YET: &str = "Nie przesłano jeszcze żadnego zdjęcia.";
pub const REPLY_FALLBACK: &str =
    "Przepraszam, wystąpił problem z wygenerowaniem odpowiedzi. Spróbuj ponownie.";
pub const SESSION_RESET: &str = "Sesja została wyczyszczona. Zaczynamy od nowa!";

pub const EXAMPLE_FAQ: &str = include_str!("../example_faq.txt");
pub const EXAMPLE_FAQ_FILE_NAME: &str = "example_faq.txt";

const PREVIEW_LIMIT: usize = 5;

/// Short preview of a FAQ document: the first few pairs plus a count of
/// whatever was cut off.
pub fn faq_preview(entries: &[QaEntry]) -> String {
    let mut text = String::new();
    for entry in entries.iter().take(PREVIEW_LIMIT) {
        text.push_str(&format!("P: {}\nO: {}\n---\n", entry.question, entry.answer));
    }
    if entries.len() > PREVIEW_LIMIT {
        text.push_str(&format!("...i {} więcej pytań.", entries.len() - PREVIEW_LIMIT));
    }
    text
}

pub fn faq_loaded_text(entries: &[QaEntry]) -> String {
    format!("{FAQ_LOADED}\n\n{FAQ_PREVIEW_HEADER}\n{}", faq_preview(entries))
}

pub fn image_reply_text(annotation: &ImageAnnotation) -> String {
    format!(
        "Opis zdjęcia:\n{}\n\nSłowa kluczowe (tagi):\n{}",
        annotation.description, annotation.tags
    )
}

/// Assistant notice recorded in the history after a photo is analyzed, so
/// later questions can refer back to it.
pub fn photo_analyzed_notice(annotation: &ImageAnnotation) -> String {
    format!(
        "Przeanalizowałem to zdjęcie: {} Tagi: {}. Teraz możesz zadawać mi pytania na jego temat.",
        annotation.description, annotation.tags
    )
}
