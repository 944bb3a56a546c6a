//! System prompts sent to the model provider.
//!
//! Centralizing these strings makes it easy to tweak how the assistant
//! answers and how photos are described without digging through the call
//! sites. Prompts are Polish, matching the audience of the bot.

/// Instruction prepended (together with the assembled context) to every
/// conversational request.
pub const SYSTEM_PROMPT: &str = "Jesteś pomocnym asystentem AI. Odpowiadasz na pytania użytkownika, korzystając z kontekstu FAQ oraz/lub opisu i tagów przesłanego zdjęcia. Utrzymuj kontekst rozmowy. Jeśli pytanie nie pasuje do żadnego kontekstu, grzecznie poinformuj, że nie możesz pomóc i zaproponuj kontakt z obsługą klienta.";

/// Instruction for the photo annotation call. The reply is expected to carry
/// the `Opis:` / `Tagi:` labels that the splitter looks for.
pub const IMAGE_PROMPT: &str = "Opisz szczegółowo zawartość tego zdjęcia, koncentrując się na opisach wszystkich obiektów, ilościach, opisach osób, akcjach, kolorach i ogólnym kontekście. Następnie, wygeneruj listę od 10 do 30 słów kluczowych (tagów) oddzielonych przecinkami, które najlepiej charakteryzują to zdjęcie. Format odpowiedzi: Opis: [Twój opis]. Tagi: [tag1, tag2, ...].";
