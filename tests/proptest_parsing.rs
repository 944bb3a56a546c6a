use faqbot::{extract_keywords, parse_faq_text, QaEntry};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parser_never_panics_on_arbitrary_bytes(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let _ = parse_faq_text(&input);
    }

    #[test]
    fn well_formed_labeled_documents_round_trip(
        pairs in proptest::collection::vec(
            ("[a-z]{1,12}( [a-z]{1,12}){0,3}", "[a-z]{1,12}( [a-z]{1,12}){0,3}"),
            1..8,
        )
    ) {
        let mut doc = String::new();
        for (question, answer) in &pairs {
            doc.push_str(&format!("Pytanie: {question}\nOdpowiedź: {answer}\n\n"));
        }

        let parsed = parse_faq_text(doc.as_bytes()).unwrap();
        let expected: Vec<QaEntry> = pairs
            .iter()
            .map(|(question, answer)| QaEntry {
                question: question.clone(),
                answer: answer.clone(),
            })
            .collect();
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn keywords_respect_cap_and_length_rules(text in ".{0,300}") {
        let keywords = extract_keywords(&text);
        prop_assert!(keywords.len() <= 10);
        for keyword in &keywords {
            prop_assert!(keyword.chars().count() > 2);
        }
        let unique: std::collections::HashSet<&String> = keywords.iter().collect();
        prop_assert_eq!(unique.len(), keywords.len());
    }
}
