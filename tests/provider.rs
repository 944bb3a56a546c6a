use faqbot::ai::chat::generate_reply;
use faqbot::ai::vision::describe_and_tag;
use faqbot::annotation::{DESCRIBE_FAILED, NO_TAGS};
use faqbot::db::ChatMessage;
use faqbot::Error;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn reply_body(content: &str) -> String {
    serde_json::json!({
        "choices": [ { "message": { "content": content } } ]
    })
    .to_string()
}

#[tokio::test]
async fn describe_and_tag_splits_labeled_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer k"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            reply_body("Opis: Pies na trawie. Tagi: pies, trawa, zwierzę"),
            "application/json",
        ))
        .mount(&server)
        .await;

    let url = format!("{}/v1/chat/completions", server.uri());
    let annotation = describe_and_tag("k", "m", b"img", Some(&url)).await.unwrap();
    assert_eq!(annotation.description, "Pies na trawie.");
    assert_eq!(annotation.tags, "pies, trawa, zwierzę");
}

#[tokio::test]
async fn describe_and_tag_sends_the_image_as_a_data_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("data:image/jpeg;base64,"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(reply_body("Opis: X. Tagi: y"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/v1/chat/completions", server.uri());
    describe_and_tag("k", "m", b"\xff\xd8\xff\xe0", Some(&url))
        .await
        .unwrap();
    server.verify().await;
}

#[tokio::test]
async fn provider_failure_is_a_provider_error_with_placeholders_at_the_caller() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("boom", "text/plain"))
        .mount(&server)
        .await;

    let url = format!("{}/v1/chat/completions", server.uri());
    let err = describe_and_tag("k", "m", b"img", Some(&url)).await.unwrap_err();
    assert!(matches!(err, Error::Provider(_)));

    // The caller substitutes fixed placeholders and keeps going.
    let fallback = faqbot::ImageAnnotation::describe_failed();
    assert_eq!(fallback.description, DESCRIBE_FAILED);
    assert_eq!(fallback.tags, NO_TAGS);
}

#[tokio::test]
async fn generate_reply_returns_the_model_text_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            reply_body("Sklep jest otwarty 9-17."),
            "application/json",
        ))
        .mount(&server)
        .await;

    let url = format!("{}/v1/chat/completions", server.uri());
    let reply = generate_reply("k", "m", "Kontekst FAQ:\n", &[], "Godziny?", Some(&url))
        .await
        .unwrap();
    assert_eq!(reply, "Sklep jest otwarty 9-17.");
}

#[tokio::test]
async fn generate_reply_carries_context_history_and_question() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("Kontekst FAQ"))
        .and(body_string_contains("wcześniejsze pytanie"))
        .and(body_string_contains("nowe pytanie"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(reply_body("ok"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let history = vec![
        ChatMessage {
            role: "user".to_string(),
            content: "wcześniejsze pytanie".to_string(),
        },
        ChatMessage {
            role: "assistant".to_string(),
            content: "wcześniejsza odpowiedź".to_string(),
        },
    ];

    let url = format!("{}/v1/chat/completions", server.uri());
    generate_reply(
        "k",
        "m",
        "Kontekst FAQ:\nPytanie: Q?\nOdpowiedź: A\n---\n",
        &history,
        "nowe pytanie",
        Some(&url),
    )
    .await
    .unwrap();
    server.verify().await;
}

#[tokio::test]
async fn malformed_provider_payload_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let url = format!("{}/v1/chat/completions", server.uri());
    let err = generate_reply("k", "m", "", &[], "q", Some(&url)).await.unwrap_err();
    assert!(matches!(err, Error::Provider(_)));
}
