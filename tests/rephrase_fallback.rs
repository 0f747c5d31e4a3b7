//! The rephrasing service is optional: every failure path ends in a
//! locally formatted reply.

use std::time::Duration;

use hanoibuddy::puzzle::PegId;
use hanoibuddy::rephrase::{format_reply, HttpRephraser, Rephraser, TemplateRephraser};
use hanoibuddy::session::{GameSession, SessionSettings};
use hanoibuddy::tutor::{FixedSelector, Tutor};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn session() -> GameSession {
    GameSession::with_tutor(
        3,
        SessionSettings::default(),
        Tutor::with_selector(Box::new(FixedSelector(2))),
    )
    .unwrap()
}

/// Accept one connection, capture the request body and answer with `response`
async fn canned_server(response: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 2048];
        let body = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(split) = text.find("\r\n\r\n") {
                let length = text[..split]
                    .lines()
                    .filter_map(|l| l.to_ascii_lowercase().strip_prefix("content-length:").map(|v| v.trim().to_string()))
                    .find_map(|v| v.parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= split + 4 + length || n == 0 {
                    break text[split + 4..].to_string();
                }
            } else if n == 0 {
                break String::new();
            }
        };
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        body
    });

    (format!("http://{}/chatbot", addr), handle)
}

#[tokio::test]
async fn test_rephrased_message_is_used_and_payload_is_complete() {
    let (url, server) = canned_server(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 27\r\nConnection: close\r\n\r\n{\"message\":\"Nice thinking\"}",
    )
    .await;

    let mut session = session();
    session.apply_move(PegId::Source, PegId::Destination).unwrap();
    session.ask("first question");

    let rephraser = HttpRephraser::new(&url).unwrap();
    let text = session
        .ask_and_rephrase("I'm stuck", Some(&rephraser as &dyn Rephraser))
        .await;
    assert_eq!(text, "Nice thinking");

    let body: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
    assert_eq!(body["userMessage"], "I'm stuck");
    assert_eq!(body["agentResponse"]["type"], "educational_guidance");
    assert_eq!(body["gameState"]["moveCount"], 1);
    assert_eq!(body["gameState"]["totalDisks"], 3);
    assert_eq!(body["conversationHistory"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_server_error_falls_back_to_local_format() {
    let (url, _server) = canned_server(
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
    )
    .await;

    let mut session = session();
    let rephraser = HttpRephraser::new(&url).unwrap();
    let text = session
        .ask_and_rephrase("help", Some(&rephraser as &dyn Rephraser))
        .await;

    let last = session.conversation().recent(1).remove(0);
    assert_eq!(text, format_reply(&last.agent_response));
}

#[tokio::test]
async fn test_unreachable_service_falls_back() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut session = session();
    let rephraser =
        HttpRephraser::with_timeout(&format!("http://{}/", addr), Duration::from_millis(500)).unwrap();
    let text = session
        .ask_and_rephrase("help", Some(&rephraser as &dyn Rephraser))
        .await;

    assert!(text.contains("⭐"));
}

#[tokio::test]
async fn test_template_rephraser_uses_first_hint() {
    let mut session = session();
    let rephraser = TemplateRephraser::with_selector(Box::new(FixedSelector(0)));
    let text = session
        .ask_and_rephrase("help me", Some(&rephraser as &dyn Rephraser))
        .await;

    let last = session.conversation().recent(1).remove(0);
    let hint = last.agent_response.hints.first().cloned().unwrap();
    assert!(text.starts_with("I can see you're feeling stuck!"));
    assert!(text.contains(&hint));
}
