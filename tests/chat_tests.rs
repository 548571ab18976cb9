use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use mailmuse::ChatSession;
use mailmuse::chat::CHAT_ERROR_TEXT;
use mailmuse::gemini::{ChatTurn, GenerationClient};
use mailmuse::types::{ChatRole, GREETING_ID, GREETING_TEXT, generate_message_id};

mod test_utils;
use test_utils::MockBackend;

fn session_with(backend: &Arc<MockBackend>) -> ChatSession {
    GenerationClient::with_backend(backend.clone()).create_chat_session()
}

#[tokio::test]
async fn session_starts_with_the_greeting() {
    let backend = Arc::new(MockBackend::new());
    let session = session_with(&backend);

    let messages = session.messages().get();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, GREETING_ID);
    assert_eq!(messages[0].role, ChatRole::Model);
    assert_eq!(messages[0].text, GREETING_TEXT);
}

#[tokio::test]
async fn fragments_concatenate_in_arrival_order() {
    let backend = Arc::new(MockBackend::new());
    backend.set_fragments(vec![
        Ok("Hel".to_string()),
        Ok("lo ".to_string()),
        Ok("there".to_string()),
    ]);
    let session = session_with(&backend);

    session.send("What makes a good subject line?").await;

    let messages = session.messages().get();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, ChatRole::User);
    assert_eq!(messages[1].text, "What makes a good subject line?");
    assert_eq!(messages[2].role, ChatRole::Model);
    assert_eq!(messages[2].text, "Hello there");
    assert!(!session.is_loading().get());
}

#[tokio::test]
async fn mid_stream_error_replaces_accumulated_text() {
    let backend = Arc::new(MockBackend::new());
    backend.set_fragments(vec![Ok("Hel".to_string()), Err(())]);
    let session = session_with(&backend);

    session.send("hello").await;

    let messages = session.messages().get();
    let reply = &messages[2];
    assert_eq!(reply.text, CHAT_ERROR_TEXT);
    assert!(!session.is_loading().get());
}

#[tokio::test]
async fn stream_open_failure_shows_the_apology() {
    let backend = Arc::new(MockBackend::new());
    backend.fail_stream_open.store(true, Ordering::SeqCst);
    let session = session_with(&backend);

    session.send("hello").await;

    let messages = session.messages().get();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].text, CHAT_ERROR_TEXT);
}

#[tokio::test]
async fn completed_turns_are_replayed_on_the_next_send() {
    let backend = Arc::new(MockBackend::new());
    backend.set_fragments(vec![Ok("Use urgency.".to_string())]);
    let session = session_with(&backend);

    session.send("First question").await;
    session.send("Second question").await;

    let stream_calls = backend.stream_calls.lock();
    assert_eq!(stream_calls.len(), 2);
    assert!(stream_calls[0].1.is_empty());
    assert_eq!(
        stream_calls[1].1,
        vec![
            ChatTurn::user("First question"),
            ChatTurn::model("Use urgency."),
        ]
    );
}

#[tokio::test]
async fn failed_turns_are_not_committed_to_history() {
    let backend = Arc::new(MockBackend::new());
    backend.set_fragments(vec![Err(())]);
    let session = session_with(&backend);

    session.send("First question").await;
    backend.set_fragments(vec![Ok("ok".to_string())]);
    session.send("Second question").await;

    let stream_calls = backend.stream_calls.lock();
    assert!(
        stream_calls[1].1.is_empty(),
        "a failed turn must not enter the history"
    );
}

#[tokio::test]
async fn reentrant_send_is_a_silent_no_op() {
    let backend = Arc::new(MockBackend::new());
    backend.set_fragments(vec![Ok("slow reply".to_string())]);
    *backend.fragment_delay.lock() = Some(Duration::from_millis(50));
    let session = session_with(&backend);

    tokio::join!(session.send("first"), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        session.send("second").await;
    });

    let stream_calls = backend.stream_calls.lock();
    assert_eq!(stream_calls.len(), 1);
    assert_eq!(stream_calls[0].0, "first");

    // greeting + one user + one model message, nothing from the second send
    assert_eq!(session.messages().get().len(), 3);
}

#[tokio::test]
async fn whitespace_message_is_a_no_op() {
    let backend = Arc::new(MockBackend::new());
    let session = session_with(&backend);

    session.send("   \n ").await;

    assert!(backend.stream_calls.lock().is_empty());
    assert_eq!(session.messages().get().len(), 1);
    assert!(!session.is_loading().get());
}

#[test]
fn message_ids_are_unique_and_never_the_greeting_id() {
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        let id = generate_message_id();
        assert_ne!(id, GREETING_ID);
        assert!(seen.insert(id), "duplicate id within a session");
    }
}
