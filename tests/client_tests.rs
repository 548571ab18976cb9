use std::sync::Arc;
use std::sync::atomic::Ordering;

use mailmuse::gemini::{
    CAMPAIGN_ERROR_MESSAGE, GenerationClient, IMAGE_ERROR_MESSAGE, parse_sse_line,
    response_schema_for,
};
use mailmuse::types::{AspectRatio, Campaign, GeneratedImage};

mod test_utils;
use test_utils::MockBackend;

#[tokio::test]
async fn campaign_failure_sets_the_fixed_error_message() {
    let backend = Arc::new(MockBackend::new());
    backend.fail_campaign.store(true, Ordering::SeqCst);
    let client = GenerationClient::with_backend(backend);

    assert!(client.generate_campaign("a prompt").await.is_none());
    assert_eq!(client.error().get().as_deref(), Some(CAMPAIGN_ERROR_MESSAGE));
}

#[tokio::test]
async fn image_failure_sets_the_safety_hinting_message() {
    let backend = Arc::new(MockBackend::new());
    backend.fail_image.store(true, Ordering::SeqCst);
    let client = GenerationClient::with_backend(backend);

    let result = client.generate_image("a prompt", AspectRatio::Square).await;
    assert!(result.is_none());
    assert_eq!(client.error().get().as_deref(), Some(IMAGE_ERROR_MESSAGE));
}

#[tokio::test]
async fn each_attempt_clears_the_previous_error() {
    let backend = Arc::new(MockBackend::new());
    backend.fail_campaign.store(true, Ordering::SeqCst);
    let client = GenerationClient::with_backend(backend.clone());

    assert!(client.generate_campaign("a prompt").await.is_none());
    assert!(client.error().get().is_some());

    backend.fail_campaign.store(false, Ordering::SeqCst);
    let campaign = client.generate_campaign("a prompt").await;
    assert!(campaign.is_some());
    assert!(client.error().get().is_none(), "stale error must not persist");
}

#[test]
fn schema_requires_all_four_camel_case_fields() {
    let schema = response_schema_for::<Campaign>();

    let required: Vec<&str> = schema["required"]
        .as_array()
        .expect("required array")
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();

    assert_eq!(required.len(), 4);
    for field in ["subject", "previewText", "body", "imagePrompt"] {
        assert!(required.contains(&field));
        assert_eq!(schema["properties"][field]["type"], "string");
    }
}

#[test]
fn sse_line_with_candidate_text_yields_a_fragment() {
    let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"Hel"}]}}]}"#;
    assert_eq!(parse_sse_line(line), Some("Hel".to_string()));
}

#[test]
fn sse_noise_yields_nothing() {
    assert_eq!(parse_sse_line(""), None);
    assert_eq!(parse_sse_line(": keep-alive"), None);
    assert_eq!(parse_sse_line("data: [DONE]"), None);
    assert_eq!(parse_sse_line("data: {not json"), None);
    // Final event carrying only usage metadata
    assert_eq!(
        parse_sse_line(r#"data: {"usageMetadata":{"promptTokenCount":7}}"#),
        None
    );
}

#[test]
fn campaign_json_round_trips_with_camel_case_keys() {
    let json = r#"{
        "subject": "Hello",
        "previewText": "A preview",
        "body": "<p>Body</p>",
        "imagePrompt": "A picture"
    }"#;
    let campaign: Campaign = serde_json::from_str(json).expect("valid campaign JSON");
    assert_eq!(campaign.preview_text, "A preview");
    assert_eq!(campaign.image_prompt, "A picture");
}

#[test]
fn missing_fields_fail_to_parse_rather_than_half_populate() {
    let json = r#"{"subject": "Hello", "previewText": "A preview"}"#;
    assert!(serde_json::from_str::<Campaign>(json).is_err());
}

#[test]
fn data_uri_embeds_mime_and_payload() {
    let image = GeneratedImage {
        mime_type: "image/jpeg".to_string(),
        data: "AAAA".to_string(),
    };
    assert_eq!(image.data_uri(), "data:image/jpeg;base64,AAAA");
}
