use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use mailmuse::CampaignWorkflow;
use mailmuse::gemini::{CAMPAIGN_ERROR_MESSAGE, GenerationClient, IMAGE_ERROR_MESSAGE};
use mailmuse::types::AspectRatio;

mod test_utils;
use test_utils::MockBackend;

fn workflow_with(backend: &Arc<MockBackend>) -> CampaignWorkflow {
    CampaignWorkflow::new(GenerationClient::with_backend(backend.clone()))
}

#[tokio::test]
async fn successful_run_produces_campaign_and_image() {
    let backend = Arc::new(MockBackend::new());
    let workflow = workflow_with(&backend);

    workflow
        .generate("A flash sale for sneakers", AspectRatio::Landscape)
        .await;

    let campaign = workflow.campaign().get().expect("campaign should be set");
    assert!(!campaign.subject.is_empty());
    assert!(!campaign.preview_text.is_empty());
    assert!(!campaign.body.is_empty());
    assert!(!campaign.image_prompt.is_empty());

    assert!(workflow.image().get().is_some());
    assert!(workflow.error().get().is_none());
    assert!(!workflow.is_loading().get());

    // The image request uses the campaign's own prompt and the caller's ratio
    let image_calls = backend.image_calls.lock();
    assert_eq!(
        image_calls.as_slice(),
        &[(campaign.image_prompt, AspectRatio::Landscape)]
    );
}

#[tokio::test]
async fn failed_campaign_never_attempts_image() {
    let backend = Arc::new(MockBackend::new());
    backend.fail_campaign.store(true, Ordering::SeqCst);
    let workflow = workflow_with(&backend);

    workflow.generate("A flash sale", AspectRatio::Square).await;

    assert!(workflow.campaign().get().is_none());
    assert!(workflow.image().get().is_none());
    assert!(backend.image_calls.lock().is_empty());
    assert_eq!(
        workflow.error().get().as_deref(),
        Some(CAMPAIGN_ERROR_MESSAGE)
    );
    assert!(!workflow.is_loading().get());
}

#[tokio::test]
async fn image_failure_is_partial_success() {
    let backend = Arc::new(MockBackend::new());
    backend.fail_image.store(true, Ordering::SeqCst);
    let workflow = workflow_with(&backend);

    workflow.generate("A flash sale", AspectRatio::Portrait).await;

    assert!(workflow.campaign().get().is_some());
    assert!(workflow.image().get().is_none());
    assert_eq!(workflow.error().get().as_deref(), Some(IMAGE_ERROR_MESSAGE));
    assert!(!workflow.is_loading().get());
}

#[tokio::test]
async fn reentrant_generate_is_a_silent_no_op() {
    let backend = Arc::new(MockBackend::new());
    *backend.campaign_delay.lock() = Some(Duration::from_millis(50));
    let workflow = workflow_with(&backend);

    // The second call starts while the first is suspended in the backend
    tokio::join!(
        workflow.generate("first", AspectRatio::Landscape),
        async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            workflow.generate("second", AspectRatio::Landscape).await;
        }
    );

    let campaign_calls = backend.campaign_calls.lock();
    assert_eq!(campaign_calls.as_slice(), &["first".to_string()]);
    assert!(workflow.campaign().get().is_some());
    assert!(!workflow.is_loading().get());
}

#[tokio::test]
async fn whitespace_prompt_issues_no_remote_call() {
    let backend = Arc::new(MockBackend::new());
    let workflow = workflow_with(&backend);

    workflow.generate("   \n\t ", AspectRatio::Landscape).await;

    assert!(backend.campaign_calls.lock().is_empty());
    assert!(backend.image_calls.lock().is_empty());
    assert!(workflow.campaign().get().is_none());
    assert!(workflow.error().get().is_none());
    assert!(!workflow.is_loading().get());
}

#[tokio::test]
async fn new_run_replaces_previous_results_wholesale() {
    let backend = Arc::new(MockBackend::new());
    let workflow = workflow_with(&backend);

    workflow.generate("first run", AspectRatio::Landscape).await;
    assert!(workflow.campaign().get().is_some());
    assert!(workflow.image().get().is_some());

    // Second run fails at the campaign step: nothing stale may survive
    backend.fail_campaign.store(true, Ordering::SeqCst);
    workflow.generate("second run", AspectRatio::Landscape).await;

    assert!(workflow.campaign().get().is_none());
    assert!(workflow.image().get().is_none());
    assert_eq!(
        workflow.error().get().as_deref(),
        Some(CAMPAIGN_ERROR_MESSAGE)
    );
}
