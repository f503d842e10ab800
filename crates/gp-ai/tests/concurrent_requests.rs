//! Overlapping analysis requests against the mocked providers.

use std::time::Duration;

use gp_ai::{AiClient, AnalysisRequest, AnalysisSlot, Document};
use gp_config::AiConfig;
use gp_core::entities::AnalysisResult;
use gp_core::enums::AiProvider;
use pretty_assertions::assert_eq;

fn client(provider: AiProvider, latency_ms: u64) -> AiClient {
    AiClient::new(AiConfig {
        provider,
        custom_endpoint: String::new(),
        mock_latency_ms: latency_ms,
    })
}

fn request(persona: &str) -> AnalysisRequest {
    AnalysisRequest::new(
        vec![
            Document::from_file_name("rfi.txt", "The Government requires FedRAMP High."),
            Document::from_file_name("qa.md", "Q1: Is on-premise acceptable? A: No."),
        ],
        persona,
    )
}

#[tokio::test]
async fn slow_first_request_is_discarded() {
    let slow = client(AiProvider::OpenAi, 60);
    let fast = client(AiProvider::Azure, 0);
    let mut slot: AnalysisSlot<AnalysisResult> = AnalysisSlot::new();

    let first = slot.begin();
    let second = slot.begin();

    let slow_request = request("Writer");
    let fast_request = request("Capture Manager");
    let (late, early) = tokio::join!(
        async {
            let result = slow.analyze(&slow_request).await;
            tokio::time::sleep(Duration::from_millis(10)).await;
            result
        },
        fast.analyze(&fast_request),
    );

    assert!(slot.complete(second, early));
    assert!(!slot.complete(first, late));

    let kept = slot.result().unwrap();
    assert!(kept.summary.starts_with("[Mock Azure OpenAI]"));
    assert!(kept.summary.contains("Capture Manager"));
}

#[tokio::test]
async fn custom_prompt_reaches_the_provider() {
    let result = client(AiProvider::GoogleGemini, 0)
        .analyze(&request("Technical Solutions").with_prompt("Focus on security controls."))
        .await
        .unwrap();
    assert!(result.summary.contains("Focus on security controls."));
}

#[tokio::test]
async fn failure_lands_in_the_slot_as_text() {
    let mut slot: AnalysisSlot<AnalysisResult> = AnalysisSlot::new();
    let ticket = slot.begin();
    let outcome = client(AiProvider::Custom, 0)
        .analyze(&request("Writer"))
        .await;
    assert!(slot.complete(ticket, outcome));
    assert_eq!(
        slot.error(),
        Some("Custom Endpoint is not configured: Custom endpoint is not configured.")
    );
    assert!(!slot.is_loading());
}
