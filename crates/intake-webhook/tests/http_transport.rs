//! HttpTransport tests against a local mock server

use intake_conf::WebhookSettings;
use intake_forms::{Attachment, CampaignDraft, Platform, ValidationEngine};
use intake_webhook::{
	HttpTransport, SubmissionController, SubmitError, SubmitOutcome, TransportError,
	WebhookPayload, WebhookTransport,
};
use mockito::Matcher;
use rstest::{fixture, rstest};
use std::io::Write;

#[fixture]
fn valid_draft() -> CampaignDraft {
	let mut draft = CampaignDraft {
		campaign_name: "Summer Launch".to_string(),
		campaign_type: "Product Launch".to_string(),
		brand_name: "Acme".to_string(),
		budget: "15000".to_string(),
		followers: "120000".to_string(),
		..CampaignDraft::empty()
	};
	draft.platform.set(Platform::Instagram, true);
	draft
}

fn transport_for(server: &mockito::ServerGuard) -> HttpTransport {
	let settings = WebhookSettings::new(format!("{}/webhook/campaigns", server.url()))
		.with_user_agent("intake-tests");
	HttpTransport::from_settings(&settings).unwrap()
}

/// Test: the draft is posted once as multipart with its text parts
#[rstest]
#[tokio::test]
async fn test_posts_multipart_body(valid_draft: CampaignDraft) {
	// Arrange
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/webhook/campaigns")
		.match_header("content-type", Matcher::Regex("^multipart/form-data".to_string()))
		.match_header("user-agent", "intake-tests")
		.match_body(Matcher::AllOf(vec![
			Matcher::Regex(r#"name="campaignName"\r\n\r\nSummer Launch"#.to_string()),
			Matcher::Regex(
				r#"name="platform"\r\n\r\n\{"instagram":true,"facebook":false,"youtube":false\}"#
					.to_string(),
			),
		]))
		.with_status(200)
		.expect(1)
		.create_async()
		.await;
	let transport = transport_for(&server);
	let payload = WebhookPayload::from_draft(&valid_draft).unwrap();

	// Act
	let response = transport.post(&payload).await.unwrap();

	// Assert
	assert!(response.is_accepted());
	mock.assert_async().await;
}

/// Test: the attachment travels as a file part with its content type
#[rstest]
#[tokio::test]
async fn test_attachment_part(valid_draft: CampaignDraft) {
	// Arrange
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/webhook/campaigns")
		.match_body(Matcher::AllOf(vec![
			Matcher::Regex(r#"name="attachment"; filename="brief.csv""#.to_string()),
			Matcher::Regex("(?i)content-type: text/csv".to_string()),
		]))
		.with_status(201)
		.expect(1)
		.create_async()
		.await;
	let draft = CampaignDraft {
		attachment: Some(Attachment::new("brief.csv", b"handle,followers\n".to_vec())),
		..valid_draft
	};
	let controller = SubmissionController::new(transport_for(&server), ValidationEngine::default());

	// Act
	let outcome = controller.submit(&draft).await;

	// Assert
	assert_eq!(outcome, SubmitOutcome::Success);
	mock.assert_async().await;
}

/// Test: a non-accepted status is reported with its code, and never retried
#[rstest]
#[case(202)]
#[case(400)]
#[case(500)]
#[tokio::test]
async fn test_rejected_status(valid_draft: CampaignDraft, #[case] status: usize) {
	// Arrange
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/webhook/campaigns")
		.with_status(status)
		.with_body("nope")
		.expect(1)
		.create_async()
		.await;
	let controller = SubmissionController::new(transport_for(&server), ValidationEngine::default());

	// Act
	let outcome = controller.submit(&valid_draft).await;

	// Assert
	assert_eq!(
		outcome,
		SubmitOutcome::NetworkFailed(SubmitError::Rejected {
			status: status as u16,
			body: "nope".to_string(),
		})
	);
	mock.assert_async().await;
}

/// Test: a broken response body still reports the status
#[rstest]
#[tokio::test]
async fn test_unreadable_body_keeps_status(valid_draft: CampaignDraft) {
	// Arrange
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/webhook/campaigns")
		.with_status(500)
		.with_chunked_body(|w| {
			w.write_all(b"partial")?;
			Err(std::io::Error::other("connection dropped"))
		})
		.expect(1)
		.create_async()
		.await;
	let transport = transport_for(&server);
	let payload = WebhookPayload::from_draft(&valid_draft).unwrap();

	// Act
	let response = transport.post(&payload).await.unwrap();

	// Assert
	assert_eq!(response.status, 500);
	assert!(response.body.is_empty());
	mock.assert_async().await;
}

/// Test: an unreachable endpoint is a transport failure
#[rstest]
#[tokio::test]
async fn test_unreachable_endpoint(valid_draft: CampaignDraft) {
	// Arrange
	let settings = WebhookSettings::new("http://127.0.0.1:1/webhook").with_timeout_secs(5);
	let transport = HttpTransport::from_settings(&settings).unwrap();
	let payload = WebhookPayload::from_draft(&valid_draft).unwrap();

	// Act
	let result = transport.post(&payload).await;

	// Assert
	assert!(matches!(
		result,
		Err(TransportError::Connect(_) | TransportError::Request(_))
	));
}
