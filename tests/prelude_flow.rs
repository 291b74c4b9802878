//! Facade tests
//!
//! The prelude is enough to configure, edit and submit a form.

use campaign_intake::conf::Env;
use campaign_intake::prelude::*;
use rstest::rstest;

/// Test: settings select the rule revision used by the session
#[rstest]
#[tokio::test]
async fn test_revision_from_settings_drives_validation() {
	// Arrange
	let env = Env::from_vars([
		("APP_WEBHOOK_URL", "https://hooks.example.com/in"),
		("APP_RULE_REVISION", "initial"),
	])
	.with_prefix("APP_");
	let settings = IntakeSettings::from_env(&env).unwrap();
	let transport = MemoryTransport::new();
	let engine = ValidationEngine::for_revision(settings.revision);
	let session = FormSession::new(
		SubmissionController::new(transport.clone(), engine),
		MemoryNotifier::new(),
	);
	session.apply(FieldUpdate::text(TextField::CampaignName, "Spring"));
	session.apply(FieldUpdate::text(TextField::CampaignType, "Awareness"));
	session.apply(FieldUpdate::text(TextField::BrandName, "Acme"));
	session.apply(FieldUpdate::text(TextField::Budget, "five thousand"));
	session.apply(FieldUpdate::text(TextField::Followers, "20000"));

	// Act
	let outcome = session.submit().await.unwrap();

	// Assert
	assert_eq!(settings.revision, RuleRevision::Initial);
	assert_eq!(
		outcome.errors().and_then(|e| e.get(FieldName::Budget)),
		Some("Budget must be a valid number.")
	);
	assert_eq!(transport.count(), 0);
}

/// Test: the same draft passes the latest rules and is submitted
#[rstest]
#[tokio::test]
async fn test_latest_revision_accepts_free_format_budget() {
	// Arrange
	let transport = MemoryTransport::new();
	let session = FormSession::new(
		SubmissionController::new(transport.clone(), ValidationEngine::default()),
		TracingNotifier,
	);
	session.apply(FieldUpdate::text(TextField::CampaignName, "Spring"));
	session.apply(FieldUpdate::text(TextField::CampaignType, "Awareness"));
	session.apply(FieldUpdate::text(TextField::BrandName, "Acme"));
	session.apply(FieldUpdate::text(TextField::Budget, "five thousand"));
	session.apply(FieldUpdate::text(TextField::Followers, "20k"));
	session.apply(FieldUpdate::Priority(Some(Priority::Medium)));

	// Act
	let outcome = session.submit().await.unwrap();

	// Assert
	assert!(outcome.is_success());
	assert_eq!(transport.sent()[0].text("budget"), Some("five thousand"));
	assert_eq!(transport.sent()[0].text("priority"), Some("medium"));
	assert_eq!(session.draft(), CampaignDraft::empty());
}
