//! FormStateStore lifecycle tests
//!
//! Edit, validate, clear-on-edit and reset behaviour of the form state.

use intake_forms::{
	Attachment, CampaignDraft, FieldName, FieldUpdate, FormStateStore, Platform, Priority,
	TextField, ValidationEngine,
};
use rstest::rstest;

fn fill_required(store: &mut FormStateStore) {
	store.set_text(TextField::CampaignName, "Holiday Push");
	store.set_text(TextField::CampaignType, "Seasonal");
	store.set_text(TextField::BrandName, "Northwind");
	store.set_text(TextField::Budget, "9000");
	store.set_text(TextField::Followers, "48000");
}

/// Test: editing a field clears only that field's error
#[rstest]
#[case(TextField::CampaignName)]
#[case(TextField::Budget)]
#[case(TextField::Followers)]
fn test_edit_clears_only_its_own_error(#[case] field: TextField) {
	// Arrange
	let mut store = FormStateStore::new();
	store.validate_with(&ValidationEngine::default());
	let before = store.errors().clone();
	assert!(before.contains(field.field_name()));

	// Act
	store.set_text(field, "x");

	// Assert
	assert!(!store.errors().contains(field.field_name()));
	assert_eq!(store.errors().len(), before.len() - 1);
	for (name, message) in &before {
		if *name != field.field_name() {
			assert_eq!(store.errors().get(*name), Some(message.as_str()));
		}
	}
}

/// Test: clearing is optimistic, an invalid edit is not re-validated
#[rstest]
fn test_edit_does_not_revalidate() {
	// Arrange
	let mut store = FormStateStore::new();
	store.validate_with(&ValidationEngine::default());

	// Act
	store.set_text(TextField::CampaignName, "Acme 2");

	// Assert
	assert!(!store.errors().contains(FieldName::CampaignName));
}

/// Test: reset restores the pristine state
#[rstest]
fn test_reset_restores_defaults() {
	// Arrange
	let mut store = FormStateStore::new();
	fill_required(&mut store);
	store.set_platform(Platform::Youtube, true);
	store.set_priority(Some(Priority::Medium));
	store.set_attachment(Some(Attachment::new("brief.pdf", vec![1, 2, 3])));
	store.set_text(TextField::EndDate, "2020-01-01");
	store.set_text(TextField::StartDate, "2021-01-01");
	store.validate_with(&ValidationEngine::default());
	assert!(!store.errors().is_empty());

	// Act
	store.reset();

	// Assert
	assert_eq!(store.draft(), &CampaignDraft::empty());
	assert!(store.errors().is_empty());
	assert!(store.is_pristine());
	assert_eq!(store, FormStateStore::new());
}

/// Test: a completed draft validates and the errors are recomputed wholesale
#[rstest]
fn test_validate_recomputes_wholesale() {
	// Arrange
	let mut store = FormStateStore::new();
	let engine = ValidationEngine::default();
	store.validate_with(&engine);
	fill_required(&mut store);
	store.apply(FieldUpdate::text(TextField::Niche, "Food 4 All"));

	// Act
	let ok = store.validate_with(&engine);

	// Assert
	assert!(!ok);
	assert_eq!(store.errors().len(), 1);
	assert_eq!(
		store.errors().get(FieldName::Niche),
		Some("Niche must contain only letters.")
	);
}

/// Test: priority updates parse the select value
#[rstest]
fn test_priority_from_select_value() {
	// Arrange
	let mut store = FormStateStore::new();

	// Act
	store.apply(FieldUpdate::Priority(Priority::parse_optional("high").unwrap()));

	// Assert
	assert_eq!(store.draft().priority, Some(Priority::High));

	store.apply(FieldUpdate::Priority(Priority::parse_optional("").unwrap()));
	assert_eq!(store.draft().priority, None);
}
