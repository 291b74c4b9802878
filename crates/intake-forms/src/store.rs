//! In-memory form state
//!
//! [`FormStateStore`] owns the draft being edited and the errors currently
//! shown next to each input. It has a single writer: the session driving the
//! form.

use crate::draft::{Attachment, CampaignDraft, Platform, Priority};
use crate::error::ErrorSet;
use crate::field::{FieldUpdate, TextField};
use crate::validation::ValidationEngine;

/// Draft plus its displayed validation errors.
///
/// # Examples
///
/// ```
/// use intake_forms::{FieldName, FormStateStore, TextField, ValidationEngine};
///
/// let mut store = FormStateStore::new();
/// assert!(!store.validate_with(&ValidationEngine::default()));
/// assert!(store.errors().contains(FieldName::CampaignName));
///
/// store.set_text(TextField::CampaignName, "Spring Launch");
/// assert!(!store.errors().contains(FieldName::CampaignName));
/// assert!(store.errors().contains(FieldName::BrandName));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStateStore {
	draft: CampaignDraft,
	errors: ErrorSet,
}

impl FormStateStore {
	pub fn new() -> Self {
		Self {
			draft: CampaignDraft::empty(),
			errors: ErrorSet::new(),
		}
	}

	/// Start from an existing draft, e.g. one restored by a UI adapter.
	pub fn with_draft(draft: CampaignDraft) -> Self {
		Self {
			draft,
			errors: ErrorSet::new(),
		}
	}

	/// Apply one user edit.
	///
	/// The pending error for the edited field is dropped without re-validating;
	/// all other errors stay as they are.
	pub fn apply(&mut self, update: FieldUpdate) {
		if let Some(field) = update.target()
			&& self.errors.clear_field(field).is_some()
		{
			tracing::trace!(field = %field, "cleared pending validation error");
		}

		match update {
			FieldUpdate::Text(field, value) => {
				*self.draft.text_mut(field) = value;
			}
			FieldUpdate::Platform(platform, enabled) => {
				self.draft.platform.set(platform, enabled);
			}
			FieldUpdate::Priority(priority) => {
				self.draft.priority = priority;
			}
			FieldUpdate::Attachment(attachment) => {
				if let Some(file) = &attachment {
					tracing::debug!(
						file_name = file.file_name(),
						content_type = file.content_type(),
						size = file.size(),
						"attachment selected"
					);
				}
				self.draft.attachment = attachment;
			}
		}
	}

	pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
		self.apply(FieldUpdate::text(field, value));
	}

	pub fn set_platform(&mut self, platform: Platform, enabled: bool) {
		self.apply(FieldUpdate::Platform(platform, enabled));
	}

	pub fn set_priority(&mut self, priority: Option<Priority>) {
		self.apply(FieldUpdate::Priority(priority));
	}

	pub fn set_attachment(&mut self, attachment: Option<Attachment>) {
		self.apply(FieldUpdate::Attachment(attachment));
	}

	pub fn draft(&self) -> &CampaignDraft {
		&self.draft
	}

	pub fn errors(&self) -> &ErrorSet {
		&self.errors
	}

	/// Replace the displayed errors with a freshly computed set.
	pub fn replace_errors(&mut self, errors: ErrorSet) {
		self.errors = errors;
	}

	/// Re-run validation over the whole draft and store the result.
	///
	/// Returns `true` when the draft may be submitted.
	pub fn validate_with(&mut self, engine: &ValidationEngine) -> bool {
		self.errors = engine.validate(&self.draft);
		self.errors.is_empty()
	}

	/// Back to the blank draft with no errors.
	pub fn reset(&mut self) {
		self.draft = CampaignDraft::empty();
		self.errors.clear();
		tracing::debug!("form state reset");
	}

	/// Owned copy of the draft for an outgoing submission.
	///
	/// Edits made after the snapshot is taken do not affect it.
	pub fn snapshot(&self) -> CampaignDraft {
		self.draft.clone()
	}

	/// `true` when the store equals a freshly created one.
	pub fn is_pristine(&self) -> bool {
		self.draft == CampaignDraft::empty() && self.errors.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldName;
	use rstest::rstest;

	#[rstest]
	fn test_platform_flag_updates_nested_set() {
		// Arrange
		let mut store = FormStateStore::new();

		// Act
		store.set_platform(Platform::Instagram, true);
		store.set_platform(Platform::Youtube, true);
		store.set_platform(Platform::Instagram, false);

		// Assert
		assert!(!store.draft().platform.instagram);
		assert!(!store.draft().platform.facebook);
		assert!(store.draft().platform.youtube);
	}

	#[rstest]
	fn test_platform_flag_keeps_errors() {
		// Arrange
		let mut store = FormStateStore::new();
		store.validate_with(&ValidationEngine::default());
		let before = store.errors().clone();

		// Act
		store.set_platform(Platform::Facebook, true);

		// Assert
		assert_eq!(store.errors(), &before);
	}

	#[rstest]
	fn test_attachment_update_clears_attachment_error() {
		// Arrange
		let mut store = FormStateStore::new();
		let mut errors = ErrorSet::new();
		errors.insert(FieldName::Attachment, "File size must be less than 2MB.");
		errors.insert(FieldName::Budget, "Budget is required.");
		store.replace_errors(errors);

		// Act
		store.set_attachment(None);

		// Assert
		assert!(!store.errors().contains(FieldName::Attachment));
		assert!(store.errors().contains(FieldName::Budget));
	}

	#[rstest]
	fn test_snapshot_is_detached() {
		// Arrange
		let mut store = FormStateStore::new();
		store.set_text(TextField::Notes, "first");
		let snapshot = store.snapshot();

		// Act
		store.set_text(TextField::Notes, "second");

		// Assert
		assert_eq!(snapshot.notes, "first");
		assert_eq!(store.draft().notes, "second");
	}

	#[rstest]
	fn test_with_draft_starts_without_errors() {
		// Arrange
		let draft = CampaignDraft {
			notes: "restored".to_string(),
			..CampaignDraft::empty()
		};

		// Act
		let store = FormStateStore::with_draft(draft);

		// Assert
		assert_eq!(store.draft().notes, "restored");
		assert!(store.errors().is_empty());
		assert!(!store.is_pristine());
	}
}
