//! Campaign intake form model and validation
//!
//! This crate provides the client-side core of the campaign intake form:
//! - [`CampaignDraft`]: the flat form record, with an optional file attachment
//! - [`FieldUpdate`]: typed edits resolved by the caller
//! - [`ValidationEngine`]: rule-table driven validation producing an [`ErrorSet`]
//! - [`FormStateStore`]: the draft being edited plus its displayed errors
//!
//! ## Example
//!
//! ```
//! use intake_forms::{FormStateStore, Platform, TextField, ValidationEngine};
//!
//! let mut store = FormStateStore::new();
//! store.set_text(TextField::CampaignName, "Spring Launch");
//! store.set_text(TextField::CampaignType, "Awareness");
//! store.set_text(TextField::BrandName, "Acme");
//! store.set_text(TextField::Budget, "5000");
//! store.set_text(TextField::Followers, "20000");
//! store.set_platform(Platform::Instagram, true);
//!
//! assert!(store.validate_with(&ValidationEngine::default()));
//! ```

pub mod draft;
pub mod error;
pub mod field;
pub mod store;
pub mod validation;
pub mod validators;

pub use draft::{Attachment, CampaignDraft, Platform, PlatformSet, Priority};
pub use error::{ErrorSet, FormError, FormResult};
pub use field::{FieldName, FieldUpdate, TextField};
pub use store::FormStateStore;
pub use validation::{
	ALLOWED_ATTACHMENT_TYPES, AttachmentPolicy, MAX_ATTACHMENT_BYTES, RuleRevision, RuleSet,
	TextFormat, TextRule, ValidationEngine,
};
