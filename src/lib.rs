//! # Campaign Intake
//!
//! Marketing campaign intake form: the draft record, its field validation,
//! the editable form state, and submission of a validated draft to a
//! webhook endpoint.
//!
//! ## Feature Flags
//!
//! - `minimal` - Draft model, validation and form state only
//! - `standard` - Adds webhook submission
//! - `full` (default) - Adds file and environment settings
//!
//! ## Quick Example
//!
//! ```rust
//! use campaign_intake::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let transport = MemoryTransport::new();
//! let session = FormSession::new(
//!     SubmissionController::new(transport.clone(), ValidationEngine::default()),
//!     MemoryNotifier::new(),
//! );
//!
//! session.apply(FieldUpdate::text(TextField::CampaignName, "Acme 2"));
//!
//! let outcome = session.submit().await.unwrap();
//! assert!(matches!(outcome, SubmitOutcome::ValidationFailed(_)));
//! assert_eq!(
//!     session.errors().get(FieldName::CampaignName),
//!     Some("Campaign Name must contain only letters.")
//! );
//! assert_eq!(transport.count(), 0);
//! # }
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "webhook")]
pub mod webhook;

#[cfg(feature = "forms")]
pub use intake_forms::{
	Attachment, CampaignDraft, ErrorSet, FieldName, FieldUpdate, FormStateStore, Platform,
	Priority, RuleRevision, TextField, ValidationEngine,
};

#[cfg(feature = "webhook")]
pub use intake_webhook::{
	FormSession, HttpTransport, Notice, Notifier, SubmissionController, SubmitError,
	SubmitOutcome, WebhookTransport,
};

#[cfg(feature = "conf")]
pub use intake_conf::{IntakeSettings, WebhookSettings};

pub mod prelude {
	#[cfg(feature = "forms")]
	pub use crate::{
		Attachment, CampaignDraft, ErrorSet, FieldName, FieldUpdate, FormStateStore, Platform,
		Priority, RuleRevision, TextField, ValidationEngine,
	};

	#[cfg(feature = "webhook")]
	pub use crate::{
		FormSession, HttpTransport, Notice, Notifier, SubmissionController, SubmitError,
		SubmitOutcome, WebhookTransport,
	};
	#[cfg(feature = "webhook")]
	pub use intake_webhook::{MemoryNotifier, MemoryTransport, NoticeLevel, TracingNotifier};

	#[cfg(feature = "conf")]
	pub use crate::{IntakeSettings, WebhookSettings};
}
