//! Webhook submission for the campaign intake form
//!
//! - [`WebhookPayload`]: the multipart-shaped serialization of a draft
//! - [`WebhookTransport`]: the seam that posts a payload once ([`HttpTransport`],
//!   [`MemoryTransport`])
//! - [`SubmissionController`]: validate, serialize, post, classify
//! - [`FormSession`]: a form store wired to a controller and a [`Notifier`]
//!
//! ## Example
//!
//! ```
//! use intake_forms::{FieldUpdate, TextField, ValidationEngine};
//! use intake_webhook::{FormSession, MemoryNotifier, MemoryTransport, SubmissionController};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let transport = MemoryTransport::new();
//! let session = FormSession::new(
//!     SubmissionController::new(transport.clone(), ValidationEngine::default()),
//!     MemoryNotifier::new(),
//! );
//!
//! session.apply(FieldUpdate::text(TextField::CampaignName, "Spring Launch"));
//! session.apply(FieldUpdate::text(TextField::CampaignType, "Awareness"));
//! session.apply(FieldUpdate::text(TextField::BrandName, "Acme"));
//! session.apply(FieldUpdate::text(TextField::Budget, "5000"));
//! session.apply(FieldUpdate::text(TextField::Followers, "20000"));
//!
//! let outcome = session.submit().await.unwrap();
//! assert!(outcome.is_success());
//! assert_eq!(transport.count(), 1);
//! assert!(session.draft().campaign_name.is_empty());
//! # }
//! ```

pub mod controller;
pub mod http;
pub mod memory;
pub mod notice;
pub mod payload;
pub mod session;
pub mod transport;

pub use controller::{SubmissionController, SubmitError, SubmitOutcome};
pub use http::HttpTransport;
pub use memory::MemoryTransport;
pub use notice::{MemoryNotifier, Notice, NoticeLevel, Notifier, TracingNotifier};
pub use payload::{PartValue, PayloadPart, WebhookPayload};
pub use session::{FormSession, SessionError};
pub use transport::{TransportError, WebhookResponse, WebhookTransport};

pub type WebhookResult<T> = std::result::Result<T, TransportError>;
