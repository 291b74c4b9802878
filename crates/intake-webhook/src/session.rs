//! Form session
//!
//! Ties one [`FormStateStore`] to a [`SubmissionController`] and a
//! [`Notifier`]. The session is the single writer of its store: edits go
//! through [`FormSession::apply`], and the outcome of each submit is written
//! back here (reset on success, errors stored on validation failure, nothing
//! touched on network failure).
//!
//! Only one submit may be in flight at a time. A second call while the first
//! is awaiting the network is refused with [`SessionError::AlreadySubmitting`].

use crate::controller::{SubmissionController, SubmitOutcome};
use crate::http::HttpTransport;
use crate::notice::{Notifier, TracingNotifier};
use crate::transport::{TransportError, WebhookTransport};
use intake_conf::IntakeSettings;
use intake_forms::{CampaignDraft, ErrorSet, FieldUpdate, FormStateStore, ValidationEngine};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
	#[error("A submission is already in progress")]
	AlreadySubmitting,
}

/// Clears the in-flight flag however the submit future ends.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
	fn acquire(flag: &'a AtomicBool) -> Option<Self> {
		flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.ok()
			.map(|_| Self(flag))
	}
}

impl Drop for InFlight<'_> {
	fn drop(&mut self) {
		self.0.store(false, Ordering::Release);
	}
}

pub struct FormSession<T> {
	store: Mutex<FormStateStore>,
	controller: SubmissionController<T>,
	notifier: Arc<dyn Notifier>,
	submitting: AtomicBool,
}

impl FormSession<HttpTransport> {
	/// Session posting over HTTP to the configured endpoint, logging notices.
	pub fn from_settings(settings: &IntakeSettings) -> Result<Self, TransportError> {
		let transport = HttpTransport::from_settings(&settings.webhook)?;
		let engine = ValidationEngine::for_revision(settings.revision);
		tracing::debug!(revision = %settings.revision, "form session configured");
		Ok(Self::new(
			SubmissionController::new(transport, engine),
			TracingNotifier,
		))
	}
}

impl<T: WebhookTransport> FormSession<T> {
	pub fn new(controller: SubmissionController<T>, notifier: impl Notifier + 'static) -> Self {
		Self {
			store: Mutex::new(FormStateStore::new()),
			controller,
			notifier: Arc::new(notifier),
			submitting: AtomicBool::new(false),
		}
	}

	pub fn controller(&self) -> &SubmissionController<T> {
		&self.controller
	}

	/// Apply one edit. Allowed while a submit is in flight.
	pub fn apply(&self, update: FieldUpdate) {
		self.store.lock().apply(update);
	}

	/// Current draft, copied out of the store.
	pub fn draft(&self) -> CampaignDraft {
		self.store.lock().snapshot()
	}

	pub fn errors(&self) -> ErrorSet {
		self.store.lock().errors().clone()
	}

	/// Whether the submit trigger should be disabled.
	pub fn is_submitting(&self) -> bool {
		self.submitting.load(Ordering::Acquire)
	}

	/// Submit the current draft and write the outcome back to the store.
	///
	/// Exactly one notice is emitted per accepted call.
	///
	/// # Examples
	///
	/// ```
	/// use intake_forms::{FieldUpdate, TextField, ValidationEngine};
	/// use intake_webhook::{FormSession, MemoryNotifier, MemoryTransport, SubmissionController};
	///
	/// # #[tokio::main]
	/// # async fn main() {
	/// let session = FormSession::new(
	///     SubmissionController::new(MemoryTransport::new(), ValidationEngine::default()),
	///     MemoryNotifier::new(),
	/// );
	/// session.apply(FieldUpdate::text(TextField::CampaignName, "Acme 2"));
	///
	/// let outcome = session.submit().await.unwrap();
	/// assert!(!outcome.is_success());
	/// assert!(!session.errors().is_empty());
	/// # }
	/// ```
	pub async fn submit(&self) -> Result<SubmitOutcome, SessionError> {
		let Some(_in_flight) = InFlight::acquire(&self.submitting) else {
			tracing::debug!("submit ignored, a submission is already in progress");
			return Err(SessionError::AlreadySubmitting);
		};

		// The lock is released before awaiting; later edits do not touch this payload.
		let draft = self.store.lock().snapshot();
		let outcome = self.controller.submit(&draft).await;

		{
			let mut store = self.store.lock();
			match &outcome {
				SubmitOutcome::Success => store.reset(),
				SubmitOutcome::ValidationFailed(errors) => store.replace_errors(errors.clone()),
				SubmitOutcome::NetworkFailed(_) => {}
			}
		}

		self.notifier.notify(&outcome.notice());
		Ok(outcome)
	}
}
