//! Submission controller
//!
//! Validates a draft, serializes it, and posts it once. The controller does
//! not own form state: the caller resets or keeps its store depending on the
//! returned [`SubmitOutcome`].

use crate::notice::Notice;
use crate::payload::WebhookPayload;
use crate::transport::{TransportError, WebhookTransport};
use intake_forms::{CampaignDraft, ErrorSet, ValidationEngine};

/// Why a validated draft did not get through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
	#[error("Could not reach the webhook: {0}")]
	Transport(String),

	#[error("Webhook rejected the submission (HTTP {status})")]
	Rejected { status: u16, body: String },

	#[error("Could not encode the submission: {0}")]
	Encoding(String),
}

impl SubmitError {
	/// HTTP status for rejections, `None` when no response arrived.
	pub fn status(&self) -> Option<u16> {
		match self {
			SubmitError::Rejected { status, .. } => Some(*status),
			_ => None,
		}
	}
}

impl From<TransportError> for SubmitError {
	fn from(error: TransportError) -> Self {
		match error {
			TransportError::Encoding(message) => SubmitError::Encoding(message),
			other => SubmitError::Transport(other.to_string()),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	Success,
	ValidationFailed(ErrorSet),
	NetworkFailed(SubmitError),
}

impl SubmitOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, SubmitOutcome::Success)
	}

	pub fn errors(&self) -> Option<&ErrorSet> {
		match self {
			SubmitOutcome::ValidationFailed(errors) => Some(errors),
			_ => None,
		}
	}

	/// The notice the user should see for this outcome.
	pub fn notice(&self) -> Notice {
		match self {
			SubmitOutcome::Success => Notice::success(),
			SubmitOutcome::ValidationFailed(_) => Notice::validation_failed(),
			SubmitOutcome::NetworkFailed(error) => Notice::submit_failed(error.to_string()),
		}
	}
}

pub struct SubmissionController<T> {
	transport: T,
	engine: ValidationEngine,
}

impl<T: WebhookTransport> SubmissionController<T> {
	pub fn new(transport: T, engine: ValidationEngine) -> Self {
		Self { transport, engine }
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	pub fn engine(&self) -> &ValidationEngine {
		&self.engine
	}

	/// Validate, then post at most once.
	///
	/// # Examples
	///
	/// ```
	/// use intake_forms::{CampaignDraft, ValidationEngine};
	/// use intake_webhook::{MemoryTransport, SubmissionController, SubmitOutcome};
	///
	/// # #[tokio::main]
	/// # async fn main() {
	/// let controller =
	///     SubmissionController::new(MemoryTransport::new(), ValidationEngine::default());
	///
	/// let outcome = controller.submit(&CampaignDraft::empty()).await;
	/// assert!(matches!(outcome, SubmitOutcome::ValidationFailed(_)));
	/// assert_eq!(controller.transport().count(), 0);
	/// # }
	/// ```
	pub async fn submit(&self, draft: &CampaignDraft) -> SubmitOutcome {
		let errors = self.engine.validate(draft);
		if !errors.is_empty() {
			tracing::warn!(
				error_count = errors.len(),
				"campaign draft failed validation, not submitting"
			);
			return SubmitOutcome::ValidationFailed(errors);
		}

		let payload = match WebhookPayload::from_draft(draft) {
			Ok(payload) => payload,
			Err(e) => return Self::network_failed(e.into()),
		};

		match self.transport.post(&payload).await {
			Ok(response) if response.is_accepted() => {
				tracing::info!(
					status = response.status,
					campaign = %draft.campaign_name,
					"campaign submitted"
				);
				SubmitOutcome::Success
			}
			Ok(response) => Self::network_failed(SubmitError::Rejected {
				status: response.status,
				body: response.body,
			}),
			Err(e) => Self::network_failed(e.into()),
		}
	}

	fn network_failed(error: SubmitError) -> SubmitOutcome {
		tracing::error!(error = %error, "campaign submission failed");
		SubmitOutcome::NetworkFailed(error)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::memory::MemoryTransport;
	use intake_forms::FieldName;
	use rstest::{fixture, rstest};

	#[fixture]
	fn valid_draft() -> CampaignDraft {
		CampaignDraft {
			campaign_name: "Spring Launch".to_string(),
			campaign_type: "Awareness".to_string(),
			brand_name: "Acme".to_string(),
			budget: "5000".to_string(),
			followers: "20000".to_string(),
			..CampaignDraft::empty()
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_invalid_draft_never_posts() {
		// Arrange
		let transport = MemoryTransport::new();
		let controller = SubmissionController::new(transport.clone(), ValidationEngine::default());
		let draft = CampaignDraft {
			campaign_name: String::new(),
			..valid_draft()
		};

		// Act
		let outcome = controller.submit(&draft).await;

		// Assert
		let errors = outcome.errors().unwrap();
		assert_eq!(errors.get(FieldName::CampaignName), Some("Campaign Name is required."));
		assert_eq!(transport.count(), 0);
	}

	#[rstest]
	#[case(200)]
	#[case(201)]
	#[tokio::test]
	async fn test_accepted_statuses_succeed(valid_draft: CampaignDraft, #[case] status: u16) {
		// Arrange
		let controller = SubmissionController::new(
			MemoryTransport::with_status(status),
			ValidationEngine::default(),
		);

		// Act
		let outcome = controller.submit(&valid_draft).await;

		// Assert
		assert!(outcome.is_success());
		assert_eq!(controller.transport().count(), 1);
	}

	#[rstest]
	#[tokio::test]
	async fn test_rejection_carries_status(valid_draft: CampaignDraft) {
		// Arrange
		let controller = SubmissionController::new(
			MemoryTransport::with_status(503),
			ValidationEngine::default(),
		);

		// Act
		let outcome = controller.submit(&valid_draft).await;

		// Assert
		match outcome {
			SubmitOutcome::NetworkFailed(error) => {
				assert_eq!(error.status(), Some(503));
				assert_eq!(error.to_string(), "Webhook rejected the submission (HTTP 503)");
			}
			other => panic!("expected NetworkFailed, got {other:?}"),
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_connection_error_is_network_failure(valid_draft: CampaignDraft) {
		// Arrange
		let controller = SubmissionController::new(
			MemoryTransport::failing("refused"),
			ValidationEngine::default(),
		);

		// Act
		let outcome = controller.submit(&valid_draft).await;

		// Assert
		assert_eq!(
			outcome,
			SubmitOutcome::NetworkFailed(SubmitError::Transport(
				"Connection failed: refused".to_string()
			))
		);
		assert_eq!(
			outcome.notice(),
			Notice::submit_failed("Could not reach the webhook: Connection failed: refused")
		);
	}
}
