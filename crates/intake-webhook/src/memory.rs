//! In-memory transport
//!
//! Records every payload and answers with a scripted reply. Nothing leaves
//! the process.
//!
//! ```
//! use intake_forms::CampaignDraft;
//! use intake_webhook::{MemoryTransport, WebhookPayload, WebhookTransport};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let transport = MemoryTransport::new();
//! let payload = WebhookPayload::from_draft(&CampaignDraft::empty()).unwrap();
//!
//! let response = transport.post(&payload).await.unwrap();
//! assert_eq!(response.status, 200);
//! assert_eq!(transport.count(), 1);
//! # }
//! ```

use crate::payload::WebhookPayload;
use crate::transport::{TransportError, WebhookResponse, WebhookTransport};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Reply {
	Status(u16),
	Fail(TransportError),
}

/// Recording transport with a scripted reply
#[derive(Debug, Clone)]
pub struct MemoryTransport {
	sent: Arc<RwLock<Vec<WebhookPayload>>>,
	reply: Arc<RwLock<Reply>>,
}

impl MemoryTransport {
	/// Replies 200 to every post.
	pub fn new() -> Self {
		Self::with_status(200)
	}

	pub fn with_status(status: u16) -> Self {
		Self {
			sent: Arc::new(RwLock::new(Vec::new())),
			reply: Arc::new(RwLock::new(Reply::Status(status))),
		}
	}

	/// Fails every post with a connection error.
	pub fn failing(reason: impl Into<String>) -> Self {
		let transport = Self::new();
		transport.fail_with(TransportError::Connect(reason.into()));
		transport
	}

	pub fn respond_with(&self, status: u16) {
		*self.reply.write() = Reply::Status(status);
	}

	pub fn fail_with(&self, error: TransportError) {
		*self.reply.write() = Reply::Fail(error);
	}

	/// Payloads posted so far, oldest first. Failed attempts are recorded too.
	pub fn sent(&self) -> Vec<WebhookPayload> {
		self.sent.read().clone()
	}

	pub fn count(&self) -> usize {
		self.sent.read().len()
	}

	pub fn clear(&self) {
		self.sent.write().clear();
	}
}

impl Default for MemoryTransport {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl WebhookTransport for MemoryTransport {
	async fn post(&self, payload: &WebhookPayload) -> Result<WebhookResponse, TransportError> {
		self.sent.write().push(payload.clone());

		match &*self.reply.read() {
			Reply::Status(status) => Ok(WebhookResponse::new(*status, "")),
			Reply::Fail(error) => Err(error.clone()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use intake_forms::CampaignDraft;
	use rstest::rstest;

	fn payload() -> WebhookPayload {
		WebhookPayload::from_draft(&CampaignDraft::empty()).unwrap()
	}

	#[rstest]
	#[tokio::test]
	async fn test_records_and_replies() {
		// Arrange
		let transport = MemoryTransport::with_status(201);

		// Act
		let response = transport.post(&payload()).await.unwrap();

		// Assert
		assert!(response.is_accepted());
		assert_eq!(transport.sent(), vec![payload()]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_scripted_failure() {
		// Arrange
		let transport = MemoryTransport::failing("refused");

		// Act
		let result = transport.post(&payload()).await;

		// Assert
		assert_eq!(result, Err(TransportError::Connect("refused".to_string())));
		assert_eq!(transport.count(), 1);
	}

	#[rstest]
	#[tokio::test]
	async fn test_clones_share_recordings() {
		// Arrange
		let transport = MemoryTransport::new();
		let observer = transport.clone();

		// Act
		transport.post(&payload()).await.unwrap();
		observer.clear();

		// Assert
		assert_eq!(transport.count(), 0);
	}
}
