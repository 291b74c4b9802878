//! Transport seam for posting payloads

use crate::payload::WebhookPayload;
use async_trait::async_trait;

/// Errors raised before a response status is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
	#[error("Connection failed: {0}")]
	Connect(String),

	#[error("Request timed out: {0}")]
	Timeout(String),

	#[error("Request failed: {0}")]
	Request(String),

	#[error("Encoding error: {0}")]
	Encoding(String),

	#[error("Configuration error: {0}")]
	Configuration(String),
}

impl From<reqwest::Error> for TransportError {
	fn from(error: reqwest::Error) -> Self {
		if error.is_timeout() {
			TransportError::Timeout(error.to_string())
		} else if error.is_connect() {
			TransportError::Connect(error.to_string())
		} else if error.is_builder() {
			TransportError::Configuration(error.to_string())
		} else {
			TransportError::Request(error.to_string())
		}
	}
}

/// What the endpoint answered. The body is kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
	pub status: u16,
	pub body: String,
}

impl WebhookResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	/// Only 200 and 201 count as an accepted submission.
	pub fn is_accepted(&self) -> bool {
		matches!(self.status, 200 | 201)
	}
}

/// Posts a payload to the webhook endpoint, exactly once.
///
/// Implementations never retry; a failed attempt is reported to the caller.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
	async fn post(&self, payload: &WebhookPayload) -> Result<WebhookResponse, TransportError>;
}

#[async_trait]
impl<T: WebhookTransport + ?Sized> WebhookTransport for std::sync::Arc<T> {
	async fn post(&self, payload: &WebhookPayload) -> Result<WebhookResponse, TransportError> {
		(**self).post(payload).await
	}
}
