//! HTTP transport backed by reqwest
//!
//! ```no_run
//! use intake_conf::WebhookSettings;
//! use intake_forms::CampaignDraft;
//! use intake_webhook::{HttpTransport, WebhookPayload, WebhookTransport};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = WebhookSettings::new("https://hooks.example.com/campaigns");
//! let transport = HttpTransport::from_settings(&settings)?;
//!
//! let payload = WebhookPayload::from_draft(&CampaignDraft::empty())?;
//! let response = transport.post(&payload).await?;
//! println!("status {}", response.status);
//! # Ok(())
//! # }
//! ```

use crate::payload::WebhookPayload;
use crate::transport::{TransportError, WebhookResponse, WebhookTransport};
use async_trait::async_trait;
use intake_conf::WebhookSettings;
use reqwest::Client;

/// Posts multipart bodies to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	endpoint: String,
	client: Client,
}

impl HttpTransport {
	/// Build a transport from validated settings.
	///
	/// Without `timeout_secs` the client keeps reqwest's default behaviour.
	pub fn from_settings(settings: &WebhookSettings) -> Result<Self, TransportError> {
		let endpoint = settings
			.endpoint()
			.map_err(|e| TransportError::Configuration(e.to_string()))?;
		settings
			.validate()
			.map_err(|e| TransportError::Configuration(e.to_string()))?;

		let mut builder = Client::builder();
		if let Some(timeout) = settings.timeout() {
			builder = builder.timeout(timeout);
		}
		if let Some(user_agent) = &settings.user_agent {
			builder = builder.user_agent(user_agent.clone());
		}
		let client = builder.build()?;

		Ok(Self::with_client(endpoint.to_string(), client))
	}

	/// Use a preconfigured client.
	pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
		Self {
			endpoint: endpoint.into(),
			client,
		}
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait]
impl WebhookTransport for HttpTransport {
	async fn post(&self, payload: &WebhookPayload) -> Result<WebhookResponse, TransportError> {
		let form = payload.to_multipart()?;

		tracing::debug!(
			endpoint = %self.endpoint,
			parts = payload.len(),
			"posting campaign draft"
		);

		let response = self
			.client
			.post(&self.endpoint)
			.multipart(form)
			.send()
			.await?;

		let status = response.status().as_u16();
		let body = match response.text().await {
			Ok(body) => body,
			Err(e) => {
				tracing::debug!(
					endpoint = %self.endpoint,
					status,
					error = %e,
					"failed to read webhook response body"
				);
				String::new()
			}
		};

		tracing::debug!(endpoint = %self.endpoint, status, "webhook responded");

		Ok(WebhookResponse { status, body })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_from_settings_rejects_invalid_endpoint() {
		// Arrange
		let settings = WebhookSettings::new("ftp://example.com/in");

		// Act
		let result = HttpTransport::from_settings(&settings);

		// Assert
		assert!(matches!(result, Err(TransportError::Configuration(_))));
	}

	#[rstest]
	fn test_from_settings_keeps_endpoint() {
		// Arrange
		let settings = WebhookSettings::new("https://hooks.example.com/in")
			.with_timeout_secs(5)
			.with_user_agent("intake-test");

		// Act
		let transport = HttpTransport::from_settings(&settings).unwrap();

		// Assert
		assert_eq!(transport.endpoint(), "https://hooks.example.com/in");
	}
}
