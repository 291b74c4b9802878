//! Webhook payload
//!
//! A draft is always serialized the same way, as an ordered list of
//! multipart parts. Scalar fields become text parts under their camel-case
//! names, the platform selection travels as a single JSON-encoded text part,
//! and the attachment, when present, becomes a file part.

use crate::{TransportError, WebhookResult};
use bytes::Bytes;
use intake_forms::{CampaignDraft, FieldName, TextField};
use reqwest::{Body, multipart};

/// Content of a single part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
	Text(String),
	File {
		file_name: String,
		content_type: String,
		content: Bytes,
	},
}

/// A named part of the outbound body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadPart {
	pub name: String,
	pub value: PartValue,
}

impl PayloadPart {
	pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: PartValue::Text(value.into()),
		}
	}
}

/// Serialized draft, ready to be posted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookPayload {
	parts: Vec<PayloadPart>,
}

impl WebhookPayload {
	/// Serialize a draft.
	///
	/// # Examples
	///
	/// ```
	/// use intake_forms::{CampaignDraft, Platform};
	/// use intake_webhook::WebhookPayload;
	///
	/// let mut draft = CampaignDraft::empty();
	/// draft.campaign_name = "Spring Launch".to_string();
	/// draft.platform.set(Platform::Youtube, true);
	///
	/// let payload = WebhookPayload::from_draft(&draft).unwrap();
	/// assert_eq!(payload.text("campaignName"), Some("Spring Launch"));
	/// assert_eq!(
	///     payload.text("platform"),
	///     Some(r#"{"instagram":false,"facebook":false,"youtube":true}"#)
	/// );
	/// assert!(payload.file("attachment").is_none());
	/// ```
	pub fn from_draft(draft: &CampaignDraft) -> WebhookResult<Self> {
		let platform = serde_json::to_string(&draft.platform)
			.map_err(|e| TransportError::Encoding(format!("platform: {}", e)))?;

		let mut parts = Vec::with_capacity(FieldName::ALL.len());
		for field in TextField::ALL {
			parts.push(PayloadPart::text(field.as_str(), draft.text(field)));

			// Keep the form's field order: platform sits after deliverables.
			if field == TextField::Deliverables {
				parts.push(PayloadPart::text(FieldName::Platform.as_str(), platform.clone()));
			}
			if field == TextField::EndDate {
				parts.push(PayloadPart::text(
					FieldName::Priority.as_str(),
					draft.priority.map(|p| p.as_str()).unwrap_or_default(),
				));
			}
		}

		if let Some(attachment) = &draft.attachment {
			parts.push(PayloadPart {
				name: FieldName::Attachment.as_str().to_string(),
				value: PartValue::File {
					file_name: attachment.file_name().to_string(),
					content_type: attachment.content_type().to_string(),
					content: Bytes::copy_from_slice(attachment.content()),
				},
			});
		}

		Ok(Self { parts })
	}

	pub fn parts(&self) -> &[PayloadPart] {
		&self.parts
	}

	pub fn len(&self) -> usize {
		self.parts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parts.is_empty()
	}

	/// Value of the first text part with this name.
	pub fn text(&self, name: &str) -> Option<&str> {
		self.parts.iter().find_map(|part| match &part.value {
			PartValue::Text(value) if part.name == name => Some(value.as_str()),
			_ => None,
		})
	}

	/// `(file_name, content_type, content)` of the first file part with this name.
	pub fn file(&self, name: &str) -> Option<(&str, &str, &[u8])> {
		self.parts.iter().find_map(|part| match &part.value {
			PartValue::File {
				file_name,
				content_type,
				content,
			} if part.name == name => Some((
				file_name.as_str(),
				content_type.as_str(),
				content.as_ref(),
			)),
			_ => None,
		})
	}

	/// Build the request body. File contents are shared, not copied.
	pub fn to_multipart(&self) -> WebhookResult<multipart::Form> {
		let mut form = multipart::Form::new();

		for part in &self.parts {
			form = match &part.value {
				PartValue::Text(value) => form.text(part.name.clone(), value.clone()),
				PartValue::File {
					file_name,
					content_type,
					content,
				} => {
					let file = multipart::Part::stream_with_length(
						Body::from(content.clone()),
						content.len() as u64,
					)
					.file_name(file_name.clone())
					.mime_str(content_type)
					.map_err(|e| {
						TransportError::Encoding(format!("Failed to set MIME type: {}", e))
					})?;
					form.part(part.name.clone(), file)
				}
			};
		}

		Ok(form)
	}
}
