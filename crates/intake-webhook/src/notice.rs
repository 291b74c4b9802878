//! User-facing submission notices

use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

pub const SUCCESS_MESSAGE: &str = "Campaign submitted successfully!";
pub const VALIDATION_MESSAGE: &str = "Please fix the validation errors before submitting.";
pub const FAILURE_MESSAGE: &str = "There was an error submitting the form. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
	Success,
	Warning,
	Error,
}

/// One toast-style message reporting a submit outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
	pub level: NoticeLevel,
	pub message: String,
	/// Underlying cause for failed submissions, for display under the message
	#[serde(skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
}

impl Notice {
	pub fn success() -> Self {
		Self {
			level: NoticeLevel::Success,
			message: SUCCESS_MESSAGE.to_string(),
			detail: None,
		}
	}

	pub fn validation_failed() -> Self {
		Self {
			level: NoticeLevel::Warning,
			message: VALIDATION_MESSAGE.to_string(),
			detail: None,
		}
	}

	pub fn submit_failed(detail: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Error,
			message: FAILURE_MESSAGE.to_string(),
			detail: Some(detail.into()),
		}
	}
}

impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

/// Receives the outcome notice of each submit.
pub trait Notifier: Send + Sync {
	fn notify(&self, notice: &Notice);
}

/// Writes notices to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
	fn notify(&self, notice: &Notice) {
		let detail = notice.detail.as_deref().unwrap_or("");
		match notice.level {
			NoticeLevel::Success => tracing::info!(text = %notice.message, "notice"),
			NoticeLevel::Warning => tracing::warn!(text = %notice.message, "notice"),
			NoticeLevel::Error => {
				tracing::error!(text = %notice.message, detail, "notice")
			}
		}
	}
}

/// Keeps every notice, for tests and UI adapters that poll.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
	notices: Arc<RwLock<Vec<Notice>>>,
}

impl MemoryNotifier {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn notices(&self) -> Vec<Notice> {
		self.notices.read().clone()
	}

	pub fn last(&self) -> Option<Notice> {
		self.notices.read().last().cloned()
	}

	pub fn clear(&self) {
		self.notices.write().clear();
	}
}

impl Notifier for MemoryNotifier {
	fn notify(&self, notice: &Notice) {
		self.notices.write().push(notice.clone());
	}
}
