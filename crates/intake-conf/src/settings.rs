//! Intake settings
//!
//! The webhook endpoint is the only external configuration point of the form.
//! Settings can be built in code, loaded from TOML, and overridden from
//! prefixed environment variables.
//!
//! ```toml
//! revision = "latest"
//!
//! [webhook]
//! endpoint_url = "https://hooks.example.com/campaigns"
//! timeout_secs = 20
//! ```

use crate::env::{Env, EnvError};
use crate::{SettingsError, SettingsResult};
use intake_forms::RuleRevision;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Where and how drafts are posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSettings {
	/// Absolute http(s) URL receiving the POST
	#[serde(default)]
	pub endpoint_url: String,

	/// Request timeout in seconds. `None` keeps the HTTP client default.
	#[serde(default)]
	pub timeout_secs: Option<u64>,

	/// Optional `User-Agent` header value
	#[serde(default)]
	pub user_agent: Option<String>,
}

impl WebhookSettings {
	/// # Examples
	///
	/// ```
	/// use intake_conf::WebhookSettings;
	///
	/// let settings = WebhookSettings::new("https://hooks.example.com/in");
	/// assert!(settings.validate().is_ok());
	/// assert_eq!(settings.timeout(), None);
	/// ```
	pub fn new(endpoint_url: impl Into<String>) -> Self {
		Self {
			endpoint_url: endpoint_url.into(),
			timeout_secs: None,
			user_agent: None,
		}
	}

	pub fn with_timeout_secs(mut self, secs: u64) -> Self {
		self.timeout_secs = Some(secs);
		self
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());
		self
	}

	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_secs.map(Duration::from_secs)
	}

	/// Parsed endpoint, checked to be an absolute http or https URL.
	pub fn endpoint(&self) -> SettingsResult<Url> {
		if self.endpoint_url.trim().is_empty() {
			return Err(SettingsError::MissingRequired(
				"webhook.endpoint_url".to_string(),
			));
		}

		let url = Url::parse(self.endpoint_url.trim()).map_err(|e| SettingsError::InvalidValue {
			key: "webhook.endpoint_url".to_string(),
			message: e.to_string(),
		})?;

		match url.scheme() {
			"http" | "https" if url.has_host() => Ok(url),
			scheme => Err(SettingsError::InvalidValue {
				key: "webhook.endpoint_url".to_string(),
				message: format!("expected an http or https URL, got scheme '{}'", scheme),
			}),
		}
	}

	pub fn validate(&self) -> SettingsResult<()> {
		self.endpoint()?;

		if self.timeout_secs == Some(0) {
			return Err(SettingsError::InvalidValue {
				key: "webhook.timeout_secs".to_string(),
				message: "timeout must be greater than zero".to_string(),
			});
		}

		Ok(())
	}
}

/// Top-level settings for the intake form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeSettings {
	#[serde(default)]
	pub webhook: WebhookSettings,

	/// Validation rule revision to apply
	#[serde(default)]
	pub revision: RuleRevision,
}

impl IntakeSettings {
	pub fn new(webhook: WebhookSettings) -> Self {
		Self {
			webhook,
			revision: RuleRevision::default(),
		}
	}

	pub fn with_revision(mut self, revision: RuleRevision) -> Self {
		self.revision = revision;
		self
	}

	/// Parse settings from a TOML document. Missing keys take their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use intake_conf::IntakeSettings;
	/// use intake_forms::RuleRevision;
	///
	/// let settings = IntakeSettings::from_toml_str(r#"
	///     revision = "alphanumeric"
	///
	///     [webhook]
	///     endpoint_url = "https://hooks.example.com/in"
	/// "#).unwrap();
	///
	/// assert_eq!(settings.revision, RuleRevision::Alphanumeric);
	/// assert_eq!(settings.webhook.endpoint_url, "https://hooks.example.com/in");
	/// ```
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		toml::from_str(source).map_err(|e| SettingsError::Parse(e.to_string()))
	}

	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loaded intake settings file");
		Self::from_toml_str(&source)
	}

	/// Override values from environment variables.
	///
	/// Recognized keys (after the prefix): `WEBHOOK_URL`, `WEBHOOK_TIMEOUT`,
	/// `WEBHOOK_USER_AGENT`, `RULE_REVISION`.
	pub fn apply_env(mut self, env: &Env) -> SettingsResult<Self> {
		if let Some(url) = env.optional_str("WEBHOOK_URL")? {
			self.webhook.endpoint_url = url;
		}
		if let Some(timeout) = env.optional_u64("WEBHOOK_TIMEOUT")? {
			self.webhook.timeout_secs = Some(timeout);
		}
		if let Some(user_agent) = env.optional_str("WEBHOOK_USER_AGENT")? {
			self.webhook.user_agent = Some(user_agent);
		}
		if let Some(revision) = env.optional_str("RULE_REVISION")? {
			self.revision = revision
				.parse()
				.map_err(|e: intake_forms::FormError| SettingsError::InvalidValue {
					key: "revision".to_string(),
					message: e.to_string(),
				})?;
		}
		Ok(self)
	}

	/// Build settings purely from the environment, then validate them.
	pub fn from_env(env: &Env) -> SettingsResult<Self> {
		let settings = Self::default().apply_env(env)?;
		settings.validate()?;
		Ok(settings)
	}

	pub fn validate(&self) -> SettingsResult<()> {
		self.webhook.validate()
	}
}

impl From<EnvError> for SettingsError {
	fn from(error: EnvError) -> Self {
		SettingsError::Env(error)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("https://hooks.example.com/in")]
	#[case("http://localhost:5678/webhook/abc")]
	fn test_valid_endpoints(#[case] url: &str) {
		assert!(WebhookSettings::new(url).validate().is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	fn test_missing_endpoint(#[case] url: &str) {
		assert!(matches!(
			WebhookSettings::new(url).validate(),
			Err(SettingsError::MissingRequired(_))
		));
	}

	#[rstest]
	#[case("ftp://example.com/drop")]
	#[case("not a url")]
	#[case("mailto:ops@example.com")]
	fn test_invalid_endpoints(#[case] url: &str) {
		assert!(matches!(
			WebhookSettings::new(url).validate(),
			Err(SettingsError::InvalidValue { .. })
		));
	}

	#[rstest]
	fn test_zero_timeout_rejected() {
		// Arrange
		let settings = WebhookSettings::new("https://example.com").with_timeout_secs(0);

		// Act
		let result = settings.validate();

		// Assert
		assert!(matches!(
			result,
			Err(SettingsError::InvalidValue { ref key, .. }) if key == "webhook.timeout_secs"
		));
	}

	#[rstest]
	fn test_env_overrides_file_values() {
		// Arrange
		let settings = IntakeSettings::from_toml_str(
			r#"
			[webhook]
			endpoint_url = "https://file.example.com/in"
			timeout_secs = 10
			"#,
		)
		.unwrap();
		let env = Env::from_vars([
			("T_WEBHOOK_URL", "https://env.example.com/in"),
			("T_RULE_REVISION", "initial"),
		])
		.with_prefix("T_");

		// Act
		let settings = settings.apply_env(&env).unwrap();

		// Assert
		assert_eq!(settings.webhook.endpoint_url, "https://env.example.com/in");
		assert_eq!(settings.webhook.timeout_secs, Some(10));
		assert_eq!(settings.revision, RuleRevision::Initial);
	}

	#[rstest]
	fn test_bad_revision_in_env() {
		// Arrange
		let env = Env::from_vars([("RULE_REVISION", "v9")]);

		// Act
		let result = IntakeSettings::default().apply_env(&env);

		// Assert
		assert!(matches!(
			result,
			Err(SettingsError::InvalidValue { ref key, .. }) if key == "revision"
		));
	}

	#[rstest]
	fn test_defaults_have_no_endpoint() {
		// Act
		let settings = IntakeSettings::default();

		// Assert
		assert_eq!(settings.revision, RuleRevision::Latest);
		assert!(settings.validate().is_err());
	}
}
