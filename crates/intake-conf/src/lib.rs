//! Settings for the campaign intake form
//!
//! The form has a single external configuration point, the webhook endpoint,
//! plus the choice of validation rule revision. Settings are injected into
//! the submission layer rather than baked into it.
//!
//! ## Example
//!
//! ```
//! use intake_conf::{Env, IntakeSettings};
//!
//! let env = Env::from_vars([
//!     ("CAMPAIGN_INTAKE_WEBHOOK_URL", "https://hooks.example.com/campaigns"),
//!     ("CAMPAIGN_INTAKE_WEBHOOK_TIMEOUT", "20"),
//! ])
//! .with_prefix("CAMPAIGN_INTAKE_");
//!
//! let settings = IntakeSettings::from_env(&env).unwrap();
//! assert_eq!(settings.webhook.timeout_secs, Some(20));
//! ```

pub mod env;
pub mod settings;

use thiserror::Error;

pub use env::{DEFAULT_PREFIX, Env, EnvError};
pub use settings::{IntakeSettings, WebhookSettings};

#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("Environment error: {0}")]
	Env(EnvError),

	#[error("Invalid value for '{key}': {message}")]
	InvalidValue { key: String, message: String },

	#[error("Missing required field: {0}")]
	MissingRequired(String),
}

pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
