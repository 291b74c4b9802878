//! Environment variable handling
//!
//! Reads prefixed variables either from the process environment or from a
//! fixed set of variables (useful for tests and embedding).

use std::collections::HashMap;
use std::env;

/// Default prefix for intake settings variables.
pub const DEFAULT_PREFIX: &str = "CAMPAIGN_INTAKE_";

#[derive(Debug, Clone)]
enum Source {
	Process,
	Fixed(HashMap<String, String>),
}

/// Environment variable reader with prefix support
#[derive(Debug, Clone)]
pub struct Env {
	/// Optional prefix for environment variables (e.g., "CAMPAIGN_INTAKE_")
	pub prefix: Option<String>,
	source: Source,
}

impl Env {
	/// Read from the process environment, without a prefix.
	pub fn new() -> Self {
		Self {
			prefix: None,
			source: Source::Process,
		}
	}

	/// Read from a fixed set of variables instead of the process environment.
	///
	/// # Examples
	///
	/// ```
	/// use intake_conf::Env;
	///
	/// let env = Env::from_vars([("APP_WEBHOOK_URL", "https://hooks.example.com/in")])
	///     .with_prefix("APP_");
	/// assert_eq!(
	///     env.optional_str("WEBHOOK_URL").unwrap().as_deref(),
	///     Some("https://hooks.example.com/in")
	/// );
	/// ```
	pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			prefix: None,
			source: Source::Fixed(
				vars.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	/// Set a prefix for all variable lookups
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	fn get_key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	fn lookup(&self, full_key: &str) -> Option<String> {
		match &self.source {
			Source::Process => env::var(full_key).ok(),
			Source::Fixed(vars) => vars.get(full_key).cloned(),
		}
	}

	/// Read a string value; `Ok(None)` when the variable is not set.
	pub fn optional_str(&self, key: &str) -> Result<Option<String>, EnvError> {
		let full_key = self.get_key_name(key);
		validate_env_var_name(&full_key)?;
		Ok(self.lookup(&full_key))
	}

	/// Read an unsigned integer; `Ok(None)` when the variable is not set.
	pub fn optional_u64(&self, key: &str) -> Result<Option<u64>, EnvError> {
		let full_key = self.get_key_name(key);
		validate_env_var_name(&full_key)?;

		match self.lookup(&full_key) {
			Some(val) => val
				.trim()
				.parse::<u64>()
				.map(Some)
				.map_err(|e| EnvError::ParseError {
					key: full_key,
					value_len: val.len(),
					error: e.to_string(),
				}),
			None => Ok(None),
		}
	}
}

impl Default for Env {
	fn default() -> Self {
		Self::new().with_prefix(DEFAULT_PREFIX)
	}
}

/// Reject names the platform cannot represent.
pub fn validate_env_var_name(name: &str) -> Result<(), EnvError> {
	if name.is_empty() {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: "environment variable name must not be empty".to_string(),
		});
	}

	if let Some(pos) = name.find(|c: char| c.is_control()) {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: format!(
				"environment variable name contains control character at position {}",
				pos
			),
		});
	}

	if name.contains('=') {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: "environment variable name must not contain '='".to_string(),
		});
	}

	Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
	#[error("Failed to parse environment variable '{key}' (value length: {value_len}): {error}")]
	ParseError {
		key: String,
		/// Length of the original value (stored instead of the raw value)
		value_len: usize,
		error: String,
	},

	#[error("Invalid environment variable name '{name}': {reason}")]
	InvalidVariableName { name: String, reason: String },
}
