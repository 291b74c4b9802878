use crate::field::FieldName;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Errors raised while turning raw UI values into typed form values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("Unknown field: {0}")]
	UnknownField(String),
	#[error("Invalid priority: {0}")]
	InvalidPriority(String),
	#[error("Invalid platform: {0}")]
	InvalidPlatform(String),
	#[error("Unknown rule revision: {0}")]
	UnknownRevision(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Per-field validation messages.
///
/// A field without an entry is valid. The set is rebuilt wholesale on every
/// submit attempt and submission is allowed only while it is empty.
///
/// # Examples
///
/// ```
/// use intake_forms::{ErrorSet, FieldName};
///
/// let mut errors = ErrorSet::new();
/// errors.insert(FieldName::Budget, "Budget is required.");
/// assert_eq!(errors.get(FieldName::Budget), Some("Budget is required."));
///
/// errors.clear_field(FieldName::Budget);
/// assert!(errors.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
	entries: BTreeMap<FieldName, String>,
}

impl ErrorSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a message for `field`, replacing any previous one.
	pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
		self.entries.insert(field, message.into());
	}

	pub fn get(&self, field: FieldName) -> Option<&str> {
		self.entries.get(&field).map(String::as_str)
	}

	pub fn contains(&self, field: FieldName) -> bool {
		self.entries.contains_key(&field)
	}

	/// Drop the message for `field`, leaving every other entry in place.
	pub fn clear_field(&mut self, field: FieldName) -> Option<String> {
		self.entries.remove(&field)
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, FieldName, String> {
		self.entries.iter()
	}

	pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
		self.entries.keys().copied()
	}
}

impl<'a> IntoIterator for &'a ErrorSet {
	type Item = (&'a FieldName, &'a String);
	type IntoIter = btree_map::Iter<'a, FieldName, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl<S: Into<String>> FromIterator<(FieldName, S)> for ErrorSet {
	fn from_iter<I: IntoIterator<Item = (FieldName, S)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(field, message)| (field, message.into()))
				.collect(),
		}
	}
}
