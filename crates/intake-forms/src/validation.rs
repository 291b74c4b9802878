//! Rule-table driven validation of a [`CampaignDraft`]
//!
//! A [`RuleSet`] maps each text input to a [`TextRule`] and switches the two
//! cross-field checks (date order and attachment policy) on or off. The form
//! went through several revisions with different rules for `budget`,
//! `followers` and `influencer`; each is available as a [`RuleRevision`], and
//! [`RuleRevision::Latest`] is the default.
//!
//! # Examples
//!
//! ```
//! use intake_forms::{CampaignDraft, FieldName, ValidationEngine};
//!
//! let engine = ValidationEngine::default();
//! let errors = engine.validate(&CampaignDraft::empty());
//!
//! assert_eq!(errors.get(FieldName::CampaignName), Some("Campaign Name is required."));
//! assert_eq!(errors.get(FieldName::Budget), Some("Budget is required."));
//! assert!(!errors.contains(FieldName::Niche));
//! ```

use crate::draft::{Attachment, CampaignDraft};
use crate::error::{ErrorSet, FormError};
use crate::field::{FieldName, TextField};
use crate::validators::{compare_dates, is_alphanumeric, is_blank, is_letters, is_numeric};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Largest accepted attachment, in bytes (2 MiB).
pub const MAX_ATTACHMENT_BYTES: usize = 2 * 1024 * 1024;

/// Content types accepted for the attachment.
pub const ALLOWED_ATTACHMENT_TYPES: [&str; 4] =
	["image/jpeg", "image/png", "application/pdf", "text/csv"];

const MIB: usize = 1024 * 1024;

/// Character class a non-blank text value must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
	/// ASCII letters and whitespace
	Letters,
	/// ASCII letters, digits and whitespace
	Alphanumeric,
	/// ASCII digits
	Numeric,
}

impl TextFormat {
	fn accepts(&self, value: &str) -> bool {
		match self {
			TextFormat::Letters => is_letters(value),
			TextFormat::Alphanumeric => is_alphanumeric(value),
			TextFormat::Numeric => is_numeric(value),
		}
	}

	fn violation(&self) -> Violation {
		match self {
			TextFormat::Letters => Violation::LettersOnly,
			TextFormat::Alphanumeric => Violation::Alphanumeric,
			TextFormat::Numeric => Violation::Numeric,
		}
	}
}

/// Requirement and format rule for one text input.
///
/// # Examples
///
/// ```
/// use intake_forms::{TextFormat, TextRule};
///
/// let rule = TextRule::required().letters();
/// assert!(rule.required);
/// assert_eq!(rule.format, Some(TextFormat::Letters));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRule {
	pub required: bool,
	pub format: Option<TextFormat>,
}

impl TextRule {
	pub fn required() -> Self {
		Self {
			required: true,
			format: None,
		}
	}

	pub fn optional() -> Self {
		Self {
			required: false,
			format: None,
		}
	}

	pub fn letters(mut self) -> Self {
		self.format = Some(TextFormat::Letters);
		self
	}

	pub fn alphanumeric(mut self) -> Self {
		self.format = Some(TextFormat::Alphanumeric);
		self
	}

	pub fn numeric(mut self) -> Self {
		self.format = Some(TextFormat::Numeric);
		self
	}

	/// Check a value; the first failing rule wins.
	///
	/// Required fields treat whitespace as blank. Optional fields are skipped
	/// only when empty, so whitespace still goes through the format check.
	fn check(&self, value: &str) -> Option<Violation> {
		if self.required && is_blank(value) {
			return Some(Violation::Required);
		}
		if !self.required && value.is_empty() {
			return None;
		}
		match self.format {
			Some(format) if !format.accepts(value) => Some(format.violation()),
			_ => None,
		}
	}
}

/// Limits applied to an attached file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPolicy {
	pub allowed_types: Vec<String>,
	pub max_bytes: usize,
}

impl Default for AttachmentPolicy {
	fn default() -> Self {
		Self {
			allowed_types: ALLOWED_ATTACHMENT_TYPES
				.iter()
				.map(|t| t.to_string())
				.collect(),
			max_bytes: MAX_ATTACHMENT_BYTES,
		}
	}
}

impl AttachmentPolicy {
	/// The type is checked first; the size is only looked at once the type passed.
	fn check(&self, attachment: &Attachment) -> Option<Violation> {
		let content_type = attachment.content_type();
		if !self
			.allowed_types
			.iter()
			.any(|allowed| allowed.eq_ignore_ascii_case(content_type))
		{
			return Some(Violation::UnsupportedType);
		}
		if attachment.size() > self.max_bytes {
			return Some(Violation::TooLarge(self.max_bytes));
		}
		None
	}
}

/// Named revisions of the form's rule table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleRevision {
	/// Numeric budget/followers, letters-only influencer
	Initial,
	/// Same rules as `Initial`; that revision only changed notifications
	Toast,
	/// Alphanumeric budget and influencer, required numeric followers
	Alphanumeric,
	/// Free-format budget/followers plus the attachment field
	#[default]
	Latest,
}

impl RuleRevision {
	pub fn as_str(&self) -> &'static str {
		match self {
			RuleRevision::Initial => "initial",
			RuleRevision::Toast => "toast",
			RuleRevision::Alphanumeric => "alphanumeric",
			RuleRevision::Latest => "latest",
		}
	}

	pub fn rules(&self) -> RuleSet {
		RuleSet::for_revision(*self)
	}
}

impl fmt::Display for RuleRevision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RuleRevision {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"initial" => Ok(RuleRevision::Initial),
			"toast" => Ok(RuleRevision::Toast),
			"alphanumeric" => Ok(RuleRevision::Alphanumeric),
			"latest" => Ok(RuleRevision::Latest),
			other => Err(FormError::UnknownRevision(other.to_string())),
		}
	}
}

/// The complete rule table for a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
	text_rules: Vec<(TextField, TextRule)>,
	/// Reject an end date earlier than the start date
	pub check_date_order: bool,
	/// `None` means attachments are not validated
	pub attachment: Option<AttachmentPolicy>,
}

impl RuleSet {
	/// A rule set with no rules at all.
	pub fn empty() -> Self {
		Self {
			text_rules: Vec::new(),
			check_date_order: false,
			attachment: None,
		}
	}

	pub fn for_revision(revision: RuleRevision) -> Self {
		let names = Self::empty()
			.with_rule(TextField::CampaignName, TextRule::required().letters())
			.with_rule(TextField::CampaignType, TextRule::required().letters())
			.with_rule(TextField::BrandName, TextRule::required().letters())
			.with_rule(TextField::Niche, TextRule::optional().letters())
			.with_date_order(true);

		match revision {
			RuleRevision::Initial | RuleRevision::Toast => names
				.with_rule(TextField::Influencer, TextRule::optional().letters())
				.with_rule(TextField::Budget, TextRule::optional().numeric())
				.with_rule(TextField::Followers, TextRule::optional().numeric()),
			RuleRevision::Alphanumeric => names
				.with_rule(TextField::Budget, TextRule::required().alphanumeric())
				.with_rule(TextField::Influencer, TextRule::optional().alphanumeric())
				.with_rule(TextField::Followers, TextRule::required().numeric()),
			RuleRevision::Latest => names
				.with_rule(TextField::Budget, TextRule::required())
				.with_rule(TextField::Followers, TextRule::required())
				.with_attachment_policy(AttachmentPolicy::default()),
		}
	}

	/// Set (or replace) the rule for a text input.
	pub fn with_rule(mut self, field: TextField, rule: TextRule) -> Self {
		match self.text_rules.iter_mut().find(|(f, _)| *f == field) {
			Some(entry) => entry.1 = rule,
			None => self.text_rules.push((field, rule)),
		}
		self
	}

	pub fn without_rule(mut self, field: TextField) -> Self {
		self.text_rules.retain(|(f, _)| *f != field);
		self
	}

	pub fn with_date_order(mut self, enabled: bool) -> Self {
		self.check_date_order = enabled;
		self
	}

	pub fn with_attachment_policy(mut self, policy: AttachmentPolicy) -> Self {
		self.attachment = Some(policy);
		self
	}

	pub fn rule(&self, field: TextField) -> Option<&TextRule> {
		self.text_rules
			.iter()
			.find(|(f, _)| *f == field)
			.map(|(_, rule)| rule)
	}

	pub fn text_rules(&self) -> &[(TextField, TextRule)] {
		&self.text_rules
	}
}

impl Default for RuleSet {
	fn default() -> Self {
		Self::for_revision(RuleRevision::Latest)
	}
}

/// A single failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Violation {
	Required,
	LettersOnly,
	Alphanumeric,
	Numeric,
	DateOrder,
	UnsupportedType,
	TooLarge(usize),
}

impl Violation {
	fn message(&self, field: FieldName) -> String {
		match self {
			Violation::Required => format!("{} is required.", field.label()),
			Violation::LettersOnly => format!("{} must contain only letters.", field.label()),
			Violation::Alphanumeric => {
				format!("{} must contain only letters and numbers.", field.label())
			}
			Violation::Numeric => format!("{} must be a valid number.", field.label()),
			Violation::DateOrder => "End date must be after start date.".to_string(),
			Violation::UnsupportedType => "Only JPG, PNG, or PDF files are allowed.".to_string(),
			Violation::TooLarge(max) if max % MIB == 0 => {
				format!("File size must be less than {}MB.", max / MIB)
			}
			Violation::TooLarge(max) => format!("File size must be less than {} bytes.", max),
		}
	}
}

/// Maps a draft to its [`ErrorSet`].
///
/// Validation is pure: the same draft always yields the same errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationEngine {
	rules: RuleSet,
}

impl ValidationEngine {
	pub fn new(rules: RuleSet) -> Self {
		Self { rules }
	}

	pub fn for_revision(revision: RuleRevision) -> Self {
		Self::new(RuleSet::for_revision(revision))
	}

	pub fn rules(&self) -> &RuleSet {
		&self.rules
	}

	/// Evaluate every rule and collect one message per failing field.
	///
	/// # Examples
	///
	/// ```
	/// use intake_forms::{CampaignDraft, FieldName, ValidationEngine};
	///
	/// let mut draft = CampaignDraft::empty();
	/// draft.campaign_name = "Acme 2".to_string();
	///
	/// let errors = ValidationEngine::default().validate(&draft);
	/// assert_eq!(
	///     errors.get(FieldName::CampaignName),
	///     Some("Campaign Name must contain only letters.")
	/// );
	/// ```
	pub fn validate(&self, draft: &CampaignDraft) -> ErrorSet {
		let mut errors = ErrorSet::new();

		for (field, rule) in self.rules.text_rules() {
			if let Some(violation) = rule.check(draft.text(*field)) {
				let name = field.field_name();
				errors.insert(name, violation.message(name));
			}
		}

		if self.rules.check_date_order
			&& !is_blank(&draft.start_date)
			&& !is_blank(&draft.end_date)
			&& compare_dates(&draft.start_date, &draft.end_date) == Ordering::Greater
		{
			errors.insert(
				FieldName::EndDate,
				Violation::DateOrder.message(FieldName::EndDate),
			);
		}

		if let Some(policy) = &self.rules.attachment
			&& let Some(attachment) = &draft.attachment
			&& let Some(violation) = policy.check(attachment)
		{
			errors.insert(
				FieldName::Attachment,
				violation.message(FieldName::Attachment),
			);
		}

		tracing::debug!(error_count = errors.len(), "validated campaign draft");
		errors
	}

	pub fn is_valid(&self, draft: &CampaignDraft) -> bool {
		self.validate(draft).is_empty()
	}
}
