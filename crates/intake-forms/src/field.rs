//! Field identifiers and typed field updates
//!
//! Every input on the campaign form is addressed through [`FieldName`].
//! Mutations are expressed as a [`FieldUpdate`], which the caller resolves up
//! front instead of probing field names at runtime.

use crate::draft::{Attachment, Platform, Priority};
use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of a field that may carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
	CampaignName,
	CampaignType,
	BrandName,
	Niche,
	Budget,
	Deliverables,
	Platform,
	Influencer,
	Followers,
	StartDate,
	EndDate,
	Priority,
	Notes,
	Attachment,
}

impl FieldName {
	/// All fields in form order.
	pub const ALL: [FieldName; 14] = [
		FieldName::CampaignName,
		FieldName::CampaignType,
		FieldName::BrandName,
		FieldName::Niche,
		FieldName::Budget,
		FieldName::Deliverables,
		FieldName::Platform,
		FieldName::Influencer,
		FieldName::Followers,
		FieldName::StartDate,
		FieldName::EndDate,
		FieldName::Priority,
		FieldName::Notes,
		FieldName::Attachment,
	];

	/// Wire name of the field (camel case).
	///
	/// # Examples
	///
	/// ```
	/// use intake_forms::FieldName;
	///
	/// assert_eq!(FieldName::CampaignName.as_str(), "campaignName");
	/// assert_eq!(FieldName::EndDate.as_str(), "endDate");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldName::CampaignName => "campaignName",
			FieldName::CampaignType => "campaignType",
			FieldName::BrandName => "brandName",
			FieldName::Niche => "niche",
			FieldName::Budget => "budget",
			FieldName::Deliverables => "deliverables",
			FieldName::Platform => "platform",
			FieldName::Influencer => "influencer",
			FieldName::Followers => "followers",
			FieldName::StartDate => "startDate",
			FieldName::EndDate => "endDate",
			FieldName::Priority => "priority",
			FieldName::Notes => "notes",
			FieldName::Attachment => "attachment",
		}
	}

	/// Human readable label used in error messages.
	///
	/// # Examples
	///
	/// ```
	/// use intake_forms::FieldName;
	///
	/// assert_eq!(FieldName::CampaignName.label(), "Campaign Name");
	/// assert_eq!(FieldName::Budget.label(), "Budget");
	/// ```
	pub fn label(&self) -> String {
		to_title_case(self.as_str())
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FieldName {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FieldName::ALL
			.iter()
			.copied()
			.find(|field| field.as_str() == s)
			.ok_or_else(|| FormError::UnknownField(s.to_string()))
	}
}

/// Free-text (and date) inputs of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextField {
	CampaignName,
	CampaignType,
	BrandName,
	Niche,
	Budget,
	Deliverables,
	Influencer,
	Followers,
	StartDate,
	EndDate,
	Notes,
}

impl TextField {
	/// All text fields in form order.
	pub const ALL: [TextField; 11] = [
		TextField::CampaignName,
		TextField::CampaignType,
		TextField::BrandName,
		TextField::Niche,
		TextField::Budget,
		TextField::Deliverables,
		TextField::Influencer,
		TextField::Followers,
		TextField::StartDate,
		TextField::EndDate,
		TextField::Notes,
	];

	/// The error key this input reports under.
	pub fn field_name(&self) -> FieldName {
		match self {
			TextField::CampaignName => FieldName::CampaignName,
			TextField::CampaignType => FieldName::CampaignType,
			TextField::BrandName => FieldName::BrandName,
			TextField::Niche => FieldName::Niche,
			TextField::Budget => FieldName::Budget,
			TextField::Deliverables => FieldName::Deliverables,
			TextField::Influencer => FieldName::Influencer,
			TextField::Followers => FieldName::Followers,
			TextField::StartDate => FieldName::StartDate,
			TextField::EndDate => FieldName::EndDate,
			TextField::Notes => FieldName::Notes,
		}
	}

	pub fn as_str(&self) -> &'static str {
		self.field_name().as_str()
	}
}

impl FromStr for TextField {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		TextField::ALL
			.iter()
			.copied()
			.find(|field| field.as_str() == s)
			.ok_or_else(|| FormError::UnknownField(s.to_string()))
	}
}

/// A single user edit, resolved by the caller.
///
/// # Examples
///
/// ```
/// use intake_forms::{FieldName, FieldUpdate, Platform, TextField};
///
/// let update = FieldUpdate::text(TextField::BrandName, "Acme");
/// assert_eq!(update.target(), Some(FieldName::BrandName));
///
/// let flag = FieldUpdate::Platform(Platform::Youtube, true);
/// assert_eq!(flag.target(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
	Text(TextField, String),
	Platform(Platform, bool),
	Priority(Option<Priority>),
	Attachment(Option<Attachment>),
}

impl FieldUpdate {
	pub fn text(field: TextField, value: impl Into<String>) -> Self {
		FieldUpdate::Text(field, value.into())
	}

	/// Field whose pending error is cleared by this update.
	///
	/// Platform flags are nested inside the platform set and never carry an
	/// error of their own, so they clear nothing.
	pub fn target(&self) -> Option<FieldName> {
		match self {
			FieldUpdate::Text(field, _) => Some(field.field_name()),
			FieldUpdate::Platform(_, _) => None,
			FieldUpdate::Priority(_) => Some(FieldName::Priority),
			FieldUpdate::Attachment(_) => Some(FieldName::Attachment),
		}
	}
}

/// Convert a camel-case identifier into a spaced title-case label.
///
/// A space is inserted before every ASCII upper-case letter and the first
/// character is upper-cased.
///
/// # Examples
///
/// ```
/// use intake_forms::field::to_title_case;
///
/// assert_eq!(to_title_case("campaignName"), "Campaign Name");
/// assert_eq!(to_title_case("niche"), "Niche");
/// assert_eq!(to_title_case(""), "");
/// ```
pub fn to_title_case(name: &str) -> String {
	let mut label = String::with_capacity(name.len() + 4);
	for (i, ch) in name.chars().enumerate() {
		if ch.is_ascii_uppercase() && i > 0 {
			label.push(' ');
		}
		if i == 0 {
			label.extend(ch.to_uppercase());
		} else {
			label.push(ch);
		}
	}
	label
}
