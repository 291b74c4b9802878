//! The campaign draft record
//!
//! A [`CampaignDraft`] is the flat record behind the intake form. Text inputs
//! are kept exactly as typed (an empty string means "not provided"), so that
//! validation sees the same value the user sees.

use crate::error::FormError;
use crate::field::TextField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Social platforms a campaign can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
	Instagram,
	Facebook,
	Youtube,
}

impl Platform {
	pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::Facebook, Platform::Youtube];

	pub fn as_str(&self) -> &'static str {
		match self {
			Platform::Instagram => "instagram",
			Platform::Facebook => "facebook",
			Platform::Youtube => "youtube",
		}
	}
}

impl FromStr for Platform {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Platform::ALL
			.iter()
			.copied()
			.find(|platform| platform.as_str() == s)
			.ok_or_else(|| FormError::InvalidPlatform(s.to_string()))
	}
}

/// Independent on/off flags for each [`Platform`].
///
/// # Examples
///
/// ```
/// use intake_forms::{Platform, PlatformSet};
///
/// let mut platforms = PlatformSet::default();
/// platforms.set(Platform::Instagram, true);
/// assert!(platforms.contains(Platform::Instagram));
/// assert!(!platforms.contains(Platform::Youtube));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSet {
	pub instagram: bool,
	pub facebook: bool,
	pub youtube: bool,
}

impl PlatformSet {
	pub fn set(&mut self, platform: Platform, enabled: bool) {
		match platform {
			Platform::Instagram => self.instagram = enabled,
			Platform::Facebook => self.facebook = enabled,
			Platform::Youtube => self.youtube = enabled,
		}
	}

	pub fn contains(&self, platform: Platform) -> bool {
		match platform {
			Platform::Instagram => self.instagram,
			Platform::Facebook => self.facebook,
			Platform::Youtube => self.youtube,
		}
	}

	pub fn is_empty(&self) -> bool {
		!(self.instagram || self.facebook || self.youtube)
	}
}

/// Campaign priority. An unset priority is `None` on the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
	High,
	Medium,
	Low,
}

impl Priority {
	pub fn as_str(&self) -> &'static str {
		match self {
			Priority::High => "high",
			Priority::Medium => "medium",
			Priority::Low => "low",
		}
	}

	/// Parse a select value, where the empty string means "unset".
	///
	/// # Examples
	///
	/// ```
	/// use intake_forms::Priority;
	///
	/// assert_eq!(Priority::parse_optional("").unwrap(), None);
	/// assert_eq!(Priority::parse_optional("low").unwrap(), Some(Priority::Low));
	/// assert!(Priority::parse_optional("urgent").is_err());
	/// ```
	pub fn parse_optional(value: &str) -> Result<Option<Self>, FormError> {
		if value.is_empty() {
			Ok(None)
		} else {
			value.parse().map(Some)
		}
	}
}

impl fmt::Display for Priority {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Priority {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"high" => Ok(Priority::High),
			"medium" => Ok(Priority::Medium),
			"low" => Ok(Priority::Low),
			other => Err(FormError::InvalidPriority(other.to_string())),
		}
	}
}

/// An optional file attached to the campaign.
///
/// # Examples
///
/// ```
/// use intake_forms::Attachment;
///
/// let brief = Attachment::new("brief.pdf", b"%PDF-1.7".to_vec());
/// assert_eq!(brief.content_type(), "application/pdf");
/// assert_eq!(brief.size(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
	file_name: String,
	/// Declared MIME type (as reported by the browser or guessed from the name)
	content_type: String,
	content: Vec<u8>,
}

impl Attachment {
	/// Create an attachment, guessing the content type from the file name.
	pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
		let file_name = file_name.into();
		let content_type = Self::detect_mime_type(&file_name);
		Self {
			file_name,
			content_type,
			content,
		}
	}

	/// Create an attachment with an explicitly declared content type.
	pub fn with_content_type(
		file_name: impl Into<String>,
		content_type: impl Into<String>,
		content: Vec<u8>,
	) -> Self {
		Self {
			file_name: file_name.into(),
			content_type: content_type.into(),
			content,
		}
	}

	pub fn file_name(&self) -> &str {
		&self.file_name
	}

	pub fn content_type(&self) -> &str {
		&self.content_type
	}

	pub fn content(&self) -> &[u8] {
		&self.content
	}

	/// Size in bytes.
	pub fn size(&self) -> usize {
		self.content.len()
	}

	fn detect_mime_type(file_name: &str) -> String {
		mime_guess::from_path(file_name)
			.first()
			.map(|mime| mime.to_string())
			.unwrap_or_else(|| "application/octet-stream".to_string())
	}
}

/// The form record.
///
/// The binary attachment is not part of the JSON representation; it travels
/// as its own multipart part when the draft is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignDraft {
	pub campaign_name: String,
	pub campaign_type: String,
	pub brand_name: String,
	pub niche: String,
	pub budget: String,
	pub deliverables: String,
	pub platform: PlatformSet,
	pub influencer: String,
	pub followers: String,
	pub start_date: String,
	pub end_date: String,
	pub priority: Option<Priority>,
	pub notes: String,
	#[serde(skip)]
	pub attachment: Option<Attachment>,
}

impl CampaignDraft {
	/// The blank draft shown on first render and after a successful submit.
	///
	/// # Examples
	///
	/// ```
	/// use intake_forms::CampaignDraft;
	///
	/// let draft = CampaignDraft::empty();
	/// assert!(draft.campaign_name.is_empty());
	/// assert!(draft.platform.is_empty());
	/// assert!(draft.attachment.is_none());
	/// ```
	pub fn empty() -> Self {
		Self {
			campaign_name: String::new(),
			campaign_type: String::new(),
			brand_name: String::new(),
			niche: String::new(),
			budget: String::new(),
			deliverables: String::new(),
			platform: PlatformSet::default(),
			influencer: String::new(),
			followers: String::new(),
			start_date: String::new(),
			end_date: String::new(),
			priority: None,
			notes: String::new(),
			attachment: None,
		}
	}

	/// Current value of a text input.
	pub fn text(&self, field: TextField) -> &str {
		match field {
			TextField::CampaignName => &self.campaign_name,
			TextField::CampaignType => &self.campaign_type,
			TextField::BrandName => &self.brand_name,
			TextField::Niche => &self.niche,
			TextField::Budget => &self.budget,
			TextField::Deliverables => &self.deliverables,
			TextField::Influencer => &self.influencer,
			TextField::Followers => &self.followers,
			TextField::StartDate => &self.start_date,
			TextField::EndDate => &self.end_date,
			TextField::Notes => &self.notes,
		}
	}

	pub fn text_mut(&mut self, field: TextField) -> &mut String {
		match field {
			TextField::CampaignName => &mut self.campaign_name,
			TextField::CampaignType => &mut self.campaign_type,
			TextField::BrandName => &mut self.brand_name,
			TextField::Niche => &mut self.niche,
			TextField::Budget => &mut self.budget,
			TextField::Deliverables => &mut self.deliverables,
			TextField::Influencer => &mut self.influencer,
			TextField::Followers => &mut self.followers,
			TextField::StartDate => &mut self.start_date,
			TextField::EndDate => &mut self.end_date,
			TextField::Notes => &mut self.notes,
		}
	}
}

impl Default for CampaignDraft {
	fn default() -> Self {
		Self::empty()
	}
}
