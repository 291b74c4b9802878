//! Form model, validation and form state.
//!
//! # Examples
//!
//! ```rust
//! use campaign_intake::forms::{CampaignDraft, ValidationEngine};
//!
//! let errors = ValidationEngine::default().validate(&CampaignDraft::empty());
//! assert_eq!(errors.len(), 5);
//! ```

#[cfg(feature = "forms")]
pub use intake_forms::*;
