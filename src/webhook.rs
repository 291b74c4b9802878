//! Webhook submission module.
//!
//! This module provides the submission controller, its transports and the
//! form session that writes submit outcomes back to the form state.
//!
//! # Examples
//!
//! ```rust,no_run
//! use campaign_intake::webhook::{HttpTransport, SubmissionController};
//! ```

#[cfg(feature = "webhook")]
pub use intake_webhook::*;
