//! Settings module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use campaign_intake::conf::{Env, IntakeSettings};
//!
//! let settings = IntakeSettings::from_file("intake.toml")
//!     .and_then(|s| s.apply_env(&Env::default()));
//! ```

#[cfg(feature = "conf")]
pub use intake_conf::*;
