//! Configuration loading and management for the shift payroll engine.
//!
//! This module provides the pay tier table: three tiers per day category
//! (weekday, weekend) and the set of day codes that count as weekdays.
//! The table is built once, either from a YAML file or from the standard
//! defaults, and is read-only afterwards.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pay_tiers.yaml").unwrap();
//! println!("Weekday codes: {:?}", config.config().weekday_codes());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayTier, PayrollConfig, PayrollConfigFile, TIER_COUNT, TierTable};
