//! Placement eligibility checks for student profiles.
//!
//! A submission is validated, scanned against the compiled-in company criteria table,
//! rendered into a report, and handed to a best-effort webhook notifier.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
