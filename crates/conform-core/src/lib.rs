//! Validation and normalization of compliance profiles.
//!
//! A profile is a directory holding declarative rule definitions plus a
//! metadata descriptor. This crate loads the descriptor, aggregates rule
//! facts surfaced by an external discovery runtime, checks the result for
//! structural integrity, and projects a serializable summary. It also
//! ships the generic delimited key-value parser used by resource-style
//! readers of OS status files.

pub mod errors;
pub mod kvparse;
pub mod log;
pub mod profile;

// Convenience re-exports
pub use errors::ProfileError;
pub use log::{Log, TracingLog};
pub use profile::check::CheckReport;
pub use profile::info::{GroupInfo, ProfileInfo, RuleSummary};
pub use profile::metadata::Metadata;
pub use profile::rules::{RuleFact, RuleGroups, RuleSource};
pub use profile::{Profile, ProfileOptions};
