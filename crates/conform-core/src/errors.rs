//! Fatal profile-load errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort profile construction entirely. Structural findings
/// are not errors in this sense; they accumulate in a `CheckReport` and
/// never raise.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("cannot read an empty profile path")]
    EmptyPath,

    #[error("cannot find directory {path}")]
    MissingDirectory { path: PathBuf },

    #[error("failed to read metadata {path}: {source}")]
    MetadataRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse metadata {path}: {message}")]
    MetadataParse { path: PathBuf, message: String },

    #[error("rule discovery failed for {path}: {cause}")]
    RuleDiscovery { path: PathBuf, cause: anyhow::Error },
}
