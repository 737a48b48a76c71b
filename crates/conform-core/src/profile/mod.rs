//! Compliance profile loading and operations.
//!
//! A [`Profile`] owns the declared metadata and the aggregated rule facts
//! for one profile directory. Construction is fatal on unreadable input;
//! the structural check and the info projection are separate operations
//! with separate success criteria — a profile can load fine and still be
//! structurally invalid.

pub mod check;
pub mod info;
pub mod metadata;
pub mod rules;

use crate::errors::ProfileError;
use crate::log::Log;
use crate::profile::check::CheckReport;
use crate::profile::info::ProfileInfo;
use crate::profile::metadata::Metadata;
use crate::profile::rules::{group_rules, RuleGroups, RuleSource};
use std::fmt;
use std::path::{Path, PathBuf};

/// Construction options: an optional identifying-id override and the
/// logging capability the profile narrates through.
pub struct ProfileOptions {
    id: Option<String>,
    log: Box<dyn Log>,
}

impl ProfileOptions {
    pub fn new(log: impl Log + 'static) -> Self {
        Self {
            id: None,
            log: Box::new(log),
        }
    }

    /// Override the profile's identifying name.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// One loaded compliance profile.
pub struct Profile {
    path: PathBuf,
    id: Option<String>,
    metadata: Metadata,
    rules: RuleGroups,
    log: Box<dyn Log>,
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("path", &self.path)
            .field("id", &self.id)
            .field("metadata", &self.metadata)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl Profile {
    /// Load the profile rooted at `path`, discovering rules through
    /// `source`.
    ///
    /// Fails fatally on an empty path, a missing directory, an unreadable
    /// or unparseable metadata document, or a discovery failure; no
    /// partial profile is returned.
    pub fn from_path(
        path: impl AsRef<Path>,
        source: &dyn RuleSource,
        options: ProfileOptions,
    ) -> Result<Profile, ProfileError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ProfileError::EmptyPath);
        }
        if !path.is_dir() {
            return Err(ProfileError::MissingDirectory {
                path: path.to_path_buf(),
            });
        }

        let metadata = Metadata::from_profile_root(path)?;
        // Explicit option wins over the declared name; nothing is invented.
        let id = options.id.or_else(|| metadata.name.clone());

        let facts = source
            .discover(path)
            .map_err(|e| ProfileError::RuleDiscovery {
                path: path.to_path_buf(),
                cause: e,
            })?;
        let rules = group_rules(facts);

        Ok(Profile {
            path: path.to_path_buf(),
            id,
            metadata,
            rules,
            log: options.log,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The resolved identifying name, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn rules(&self) -> &RuleGroups {
        &self.rules
    }

    /// Check whether the profile is internally well-structured.
    ///
    /// Findings are narrated through the injected logger as they
    /// accumulate; the pass always completes and the report lists every
    /// error and warning found.
    pub fn check(&self) -> CheckReport {
        check::run(&self.path, &self.metadata, &self.rules, self.log.as_ref())
    }

    /// The external-facing summary of this profile.
    pub fn info(&self) -> ProfileInfo {
        info::project(&self.path, &self.metadata, &self.rules)
    }
}
