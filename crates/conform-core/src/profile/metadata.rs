//! Profile metadata loading.
//!
//! `metadata.yml` is the primary, structured format. The legacy
//! `metadata.rb` script format is still read as a fallback; the structural
//! check warns whenever it is present.

use crate::errors::ProfileError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Declared profile attributes. Loaded once per profile, immutable
/// afterwards. Unknown attributes in the document are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub maintainer: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub copyright_email: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Platform constraints, kept uninterpreted, ordered as declared.
    #[serde(default)]
    pub supports: Vec<serde_json::Value>,
}

impl Metadata {
    /// Load the metadata for the profile rooted at `root`.
    ///
    /// `metadata.yml` wins; `metadata.rb` is consulted only when the
    /// primary file does not exist.
    pub fn from_profile_root(root: &Path) -> Result<Metadata, ProfileError> {
        let primary = root.join("metadata.yml");
        if primary.exists() {
            return Self::from_yaml_file(&primary);
        }
        Self::from_legacy_file(&root.join("metadata.rb"))
    }

    fn from_yaml_file(path: &Path) -> Result<Metadata, ProfileError> {
        let content = std::fs::read_to_string(path).map_err(|e| ProfileError::MetadataRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_yaml::from_str(&content).map_err(|e| ProfileError::MetadataParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn from_legacy_file(path: &Path) -> Result<Metadata, ProfileError> {
        let content = std::fs::read_to_string(path).map_err(|e| ProfileError::MetadataRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_legacy_str(&content))
    }

    /// Parse the deprecated script format: one `attribute 'value'` line
    /// per declared attribute. Only scalar attributes survive the
    /// translation; `supports` declarations stay empty.
    fn from_legacy_str(content: &str) -> Metadata {
        let assignment = Regex::new(r#"^\s*(\w+)\s+(?:'([^']*)'|"([^"]*)")\s*$"#)
            .expect("legacy assignment pattern is valid");

        let mut meta = Metadata::default();
        for line in content.lines() {
            let Some(caps) = assignment.captures(line) else {
                continue;
            };
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or(String::new(), |m| m.as_str().to_string());
            match &caps[1] {
                "name" => meta.name = Some(value),
                "title" => meta.title = Some(value),
                "maintainer" => meta.maintainer = Some(value),
                "copyright" => meta.copyright = Some(value),
                "copyright_email" => meta.copyright_email = Some(value),
                "license" => meta.license = Some(value),
                "summary" => meta.summary = Some(value),
                "version" => meta.version = Some(value),
                _ => {}
            }
        }
        meta
    }
}
