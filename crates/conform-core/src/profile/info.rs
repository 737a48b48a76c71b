//! External-facing profile summary.
//!
//! Projects the internal aggregate into a serializable shape: group keys
//! relative to the profile root, impact normalized into `[0.0, 1.0]`,
//! check bodies stripped.

use super::metadata::Metadata;
use super::rules::RuleGroups;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Serializable profile summary: the declared metadata plus the rules per
/// source file.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileInfo {
    #[serde(flatten)]
    pub metadata: Metadata,
    pub rules: BTreeMap<String, GroupInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupInfo {
    pub title: String,
    pub rules: BTreeMap<String, RuleSummary>,
}

/// Rule facts minus the executable internals.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    pub title: String,
    pub desc: String,
    pub impact: f64,
    pub source_code: String,
    pub group_title: String,
}

pub(crate) fn project(root: &Path, metadata: &Metadata, groups: &RuleGroups) -> ProfileInfo {
    let mut rules = BTreeMap::new();
    for (origin, group) in groups {
        if origin.as_os_str().is_empty() {
            continue;
        }
        let key = relative_group_key(root, origin);
        let mut info = GroupInfo {
            title: key.clone(),
            rules: BTreeMap::new(),
        };
        for (id, rule) in group {
            if id.is_empty() {
                continue;
            }
            info.rules.insert(
                id.clone(),
                RuleSummary {
                    title: rule.title.clone(),
                    desc: rule.desc.clone(),
                    impact: clamp_impact(rule.impact),
                    source_code: rule.source_code.clone(),
                    group_title: rule.group_title.clone(),
                },
            );
            // Flattened grouping: the last rule's group title names the
            // whole group until a real hierarchy model lands.
            info.title = rule.group_title.clone();
        }
        rules.insert(key, info);
    }
    ProfileInfo {
        metadata: metadata.clone(),
        rules,
    }
}

/// Strip the profile root from a group path once; keys outside the root
/// pass through unchanged.
fn relative_group_key(root: &Path, origin: &Path) -> String {
    match origin.strip_prefix(root) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => origin.to_string_lossy().into_owned(),
    }
}

fn clamp_impact(impact: Option<f64>) -> f64 {
    match impact {
        None => 0.5,
        Some(v) if v > 1.0 => 1.0,
        Some(v) if v < 0.0 => 0.0,
        Some(v) => v,
    }
}
