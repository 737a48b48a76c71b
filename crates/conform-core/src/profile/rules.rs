//! Rule facts and aggregation.
//!
//! The rule-execution runtime that discovers and evaluates rule sources
//! lives outside this crate. It hands over plain [`RuleFact`] values
//! through the [`RuleSource`] contract; the aggregate is built from those
//! alone, without reaching into runtime internals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Facts about one discovered rule, as surfaced by the execution runtime.
///
/// Impact is stored exactly as declared; range handling is a projection
/// concern. Empty strings stand in for absent text fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFact {
    pub id: String,
    pub title: String,
    pub desc: String,
    #[serde(default)]
    pub impact: Option<f64>,
    /// Opaque check bodies; never interpreted here.
    #[serde(default)]
    pub checks: Vec<serde_json::Value>,
    pub source_code: String,
    pub group_title: String,
    pub origin_file: PathBuf,
}

/// Rules grouped by originating source file, keyed by rule id within each
/// group. The empty path collects orphaned rules.
pub type RuleGroups = BTreeMap<PathBuf, BTreeMap<String, RuleFact>>;

/// Discovery contract implemented by the rule-execution collaborator.
pub trait RuleSource {
    /// Surface every rule defined under `root`, in discovery order.
    fn discover(&self, root: &Path) -> anyhow::Result<Vec<RuleFact>>;
}

/// Group facts by origin file.
///
/// A rule id seen twice within the same group overwrites the earlier
/// entry; duplicate detection belongs to the structural check, not to
/// aggregation.
pub fn group_rules(facts: Vec<RuleFact>) -> RuleGroups {
    let mut groups = RuleGroups::new();
    for fact in facts {
        groups
            .entry(fact.origin_file.clone())
            .or_default()
            .insert(fact.id.clone(), fact);
    }
    groups
}
