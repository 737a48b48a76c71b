//! Structural integrity check.
//!
//! One linear pass over metadata and aggregated rules. Findings accumulate
//! in two channels; only errors decide the final verdict, and nothing
//! short-circuits the pass.

use super::metadata::Metadata;
use super::rules::RuleGroups;
use crate::log::Log;
use serde::Serialize;
use std::path::Path;

/// Outcome of a structural check. `ok` is true iff no error was recorded;
/// warnings never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub ok: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Accumulates findings and narrates them through the injected logger.
/// `clean` tracks whether anything was recorded since the last phase mark,
/// so the pass can log its "all clear" lines per phase.
struct Findings<'a> {
    log: &'a dyn Log,
    errors: Vec<String>,
    warnings: Vec<String>,
    clean: bool,
}

impl<'a> Findings<'a> {
    fn new(log: &'a dyn Log) -> Self {
        Self {
            log,
            errors: Vec::new(),
            warnings: Vec::new(),
            clean: true,
        }
    }

    fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.log.warn(&message);
        self.clean = false;
        self.warnings.push(message);
    }

    fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.log.error(&message);
        self.clean = false;
        self.errors.push(message);
    }

    /// Whether the phase since the last mark stayed clean; resets the flag
    /// for the next phase.
    fn mark_phase(&mut self) -> bool {
        std::mem::replace(&mut self.clean, true)
    }

    fn into_report(self) -> CheckReport {
        CheckReport {
            ok: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

pub(crate) fn run(
    root: &Path,
    metadata: &Metadata,
    rules: &RuleGroups,
    log: &dyn Log,
) -> CheckReport {
    let mut findings = Findings::new(log);

    log.info(&format!("Checking profile in {}", root.display()));

    match metadata.name.as_deref() {
        None | Some("") => findings.error("No profile name defined"),
        Some(name) if !is_valid_profile_name(name) => {
            findings.error("Profile name must be defined as: OWNER/ID");
        }
        Some(_) => {}
    }

    if is_blank(&metadata.version) {
        findings.warn("No version defined");
    }
    if is_blank(&metadata.title) {
        findings.warn("No title defined");
    }
    if is_blank(&metadata.maintainer) {
        findings.warn("No maintainer defined");
    }
    if metadata.supports.is_empty() {
        findings.warn("No supports defined");
    }
    if findings.mark_phase() {
        log.info("Metadata OK.");
    }

    if root.join("metadata.rb").exists() {
        findings.warn("The use of `metadata.rb` is deprecated. Use `metadata.yml`.");
    }
    if root.join("test").exists() && !root.join("controls").exists() {
        findings.warn("Profile uses deprecated `test` directory, rename it to `controls`");
    }

    // Deprecation warnings sit between the phases; neither "OK" line
    // covers them.
    findings.mark_phase();

    if rules.is_empty() || rules.values().all(|group| group.is_empty()) {
        findings.warn("No rules were found.");
    }

    let mut rules_counter = 0usize;
    for (group, group_rules) in rules {
        log.debug(&format!("Verify all rules in {}", group.display()));
        for (id, rule) in group_rules {
            if id.is_empty() {
                findings.error("Avoid rules with empty IDs");
            }
            if rule.title.is_empty() {
                findings.warn(format!("Rule {} has no title", id));
            }
            if rule.desc.is_empty() {
                findings.warn(format!("Rule {} has no description", id));
            }
            if let Some(impact) = rule.impact {
                if impact > 1.0 {
                    findings.warn(format!("Rule {} has impact > 1.0", id));
                }
                if impact < 0.0 {
                    findings.warn(format!("Rule {} has impact < 0.0", id));
                }
            }
            if rule.checks.is_empty() {
                findings.warn(format!("Rule {} has no tests defined", id));
            }
            rules_counter += 1;
        }
    }
    log.debug(&format!("Found {} rules.", rules_counter));

    if findings.mark_phase() {
        log.info("Rule definitions OK.");
    }

    findings.into_report()
}

/// A profile name is `OWNER/ID`: exactly one separator, both sides
/// non-empty, no whitespace anywhere.
fn is_valid_profile_name(name: &str) -> bool {
    if name.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = name.split('/');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(owner), Some(id), None) if !owner.is_empty() && !id.is_empty()
    )
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
