use conform_core::{Log, Profile, ProfileError, ProfileOptions, RuleFact, RuleSource};
use std::path::Path;
use tempfile::TempDir;

struct Quiet;

impl Log for Quiet {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

struct NoRules;

impl RuleSource for NoRules {
    fn discover(&self, _root: &Path) -> anyhow::Result<Vec<RuleFact>> {
        Ok(vec![])
    }
}

fn load(dir: &TempDir) -> Result<Profile, ProfileError> {
    Profile::from_path(dir.path(), &NoRules, ProfileOptions::new(Quiet))
}

#[test]
fn legacy_metadata_rb_is_read_when_yml_is_absent() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("metadata.rb"),
        "name 'acme/legacy'\ntitle 'Legacy Profile'\nversion '0.9.0'\n",
    )
    .unwrap();

    let profile = load(&dir).unwrap();
    assert_eq!(profile.metadata().name.as_deref(), Some("acme/legacy"));
    assert_eq!(profile.metadata().title.as_deref(), Some("Legacy Profile"));
    assert_eq!(profile.metadata().version.as_deref(), Some("0.9.0"));
}

#[test]
fn legacy_metadata_presence_warns_as_deprecated() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("metadata.rb"), "name 'acme/legacy'\n").unwrap();

    let profile = load(&dir).unwrap();
    let report = profile.check();
    assert!(report.warnings.contains(
        &"The use of `metadata.rb` is deprecated. Use `metadata.yml`.".to_string()
    ));
}

#[test]
fn primary_yml_wins_when_both_formats_exist() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("metadata.yml"), "name: acme/primary\n").unwrap();
    std::fs::write(dir.path().join("metadata.rb"), "name 'acme/legacy'\n").unwrap();

    let profile = load(&dir).unwrap();
    assert_eq!(profile.metadata().name.as_deref(), Some("acme/primary"));

    // The stale legacy file still draws the deprecation warning.
    let report = profile.check();
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("metadata.rb")));
}

#[test]
fn unparseable_yml_is_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("metadata.yml"), "name: [unclosed\n").unwrap();

    let err = load(&dir).unwrap_err();
    assert!(matches!(err, ProfileError::MetadataParse { .. }));
}

#[test]
fn absent_metadata_is_fatal() {
    let dir = TempDir::new().unwrap();

    let err = load(&dir).unwrap_err();
    assert!(matches!(err, ProfileError::MetadataRead { .. }));
}
