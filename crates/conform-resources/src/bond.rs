//! Linux bonding interface status.
//!
//! Reads `/proc/net/bonding/<name>` and exposes the grouped parameters,
//! accumulating repeated keys such as `Slave Interface` into ordered
//! lists.

use crate::source::{FileSource, LocalFile};
use conform_core::kvparse::{self, ParseOptions, ParsedConfig};
use regex::Regex;
use std::cell::OnceCell;
use std::fmt;

const SLAVE_INTERFACE_KEY: &str = "Slave Interface";

/// Bonding status for one bond device.
///
/// The status file is read and parsed on first access and memoized,
/// including the case where the file is missing: that memoizes an empty
/// result. Construct a new value for fresh data.
pub struct Bond<S = LocalFile> {
    name: String,
    source: S,
    loaded: OnceCell<LoadedStatus>,
}

struct LoadedStatus {
    content: Option<String>,
    params: ParsedConfig,
}

impl Bond<LocalFile> {
    /// Bond status for `name` from the conventional procfs location.
    pub fn local(name: impl Into<String>) -> Self {
        let name = name.into();
        let source = LocalFile::new(format!("/proc/net/bonding/{}", name));
        Self::new(name, source)
    }
}

impl<S: FileSource> Bond<S> {
    pub fn new(name: impl Into<String>, source: S) -> Self {
        Self {
            name: name.into(),
            source,
            loaded: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exists(&self) -> bool {
        self.source.exists()
    }

    /// Grouped bonding parameters.
    pub fn params(&self) -> &ParsedConfig {
        &self.load().params
    }

    /// Raw status file content, if the file could be read.
    pub fn content(&self) -> Option<&str> {
        self.load().content.as_deref()
    }

    /// Interfaces enslaved to this bond, in file order.
    pub fn interfaces(&self) -> Vec<&str> {
        match self.load().params.get(SLAVE_INTERFACE_KEY) {
            Some(value) => value.values(),
            None => Vec::new(),
        }
    }

    pub fn has_interface(&self, interface: &str) -> bool {
        self.interfaces().iter().any(|i| *i == interface)
    }

    fn load(&self) -> &LoadedStatus {
        self.loaded.get_or_init(|| {
            if !self.source.exists() {
                return LoadedStatus {
                    content: None,
                    params: ParsedConfig::new(),
                };
            }
            match self.source.read() {
                Ok(content) => {
                    let options = ParseOptions::new(assignment_pattern()).multiple_values(true);
                    let params = kvparse::parse(&content, &options);
                    LoadedStatus {
                        content: Some(content),
                        params,
                    }
                }
                Err(_) => LoadedStatus {
                    content: None,
                    params: ParsedConfig::new(),
                },
            }
        })
    }
}

impl<S> fmt::Display for Bond<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bond {}", self.name)
    }
}

/// `key : value` with surrounding whitespace, as procfs bonding output
/// formats it.
fn assignment_pattern() -> Regex {
    Regex::new(r"^\s*([^:]*?)\s*:\s*(.*?)\s*$").expect("bonding assignment pattern is valid")
}
