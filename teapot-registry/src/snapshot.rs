//! Registry snapshot parsing.
//!
//! A snapshot is a TOML document holding a pre-fetched copy of the IANA
//! status-code registry: a `last-updated` freshness note plus one
//! `[[entries]]` table per standard code. Fetching the registry itself is
//! out of scope; a snapshot of the official list ships with this crate.

use std::{collections::HashSet, path::Path, str::FromStr};

use serde::Deserialize;

use crate::error::{Error, Result};

/// The snapshot bundled with this crate, used when no path is given.
const BUNDLED_SNAPSHOT: &str = include_str!("../data/iana.toml");

/// A status code and official name sourced from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CanonicalEntry {
    pub code: u16,
    #[serde(rename = "name")]
    pub official_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawSnapshot {
    last_updated: String,
    #[serde(default)]
    entries: Vec<CanonicalEntry>,
}

/// A parsed, validated registry snapshot.
///
/// Entries are guaranteed deduplicated by code with non-empty names.
#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    last_updated: String,
    entries: Vec<CanonicalEntry>,
}

impl RegistrySnapshot {
    /// Parse the snapshot bundled with this crate.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_SNAPSHOT, "iana.toml")
    }

    /// Load and parse a snapshot from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let filename = path.display().to_string();
        Self::parse(&content, &filename)
    }

    fn parse(content: &str, filename: &str) -> Result<Self> {
        let raw: RawSnapshot =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

        let mut seen: HashSet<u16> = HashSet::new();
        for entry in &raw.entries {
            if entry.official_name.trim().is_empty() {
                return Err(Error::malformed_case(entry.code));
            }
            if !seen.insert(entry.code) {
                return Err(Error::duplicate_code(entry.code));
            }
        }

        Ok(Self {
            last_updated: raw.last_updated,
            entries: raw.entries,
        })
    }

    /// Free-form text describing when the registry data was fetched.
    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    pub fn entries(&self) -> &[CanonicalEntry] {
        &self.entries
    }
}

impl FromStr for RegistrySnapshot {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, "registry.toml")
    }
}
