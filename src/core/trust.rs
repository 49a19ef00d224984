//! Operator trust cache.
//!
//! Records, per (store alias, key directory identity), the recipient-list
//! checksum the operator last confirmed. Reconciliation consults this
//! mapping and only re-prompts when the fresh list no longer matches.
//! The cache is an explicit configuration object passed by reference into
//! the reconciler; nothing else writes it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants::TRUST_FILE;
use crate::error::Result;

#[derive(Debug, Default, Serialize, Deserialize)]
struct TrustFile {
    #[serde(default)]
    checksums: BTreeMap<String, String>,
}

/// Confirmed-checksum cache, persisted as `.warren-trust.toml` at the
/// store root.
#[derive(Debug)]
pub struct TrustCache {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl TrustCache {
    /// Load the trust cache for the store rooted at `root`. A missing
    /// file is an empty cache, not an error.
    pub fn open(root: &Path) -> Result<Self> {
        let path = root.join(TRUST_FILE);
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let file: TrustFile = toml::from_str(&contents)?;
            file.checksums
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "trust cache loaded");

        Ok(Self { path, entries })
    }

    fn key(alias: &str, id_file: &str) -> String {
        format!("{alias}@{id_file}")
    }

    /// The confirmed checksum for (alias, id_file), if any.
    pub fn get(&self, alias: &str, id_file: &str) -> Option<&str> {
        self.entries
            .get(&Self::key(alias, id_file))
            .map(String::as_str)
    }

    /// Record a newly confirmed checksum.
    pub fn record(&mut self, alias: &str, id_file: &str, checksum: &str) {
        self.entries
            .insert(Self::key(alias, id_file), checksum.to_string());
    }

    /// Persist the cache.
    pub fn save(&self) -> Result<()> {
        debug!(path = %self.path.display(), "saving trust cache");

        let file = TrustFile {
            checksums: self.entries.clone(),
        };
        let contents = toml::to_string_pretty(&file)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
