//! TOML keyring binding.
//!
//! Reads key metadata from a `keyring.toml` file:
//!
//! ```toml
//! [[keys]]
//! fingerprint = "0D6C98F95017B2A2B342D85EAFD51BBF7A42F8B3"
//! name = "Alice Example"
//! email = "alice@example.com"
//! expires = "2027-01-01T00:00:00Z"   # optional, RFC 3339
//! secret = true                      # optional, operator holds the key
//! ```
//!
//! File order is preserved and decides which key a query resolves to when
//! several match.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::core::keydir::{KeyDirectory, KeyInfo};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct KeyringFile {
    #[serde(default)]
    keys: Vec<KeyEntry>,
}

#[derive(Debug, Deserialize)]
struct KeyEntry {
    fingerprint: String,
    name: String,
    email: String,
    #[serde(default)]
    expires: Option<DateTime<Utc>>,
    #[serde(default)]
    secret: bool,
}

/// A key directory backed by a TOML keyring file.
#[derive(Debug)]
pub struct TomlKeyring {
    path: PathBuf,
    keys: Vec<KeyInfo>,
}

impl TomlKeyring {
    /// Load a keyring from `path`.
    ///
    /// # Errors
    ///
    /// Returns `Keyring` if the file is missing or malformed.
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading keyring");

        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Keyring(format!("cannot read keyring {}: {}", path.display(), e))
        })?;
        let file: KeyringFile = toml::from_str(&contents).map_err(|e| {
            Error::Keyring(format!("malformed keyring {}: {}", path.display(), e))
        })?;

        let keys = file
            .keys
            .into_iter()
            .map(|k| KeyInfo {
                fingerprint: k.fingerprint,
                name: k.name,
                email: k.email,
                expires: k.expires,
                secret: k.secret,
            })
            .collect::<Vec<_>>();

        debug!(keys = keys.len(), "keyring loaded");

        Ok(Self {
            path: path.to_path_buf(),
            keys,
        })
    }

    /// Path of the backing file, used as the directory's identity.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lookup(&self, fingerprint: &str) -> Option<&KeyInfo> {
        self.keys.iter().find(|k| k.fingerprint == fingerprint)
    }
}

/// Case-insensitive match of a query against one key's identity.
///
/// A query matches on a fingerprint suffix (with or without a `0x`
/// prefix), or a substring of the owner name or email.
fn matches(key: &KeyInfo, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    let q = q.strip_prefix("0x").unwrap_or(&q);
    if q.is_empty() {
        return false;
    }
    key.fingerprint.to_lowercase().ends_with(q)
        || key.name.to_lowercase().contains(q)
        || key.email.to_lowercase().contains(q)
}

impl KeyDirectory for TomlKeyring {
    fn find_public_keys(&self, query: Option<&str>) -> Result<Vec<KeyInfo>> {
        let found = match query {
            None => self.keys.clone(),
            Some(q) => self
                .keys
                .iter()
                .filter(|k| matches(k, q))
                .cloned()
                .collect(),
        };
        Ok(found)
    }

    fn find_private_keys(&self, query: &str) -> Result<Vec<KeyInfo>> {
        Ok(self
            .keys
            .iter()
            .filter(|k| k.secret && matches(k, query))
            .cloned()
            .collect())
    }

    fn format_key(&self, fingerprint: &str) -> String {
        match self.lookup(fingerprint) {
            Some(key) => format!("0x{} - {}", key.short_id(), key.display_name()),
            None => format!("0x{fingerprint}"),
        }
    }

    fn expiration_date(&self, fingerprint: &str) -> Result<Option<DateTime<Utc>>> {
        self.lookup(fingerprint)
            .map(|k| k.expires)
            .ok_or_else(|| {
                Error::Keyring(format!(
                    "key 0x{} not found in {}",
                    fingerprint,
                    self.path.display()
                ))
            })
    }

    fn display_name(&self, fingerprint: &str) -> String {
        match self.lookup(fingerprint) {
            Some(key) => key.display_name(),
            None => fingerprint.to_string(),
        }
    }
}
