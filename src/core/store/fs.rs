//! Filesystem store tree binding.
//!
//! The tree is described by `.warren.toml` at the store root:
//!
//! ```toml
//! keyring = "keyring.toml"
//!
//! [mounts]
//! "teamA" = { path = "teamA" }
//! "teamA/sub" = { path = "teamA/sub", keyring = "teamA/keyring.toml" }
//! ```
//!
//! Each node directory holds a `recipients.toml` with the fingerprint
//! list and its checksum:
//!
//! ```toml
//! recipients = ["0D6C98F95017B2A2B342D85EAFD51BBF7A42F8B3"]
//! checksum = "9c3aa7..."
//! ```
//!
//! Editing the list without updating the checksum is detected as drift
//! on the next read.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::checksum::recipients_checksum;
use crate::core::constants::{DEFAULT_KEYRING, RECIPIENTS_FILE, STORE_CONFIG_FILE};
use crate::core::keydir::{KeyDirectory, TomlKeyring};
use crate::core::store::{display_alias, StoreNode, StoreTree};
use crate::core::types::{Fingerprint, StoreAlias};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct StoreConfig {
    /// Keyring path for the root store, relative to the store root.
    #[serde(default)]
    keyring: Option<String>,
    /// Mounted sub-stores: alias → mount description.
    #[serde(default)]
    mounts: BTreeMap<String, Mount>,
}

#[derive(Debug, Deserialize)]
struct Mount {
    /// Node directory, relative to the store root.
    path: String,
    /// Mount-specific keyring; falls back to the root keyring.
    #[serde(default)]
    keyring: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RecipientsFile {
    #[serde(default)]
    recipients: Vec<Fingerprint>,
    #[serde(default)]
    checksum: String,
}

/// Store tree rooted at a directory with a `.warren.toml`.
#[derive(Debug)]
pub struct FsStoreTree {
    root: PathBuf,
    config: StoreConfig,
}

impl FsStoreTree {
    /// Open the store tree rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if `.warren.toml` is missing or malformed.
    pub fn open(root: &Path) -> Result<Self> {
        let path = root.join(STORE_CONFIG_FILE);
        debug!(path = %path.display(), "loading store config");

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            Error::Storage(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: StoreConfig = toml::from_str(&contents).map_err(|e| {
            Error::Storage(format!("malformed {}: {}", path.display(), e))
        })?;

        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    /// The store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn root_keyring(&self) -> PathBuf {
        self.root
            .join(self.config.keyring.as_deref().unwrap_or(DEFAULT_KEYRING))
    }
}

impl StoreTree for FsStoreTree {
    fn mount_points(&self) -> Vec<StoreAlias> {
        self.config.mounts.keys().cloned().collect()
    }

    fn node(&self, alias: &str) -> Option<Box<dyn StoreNode>> {
        let (dir, keyring) = if alias.is_empty() {
            (self.root.clone(), self.root_keyring())
        } else {
            let mount = self.config.mounts.get(alias)?;
            let keyring = mount
                .keyring
                .as_ref()
                .map(|k| self.root.join(k))
                .unwrap_or_else(|| self.root_keyring());
            (self.root.join(&mount.path), keyring)
        };

        if !dir.is_dir() {
            debug!(alias = display_alias(alias), "mount directory detached");
            return None;
        }

        Some(Box::new(FsStoreNode {
            alias: alias.to_string(),
            dir,
            keyring,
        }))
    }
}

/// One directory-backed store node.
#[derive(Debug)]
pub struct FsStoreNode {
    alias: String,
    dir: PathBuf,
    keyring: PathBuf,
}

impl FsStoreNode {
    fn recipients_path(&self) -> PathBuf {
        self.dir.join(RECIPIENTS_FILE)
    }

    fn load(&self) -> Result<RecipientsFile> {
        let path = self.recipients_path();
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            Error::Storage(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents)
            .map_err(|e| Error::Storage(format!("malformed {}: {}", path.display(), e)))
    }

    /// Write list + freshly computed checksum via a temp file rename, so
    /// a crash never leaves the pair half-updated.
    fn persist(&self, recipients: &[Fingerprint]) -> Result<()> {
        let file = RecipientsFile {
            recipients: recipients.to_vec(),
            checksum: recipients_checksum(recipients),
        };
        let contents = toml::to_string_pretty(&file)?;

        let path = self.recipients_path();
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &path)?;

        debug!(
            alias = display_alias(&self.alias),
            recipients = recipients.len(),
            "recipient list persisted"
        );
        Ok(())
    }
}

impl StoreNode for FsStoreNode {
    fn alias(&self) -> &str {
        &self.alias
    }

    fn recipients(&self) -> Result<Vec<Fingerprint>> {
        let file = self.load()?;
        if file.checksum != recipients_checksum(&file.recipients) {
            return Err(Error::ChecksumDrifted(
                display_alias(&self.alias).to_string(),
            ));
        }
        Ok(file.recipients)
    }

    fn recipients_unverified(&self) -> Result<Vec<Fingerprint>> {
        Ok(self.load()?.recipients)
    }

    fn set_recipients(&mut self, recipients: &[Fingerprint]) -> Result<()> {
        self.persist(recipients)
    }

    fn add_recipient(&mut self, fingerprint: &str) -> Result<()> {
        let mut recipients = self.recipients()?;
        if recipients.iter().any(|r| r == fingerprint) {
            return Err(Error::Storage(format!(
                "'{fingerprint}' is already a recipient of {}",
                display_alias(&self.alias)
            )));
        }
        recipients.push(fingerprint.to_string());
        self.persist(&recipients)
    }

    fn remove_recipient(&mut self, fingerprint: &str) -> Result<()> {
        let mut recipients = self.recipients()?;
        let before = recipients.len();
        recipients.retain(|r| r != fingerprint);
        if recipients.len() == before {
            return Err(Error::Storage(format!(
                "'{fingerprint}' is not a recipient of {}",
                display_alias(&self.alias)
            )));
        }
        self.persist(&recipients)
    }

    fn id_file(&self) -> String {
        self.keyring.to_string_lossy().into_owned()
    }

    fn key_directory(&self) -> Result<Box<dyn KeyDirectory>> {
        Ok(Box::new(TomlKeyring::open(&self.keyring)?))
    }
}
