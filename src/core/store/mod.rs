//! Store tree seam.
//!
//! A store tree is a root store plus zero or more mounted sub-stores,
//! each owning a checksum-guarded recipient list and a key directory
//! binding. The traits here cover exactly what the recipient workflows
//! need; secret storage and replication live elsewhere.

pub mod fs;

use std::path::PathBuf;

use crate::core::constants::{ROOT_ENV, ROOT_LABEL};
use crate::core::keydir::KeyDirectory;
use crate::core::types::{Fingerprint, StoreAlias};
use crate::error::Result;

pub use fs::FsStoreTree;

/// One node of the store hierarchy.
///
/// Mutations never prompt; confirmation is the calling workflow's job.
pub trait StoreNode {
    /// The node's alias (empty string for the root store).
    fn alias(&self) -> &str;

    /// The recipient list, verified against its persisted checksum.
    ///
    /// # Errors
    ///
    /// Returns `ChecksumDrifted` when the list no longer matches the
    /// recorded checksum, `Storage` for any other failure.
    fn recipients(&self) -> Result<Vec<Fingerprint>>;

    /// The recipient list as currently persisted, without checksum
    /// verification. Reconciliation uses this to present a drifted list
    /// for confirmation.
    fn recipients_unverified(&self) -> Result<Vec<Fingerprint>>;

    /// Replace the recipient list; the checksum is recomputed and
    /// persisted atomically with it.
    fn set_recipients(&mut self, recipients: &[Fingerprint]) -> Result<()>;

    /// Append one fingerprint to the verified recipient list.
    fn add_recipient(&mut self, fingerprint: &str) -> Result<()>;

    /// Remove one fingerprint from the verified recipient list.
    fn remove_recipient(&mut self, fingerprint: &str) -> Result<()>;

    /// Identity of the node's key directory binding, used together with
    /// the alias as the trust-cache key.
    fn id_file(&self) -> String;

    /// Open the node's key directory.
    fn key_directory(&self) -> Result<Box<dyn KeyDirectory>>;
}

/// The mounted store hierarchy.
pub trait StoreTree {
    /// Aliases of all mounted sub-stores, in configuration order. The
    /// root store is not listed; it is addressed by the empty alias.
    fn mount_points(&self) -> Vec<StoreAlias>;

    /// Resolve an alias to a node handle. Returns `None` for unknown
    /// aliases and for mounts whose backing directory is detached.
    fn node(&self, alias: &str) -> Option<Box<dyn StoreNode>>;
}

/// Display label for a store alias (the root has no printable alias).
pub fn display_alias(alias: &str) -> &str {
    if alias.is_empty() {
        ROOT_LABEL
    } else {
        alias
    }
}

/// The store root directory: `$WARREN_ROOT` or the current directory.
pub fn store_root() -> PathBuf {
    std::env::var_os(ROOT_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
