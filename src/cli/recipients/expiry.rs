//! Expiry command - warn about expired or soon-expiring recipient keys.

use chrono::{Duration, Utc};

use crate::core::expiry;
use crate::core::store::{display_alias, store_root, FsStoreTree, StoreNode, StoreTree};
use crate::error::{Error, Result};

/// Audit one store's recipients against the warning threshold.
///
/// Prints one line per warned key and fails with `KeysExpiring` when any
/// key warned. A single unreadable key aborts the audit outright.
pub fn execute(store: Option<&str>, warn_threshold_hours: i64) -> Result<()> {
    let tree = FsStoreTree::open(&store_root())?;

    let alias = store.unwrap_or("");
    let node = tree
        .node(alias)
        .ok_or_else(|| Error::StoreNotFound(display_alias(alias).to_string()))?;
    let key_directory = node.key_directory()?;

    let warned = expiry::audit(
        node.as_ref(),
        key_directory.as_ref(),
        Duration::hours(warn_threshold_hours),
        Utc::now(),
    )?;

    for line in &warned {
        println!("{line}");
    }
    if !warned.is_empty() {
        return Err(Error::KeysExpiring);
    }
    Ok(())
}
