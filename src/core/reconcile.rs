//! Trust reconciliation across mount points.
//!
//! Walks every store node, root first, and re-establishes operator trust
//! wherever the recipient list has drifted from its checksum or was
//! never confirmed. One confirmation covers a whole node's list; a
//! decline leaves the node untouched for the next run.

use tracing::{debug, info};

use crate::cli::output;
use crate::core::checksum::recipients_checksum;
use crate::core::keydir::KeyDirectory;
use crate::core::prompt::Prompt;
use crate::core::store::{display_alias, StoreNode, StoreTree};
use crate::core::trust::TrustCache;
use crate::error::{Error, Result};

/// Reconcile every node of the tree; returns how many were updated.
///
/// Nodes are visited in ascending alias length, so a shorter (more
/// general) path is reconciled before any nested path sharing its
/// prefix, and the root (empty alias) always goes first. Detached
/// mounts are skipped; any storage failure other than checksum drift
/// aborts the walk.
pub fn reconcile(
    tree: &dyn StoreTree,
    cache: &mut TrustCache,
    prompt: &mut dyn Prompt,
) -> Result<usize> {
    let mut aliases = tree.mount_points();
    aliases.push(String::new());
    aliases.sort_by_key(|a| a.len());

    let mut changed = 0usize;
    for alias in &aliases {
        let label = display_alias(alias);

        let Some(mut node) = tree.node(alias) else {
            debug!(store = label, "store not resolvable, skipping");
            continue;
        };

        let recipients = match node.recipients() {
            Ok(list) => {
                let checksum = recipients_checksum(&list);
                if cache.get(alias, &node.id_file()) == Some(checksum.as_str()) {
                    debug!(store = label, "checksum already confirmed, skipping");
                    continue;
                }
                list
            }
            // Drift is the condition this walk exists for, not a failure.
            Err(Error::ChecksumDrifted(_)) => node.recipients_unverified()?,
            Err(e) => return Err(e),
        };

        let key_directory = node.key_directory()?;
        output::header(&format!("Please confirm recipients for {label}:"));
        for fingerprint in &recipients {
            output::list_item(&key_directory.format_key(fingerprint));
        }
        if !prompt.confirm(&format!("Do you trust these recipients for {label}?"))? {
            continue;
        }

        node.set_recipients(&recipients)?;
        cache.record(alias, &node.id_file(), &recipients_checksum(&recipients));
        cache.save()?;

        info!(store = label, recipients = recipients.len(), "trust confirmed");
        changed += 1;
    }

    Ok(changed)
}
