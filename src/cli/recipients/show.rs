//! Show command - print the recipients of every store.

use crate::cli::output;
use crate::core::keydir::KeyDirectory;
use crate::core::store::{display_alias, store_root, FsStoreTree, StoreNode, StoreTree};
use crate::error::{Error, Result};

/// Print every store's recipient list, root first.
pub fn execute(json: bool) -> Result<()> {
    let tree = FsStoreTree::open(&store_root())?;

    let mut aliases = tree.mount_points();
    aliases.push(String::new());
    aliases.sort_by_key(|a| a.len());

    let mut stores = Vec::new();
    for alias in &aliases {
        let label = display_alias(alias).to_string();
        let Some(node) = tree.node(alias) else {
            continue;
        };
        let recipients = node.recipients().map_err(|e| Error::List {
            store: label.clone(),
            source: Box::new(e),
        })?;
        let key_directory = node.key_directory().map_err(|e| Error::List {
            store: label.clone(),
            source: Box::new(e),
        })?;
        stores.push((label, recipients, key_directory));
    }

    if json {
        let value = serde_json::json!({
            "stores": stores
                .iter()
                .map(|(label, recipients, _)| serde_json::json!({
                    "store": label,
                    "recipients": recipients,
                }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    output::hint("import missing public keys into the keyring before adding them");
    for (label, recipients, key_directory) in &stores {
        output::section(label);
        if recipients.is_empty() {
            output::dimmed("no recipients");
        }
        for fingerprint in recipients {
            output::list_item(&key_directory.format_key(fingerprint));
        }
    }
    Ok(())
}
