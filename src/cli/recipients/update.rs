//! Update command - reconcile recipient trust across all stores.

use crate::cli::output;
use crate::core::prompt::TermPrompt;
use crate::core::reconcile;
use crate::core::store::{store_root, FsStoreTree};
use crate::core::trust::TrustCache;
use crate::error::Result;

/// Walk every store node and re-confirm drifted or unconfirmed
/// recipient lists. Zero changes is a successful no-op.
pub fn execute() -> Result<()> {
    let root = store_root();
    let tree = FsStoreTree::open(&root)?;
    let mut cache = TrustCache::open(&root)?;
    let mut prompt = TermPrompt;

    let changed = reconcile::reconcile(&tree, &mut cache, &mut prompt)?;

    if changed > 0 {
        output::success(&format!("updated {changed} stores"));
    } else {
        output::success("nothing to do");
    }
    Ok(())
}
