//! Rm command - remove recipients from a store.

use tracing::info;

use crate::cli::output;
use crate::core::mutate::{self, Direction, MutateRequest};
use crate::core::prompt::TermPrompt;
use crate::core::store::{store_root, FsStoreTree};
use crate::error::Result;

/// Remove recipients, confirming each candidate before commit.
pub fn execute(store: Option<&str>, force: bool, ids: &[String]) -> Result<()> {
    info!("removing recipients");

    let tree = FsStoreTree::open(&store_root())?;
    let mut prompt = TermPrompt;

    let removed = mutate::run(
        Direction::Remove,
        &tree,
        &mut prompt,
        &MutateRequest { store, ids, force },
    )?;

    output::success(&format!("removed {removed} recipients"));
    output::hint("re-encrypt existing secrets to lock out the removed recipients");
    Ok(())
}
