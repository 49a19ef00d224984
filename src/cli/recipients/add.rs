//! Add command - add recipients to a store.

use tracing::info;

use crate::cli::output;
use crate::core::mutate::{self, Direction, MutateRequest};
use crate::core::prompt::TermPrompt;
use crate::core::store::{store_root, FsStoreTree};
use crate::error::Result;

/// Add recipients, confirming each candidate before commit.
pub fn execute(store: Option<&str>, force: bool, ids: &[String]) -> Result<()> {
    info!("adding recipients");

    let tree = FsStoreTree::open(&store_root())?;
    let mut prompt = TermPrompt;

    let added = mutate::run(
        Direction::Add,
        &tree,
        &mut prompt,
        &MutateRequest { store, ids, force },
    )?;

    output::success(&format!("added {added} recipients"));
    output::hint("re-encrypt existing secrets so the new recipients can read them");
    Ok(())
}
