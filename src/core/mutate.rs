//! Add / remove recipient workflow.
//!
//! Both directions share one shape: pick the target store node, gather
//! candidate references, then per candidate resolve → confirm → commit.
//! Per-candidate failures skip to the next candidate; a batch that
//! commits nothing fails as a whole.

use tracing::info;

use crate::cli::output;
use crate::core::keydir::KeyDirectory;
use crate::core::prompt::{Prompt, SelectAction};
use crate::core::resolve;
use crate::core::store::{display_alias, StoreNode, StoreTree};
use crate::core::types::KeyId;
use crate::error::{Error, Result};

const SELECT_HELP: &str = "↑/↓ to move, enter to select, esc to cancel";

/// Which way the recipient set is changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Add,
    Remove,
}

impl Direction {
    fn verb(self) -> &'static str {
        match self {
            Direction::Add => "add",
            Direction::Remove => "remove",
        }
    }

    /// Past participle for completion notices and the zero-commit error.
    pub fn past(self) -> &'static str {
        match self {
            Direction::Add => "added",
            Direction::Remove => "removed",
        }
    }
}

/// Parameters of one add/remove invocation.
#[derive(Debug)]
pub struct MutateRequest<'a> {
    /// Target store alias; `None` asks the operator to pick one.
    pub store: Option<&'a str>,
    /// Candidate key references; empty asks the operator to pick one.
    pub ids: &'a [KeyId],
    /// Trust unresolvable references as fingerprints verbatim.
    pub force: bool,
}

/// Run the workflow; returns the number of committed changes.
///
/// # Errors
///
/// Returns `UserAborted` if the operator backs out of a selection,
/// `NoKeyMutated` if every candidate was skipped or declined, and the
/// first storage failure encountered (committed candidates stay
/// committed; the rest of the batch is abandoned).
pub fn run(
    direction: Direction,
    tree: &dyn StoreTree,
    prompt: &mut dyn Prompt,
    request: &MutateRequest,
) -> Result<usize> {
    let alias = match request.store {
        Some(alias) => alias.to_string(),
        None => select_store(tree, prompt)?,
    };
    let label = display_alias(&alias).to_string();

    let mut node = tree
        .node(&alias)
        .ok_or_else(|| Error::StoreNotFound(label.clone()))?;
    let key_directory = node.key_directory()?;

    let candidates: Vec<KeyId> = if request.ids.is_empty() {
        select_candidates(direction, node.as_ref(), key_directory.as_ref(), prompt)?
    } else {
        request.ids.to_vec()
    };

    let mut committed = 0usize;
    for id in &candidates {
        if direction == Direction::Remove && holds_private_key(key_directory.as_ref(), id) {
            let question =
                format!("Do you want to remove yourself ({id}) from the recipients?");
            if !prompt.confirm(&question)? {
                continue;
            }
        }

        let fingerprint = match resolve::resolve(id, key_directory.as_ref(), request.force) {
            Ok(fingerprint) => fingerprint,
            Err(Error::NoMatchingKey(_)) => {
                output::warn(&format!("no matching valid key found for '{id}', skipping"));
                output::hint("verify the key is in the keyring, or pass --force to trust the id as-is");
                continue;
            }
            Err(e) => return Err(e),
        };

        let question = match direction {
            Direction::Add => format!(
                "Do you want to add '{}' as a recipient to the store '{label}'?",
                key_directory.format_key(&fingerprint)
            ),
            Direction::Remove => format!(
                "Do you want to remove '{}' from the store '{label}'?",
                key_directory.format_key(&fingerprint)
            ),
        };
        if !prompt.confirm(&question)? {
            continue;
        }

        // Confirmation already happened above; the storage layer never
        // prompts again.
        let result = match direction {
            Direction::Add => node.add_recipient(&fingerprint),
            Direction::Remove => node.remove_recipient(&fingerprint),
        };
        if let Err(e) = result {
            return Err(Error::Recipients {
                op: direction.verb(),
                id: id.clone(),
                source: Box::new(e),
            });
        }

        info!(
            store = %label,
            fingerprint = %fingerprint,
            "recipient {}", direction.past()
        );

        if direction == Direction::Remove {
            print!("{}", removal_notice(id));
        }
        committed += 1;
    }

    if committed == 0 {
        return Err(Error::NoKeyMutated(direction.past()));
    }
    Ok(committed)
}

fn holds_private_key(key_directory: &dyn KeyDirectory, id: &str) -> bool {
    matches!(key_directory.find_private_keys(id), Ok(keys) if !keys.is_empty())
}

fn select_store(tree: &dyn StoreTree, prompt: &mut dyn Prompt) -> Result<String> {
    let mut aliases = vec![String::new()];
    aliases.extend(tree.mount_points());
    let choices: Vec<String> = aliases
        .iter()
        .map(|a| display_alias(a).to_string())
        .collect();

    match prompt.select_one("Select store", SELECT_HELP, &choices)? {
        (SelectAction::Default | SelectAction::Show, index) => Ok(aliases[index].clone()),
        (SelectAction::Abort, _) => Err(Error::UserAborted),
    }
}

/// Interactive candidate choice: all known public keys when adding, the
/// node's current recipients when removing. An empty directory or list
/// yields no candidates, which the caller reports as `NoKeyMutated`.
fn select_candidates(
    direction: Direction,
    node: &dyn StoreNode,
    key_directory: &dyn KeyDirectory,
    prompt: &mut dyn Prompt,
) -> Result<Vec<KeyId>> {
    let (title, ids): (&str, Vec<KeyId>) = match direction {
        Direction::Add => (
            "Add recipient",
            key_directory
                .find_public_keys(None)?
                .into_iter()
                .map(|k| k.fingerprint)
                .collect(),
        ),
        Direction::Remove => ("Remove recipient", node.recipients()?),
    };
    if ids.is_empty() {
        return Ok(vec![]);
    }

    let choices: Vec<String> = ids.iter().map(|id| key_directory.format_key(id)).collect();
    match prompt.select_one(title, SELECT_HELP, &choices)? {
        (SelectAction::Default | SelectAction::Show, index) => Ok(vec![ids[index].clone()]),
        (SelectAction::Abort, _) => Err(Error::UserAborted),
    }
}

/// Printed after every successful removal, unconditionally: removal does
/// not rewrite history.
pub fn removal_notice(id: &str) -> String {
    format!(
        "\nWARNING: removing a recipient does not revoke access to old data!\n\
         '{id}' can still read any copy of the store and any revision they\n\
         ever had access to. Treat every credential they could read while\n\
         trusted as compromised and rotate it.\n\n"
    )
}
