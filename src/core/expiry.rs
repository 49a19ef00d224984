//! Key expiration audit.

use chrono::{DateTime, Duration, Utc};

use crate::core::keydir::KeyDirectory;
use crate::core::store::StoreNode;
use crate::error::Result;

/// Evaluate one key's expiration against a warning threshold.
///
/// Outcomes, in order:
/// 1. no expiration date → no warning (some keys are valid forever);
/// 2. already expired → `expired at <date>`;
/// 3. expiring within the threshold → `expiring in ~<hours>h at <date>`,
///    hours rounded down;
/// 4. otherwise → no warning.
pub fn evaluate(
    expiration: Option<DateTime<Utc>>,
    warn_threshold: Duration,
    now: DateTime<Utc>,
) -> (String, bool) {
    let Some(expiration) = expiration else {
        return (String::new(), false);
    };
    if now >= expiration {
        return (format!("expired at {expiration}"), true);
    }
    if expiration < now + warn_threshold {
        let hours = (expiration - now).num_hours();
        return (format!("expiring in ~{hours}h at {expiration}"), true);
    }
    (String::new(), false)
}

/// Audit every recipient of a node, returning one printable line per
/// warned key in the form `0x<fingerprint> (<owner>) <notice>`.
///
/// # Errors
///
/// Fails on the first expiration lookup that cannot be answered; unlike
/// resolver misses in a mutation batch, a broken key aborts the whole
/// audit.
pub fn audit(
    node: &dyn StoreNode,
    key_directory: &dyn KeyDirectory,
    warn_threshold: Duration,
    now: DateTime<Utc>,
) -> Result<Vec<String>> {
    let mut warned = Vec::new();
    for fingerprint in node.recipients()? {
        let expiration = key_directory.expiration_date(&fingerprint)?;
        let (notice, warn) = evaluate(expiration, warn_threshold, now);
        if warn {
            warned.push(format!(
                "0x{} ({}) {}",
                fingerprint,
                key_directory.display_name(&fingerprint),
                notice
            ));
        }
    }
    Ok(warned)
}
