//! Recipient canonicalization.
//!
//! Store recipient lists only ever hold canonical fingerprints. This
//! module turns a human-supplied key reference (alias, email, short id)
//! into the fingerprint to persist.

use crate::core::keydir::KeyDirectory;
use crate::core::types::Fingerprint;
use crate::error::{Error, Result};

/// Resolve a key reference to a canonical fingerprint.
///
/// The FIRST match returned by the key directory wins; directory order
/// is authoritative and no secondary ranking is applied. With
/// `allow_unverified`, a reference that matches nothing (or whose lookup
/// fails) is trusted as a fingerprint verbatim.
///
/// Pure query, no side effects.
///
/// # Errors
///
/// Returns `NoMatchingKey` when nothing matches and `allow_unverified`
/// is false. Callers inside a batch treat this as skip-and-continue.
pub fn resolve(
    input: &str,
    key_directory: &dyn KeyDirectory,
    allow_unverified: bool,
) -> Result<Fingerprint> {
    let found = key_directory
        .find_public_keys(Some(input))
        .unwrap_or_default();

    if let Some(key) = found.first() {
        return Ok(key.fingerprint.clone());
    }
    if allow_unverified {
        return Ok(input.to_string());
    }
    Err(Error::NoMatchingKey(input.to_string()))
}
