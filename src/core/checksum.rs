//! Recipient-list checksums.
//!
//! A store node's recipient list is persisted together with a SHA-256
//! checksum over its contents. Re-deriving the checksum on read is how
//! external drift is detected without re-verifying key material.

use sha2::{Digest, Sha256};

use crate::core::types::Fingerprint;

/// Compute the checksum of a recipient list.
///
/// Fingerprints are hashed in list order, newline-separated, so the
/// checksum is order-sensitive and stable across loads.
pub fn recipients_checksum(recipients: &[Fingerprint]) -> String {
    let mut hasher = Sha256::new();
    for fingerprint in recipients {
        hasher.update(fingerprint.as_bytes());
        hasher.update(b"\n");
    }
    let digest = hasher.finalize();
    digest.iter().fold(String::with_capacity(64), |mut acc, b| {
        use std::fmt::Write;
        let _ = write!(acc, "{b:02x}");
        acc
    })
}
