//! Key directory seam.
//!
//! A key directory answers metadata queries about keys: lookup by a
//! human-supplied reference, fingerprints, display formatting, and
//! expiration dates. It never touches private key material or performs
//! cryptographic operations.

pub mod file;

use chrono::{DateTime, Utc};

use crate::core::types::Fingerprint;
use crate::error::Result;

pub use file::TomlKeyring;

/// Metadata for one key in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfo {
    /// Canonical fingerprint.
    pub fingerprint: Fingerprint,
    /// Owner name.
    pub name: String,
    /// Owner email.
    pub email: String,
    /// Expiration date; `None` means the key never expires.
    pub expires: Option<DateTime<Utc>>,
    /// Whether the operator holds the private half of this key.
    pub secret: bool,
}

impl KeyInfo {
    /// Owner identity as `Name <email>`.
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Short key id: the last 16 characters of the fingerprint, or the
    /// whole fingerprint when shorter.
    pub fn short_id(&self) -> &str {
        let len = self.fingerprint.len();
        &self.fingerprint[len.saturating_sub(16)..]
    }
}

/// Read-only key metadata lookup.
///
/// The order of returned matches is authoritative: callers canonicalize a
/// reference to the FIRST match, with no secondary ranking.
pub trait KeyDirectory {
    /// All public keys matching `query`, or every known public key when
    /// `query` is `None`.
    fn find_public_keys(&self, query: Option<&str>) -> Result<Vec<KeyInfo>>;

    /// Keys matching `query` for which the operator holds the private half.
    fn find_private_keys(&self, query: &str) -> Result<Vec<KeyInfo>>;

    /// Human-readable rendering of the key with the given fingerprint,
    /// e.g. `0xDEADBEEF00112233 - Alice <alice@example.com>`. Unknown
    /// fingerprints render as `0x<fingerprint>`.
    fn format_key(&self, fingerprint: &str) -> String;

    /// Expiration date for the key with the given fingerprint.
    ///
    /// # Errors
    ///
    /// Returns `Keyring` if the fingerprint is not present in the
    /// directory; expiration cannot be audited for unknown keys.
    fn expiration_date(&self, fingerprint: &str) -> Result<Option<DateTime<Utc>>>;

    /// Owner identity for the given fingerprint, or the fingerprint
    /// itself when unknown.
    fn display_name(&self, fingerprint: &str) -> String;
}
