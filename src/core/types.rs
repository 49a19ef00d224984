//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A canonical public key fingerprint.
///
/// The only form ever persisted in a store's recipient list.
pub type Fingerprint = String;

/// A store node alias (mount path segment; empty string = root store).
pub type StoreAlias = String;

/// An unresolved, human-supplied key reference (alias, email, short id).
pub type KeyId = String;
