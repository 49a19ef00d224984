//! Constants used throughout warren.
//!
//! Centralizes magic strings and configuration values.

/// Store tree configuration file name (.warren.toml).
pub const STORE_CONFIG_FILE: &str = ".warren.toml";

/// Per-node recipient list file name.
pub const RECIPIENTS_FILE: &str = "recipients.toml";

/// Operator trust cache file name, stored at the tree root.
pub const TRUST_FILE: &str = ".warren-trust.toml";

/// Default keyring file, relative to the tree root.
pub const DEFAULT_KEYRING: &str = "keyring.toml";

/// Environment variable overriding the store root directory.
pub const ROOT_ENV: &str = "WARREN_ROOT";

/// Display label for the root store (empty alias).
pub const ROOT_LABEL: &str = "<root>";

/// Default expiration warning threshold, in hours (14 days).
pub const DEFAULT_WARN_THRESHOLD_HOURS: i64 = 336;
