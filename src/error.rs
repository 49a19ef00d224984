//! Error types and exit-code categories.
//!
//! Every user-visible failure maps to one of four stable exit-code
//! categories:
//!
//! | code | category   | meaning                                        |
//! |------|------------|------------------------------------------------|
//! | 1    | unknown    | nothing committed, audit failures, I/O faults  |
//! | 2    | list       | listing recipients for a store failed          |
//! | 3    | recipients | a recipient commit failed, or unexpected drift |
//! | 4    | aborted    | the operator cancelled a prompt                |

use thiserror::Error;

/// Catch-all failures: zero commits, expiring keys, storage faults.
pub const EXIT_UNKNOWN: i32 = 1;

/// Listing recipients for a store failed.
pub const EXIT_LIST: i32 = 2;

/// A recipient mutation failed to commit, or drift surfaced unexpectedly.
pub const EXIT_RECIPIENTS: i32 = 3;

/// The operator cancelled a prompt.
pub const EXIT_ABORTED: i32 = 4;

#[derive(Error, Debug)]
pub enum Error {
    #[error("user aborted")]
    UserAborted,

    #[error("no matching key found for '{0}'")]
    NoMatchingKey(String),

    #[error("no key {0}")]
    NoKeyMutated(&'static str),

    #[error("recipient list for {0} no longer matches its recorded checksum")]
    ChecksumDrifted(String),

    #[error("key(s) expired/expiring")]
    KeysExpiring,

    #[error("store {0} not found")]
    StoreNotFound(String),

    #[error("failed to list recipients for {store}: {source}")]
    List {
        store: String,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to {op} recipient '{id}': {source}")]
    Recipients {
        op: &'static str,
        id: String,
        #[source]
        source: Box<Error>,
    },

    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("storage failure: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    /// Map this error to its documented exit-code category.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UserAborted => EXIT_ABORTED,
            Error::List { .. } => EXIT_LIST,
            Error::Recipients { .. } | Error::ChecksumDrifted(_) | Error::StoreNotFound(_) => {
                EXIT_RECIPIENTS
            }
            _ => EXIT_UNKNOWN,
        }
    }

    /// Whether this error (or its cause) is checksum drift.
    pub fn is_drift(&self) -> bool {
        match self {
            Error::ChecksumDrifted(_) => true,
            Error::List { source, .. } | Error::Recipients { source, .. } => source.is_drift(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
