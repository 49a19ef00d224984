//! Warren - recipient trust management for hierarchical encrypted secret stores.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── recipients    # show / expiry / add / rm / update commands
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── keydir/       # KeyDirectory seam
//!     │   ├── mod       # KeyDirectory trait + KeyInfo
//!     │   └── file      # TOML keyring binding
//!     ├── store/        # Store tree seam
//!     │   ├── mod       # StoreTree / StoreNode traits
//!     │   └── fs        # Filesystem store binding
//!     ├── checksum      # Recipient-list checksums
//!     ├── trust         # Operator-confirmed checksum cache
//!     ├── prompt        # Confirm / select capability
//!     ├── resolve       # Recipient canonicalization
//!     ├── expiry        # Key expiration audit
//!     ├── mutate        # Add / remove workflow
//!     └── reconcile     # Trust reconciliation across mounts
//! ```
//!
//! # Features
//!
//! - Hierarchical stores: a root plus nested mounts, each with its own
//!   recipient list and keyring binding
//! - Checksum-guarded recipient lists with drift detection
//! - Confirm-then-commit mutation protocol for every recipient change
//! - Key expiration auditing

pub mod cli;
pub mod core;
pub mod error;
