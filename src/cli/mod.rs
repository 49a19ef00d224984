//! Command-line interface.

pub mod completions;
pub mod output;
pub mod recipients;

use clap::{Parser, Subcommand};

use crate::core::constants::DEFAULT_WARN_THRESHOLD_HOURS;

/// Warren - recipient trust management for hierarchical secret stores.
#[derive(Parser)]
#[command(
    name = "warren",
    about = "Recipient trust management for hierarchical encrypted secret stores",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Manage who can decrypt each store
    Recipients {
        #[command(subcommand)]
        action: RecipientsAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Recipient subcommands.
#[derive(Subcommand)]
pub enum RecipientsAction {
    /// Print the recipients of every store
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Warn about expired or soon-expiring recipient keys
    Expiry {
        /// Store alias (defaults to the root store)
        #[arg(long)]
        store: Option<String>,

        /// Warning threshold in hours
        #[arg(long, default_value_t = DEFAULT_WARN_THRESHOLD_HOURS)]
        warn_threshold: i64,
    },

    /// Add recipients to a store
    Add {
        /// Store alias (interactive selection if omitted)
        #[arg(long)]
        store: Option<String>,

        /// Trust unresolvable references as fingerprints verbatim
        #[arg(short, long)]
        force: bool,

        /// Key references (alias, email, short id)
        ids: Vec<String>,
    },

    /// Remove recipients from a store
    Rm {
        /// Store alias (interactive selection if omitted)
        #[arg(long)]
        store: Option<String>,

        /// Trust unresolvable references as fingerprints verbatim
        #[arg(short, long)]
        force: bool,

        /// Key references (alias, email, short id)
        ids: Vec<String>,
    },

    /// Re-confirm recipient lists that drifted or were never confirmed
    Update,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    match command {
        Command::Recipients { action } => match action {
            RecipientsAction::Show { json } => recipients::show::execute(json),
            RecipientsAction::Expiry {
                store,
                warn_threshold,
            } => recipients::expiry::execute(store.as_deref(), warn_threshold),
            RecipientsAction::Add { store, force, ids } => {
                recipients::add::execute(store.as_deref(), force, &ids)
            }
            RecipientsAction::Rm { store, force, ids } => {
                recipients::rm::execute(store.as_deref(), force, &ids)
            }
            RecipientsAction::Update => recipients::update::execute(),
        },
        Command::Completions { shell } => completions::execute(shell),
    }
}
