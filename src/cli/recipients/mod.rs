//! Recipient commands: show, expiry, add, rm, update.

pub mod add;
pub mod expiry;
pub mod rm;
pub mod show;
pub mod update;
