//! Test support utilities for warren integration tests.
//!
//! Provides reusable store fixtures and a scripted prompt.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use warren::core::checksum::recipients_checksum;
use warren::core::prompt::{Prompt, SelectAction};
use warren::core::store::FsStoreTree;
use warren::core::trust::TrustCache;
use warren::error::Result;

pub const FP_ALICE: &str = "0D6C98F95017B2A2B342D85EAFD51BBF7A42F8B3";
pub const FP_BOB: &str = "9A31F87F2B65FF2C8F53EA4CBB90A1D3E85C2F01";
pub const FP_CAROL: &str = "7C11A2B3C4D5E6F7A8B9C0D1E2F3A4B5C6D7E8F9";

/// Keyring with the operator (alice, private key held), an expired key
/// (bob) and a key without expiration (carol).
pub const KEYRING: &str = r#"
[[keys]]
fingerprint = "0D6C98F95017B2A2B342D85EAFD51BBF7A42F8B3"
name = "Alice Example"
email = "alice@example.com"
secret = true

[[keys]]
fingerprint = "9A31F87F2B65FF2C8F53EA4CBB90A1D3E85C2F01"
name = "Bob Builder"
email = "bob@example.com"
expires = "2020-01-01T00:00:00Z"

[[keys]]
fingerprint = "7C11A2B3C4D5E6F7A8B9C0D1E2F3A4B5C6D7E8F9"
name = "Carol Keeper"
email = "carol@example.com"
"#;

/// A store tree on a temp directory, built up per test.
pub struct TestStore {
    pub dir: TempDir,
}

impl TestStore {
    /// Empty store root with the standard keyring and no mounts.
    pub fn new() -> Self {
        let store = Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        };
        store.write_config(&[]);
        store.write_keyring(KEYRING);
        store
    }

    /// Store root with the standard keyring and the given mounts
    /// (alias, relative path).
    pub fn with_mounts(mounts: &[(&str, &str)]) -> Self {
        let store = Self::new();
        store.write_config(mounts);
        store
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_config(&self, mounts: &[(&str, &str)]) {
        let mut contents = String::from("keyring = \"keyring.toml\"\n\n[mounts]\n");
        for (alias, path) in mounts {
            contents.push_str(&format!("\"{alias}\" = {{ path = \"{path}\" }}\n"));
        }
        std::fs::write(self.root().join(".warren.toml"), contents).unwrap();
    }

    pub fn write_keyring(&self, contents: &str) {
        std::fs::write(self.root().join("keyring.toml"), contents).unwrap();
    }

    /// Write a node's recipient list with a valid checksum. `rel` is the
    /// node directory relative to the root; empty string = root node.
    pub fn write_recipients(&self, rel: &str, fingerprints: &[&str]) {
        let path = self.node_dir(rel);
        std::fs::create_dir_all(&path).unwrap();

        let list: Vec<String> = fingerprints.iter().map(|s| s.to_string()).collect();
        let contents = recipients_toml(&list, &recipients_checksum(&list));
        std::fs::write(path.join("recipients.toml"), contents).unwrap();
    }

    /// Write a node's recipient list with a checksum that does not match,
    /// simulating an external edit.
    pub fn write_drifted_recipients(&self, rel: &str, fingerprints: &[&str]) {
        let path = self.node_dir(rel);
        std::fs::create_dir_all(&path).unwrap();

        let list: Vec<String> = fingerprints.iter().map(|s| s.to_string()).collect();
        let contents = recipients_toml(&list, &"0".repeat(64));
        std::fs::write(path.join("recipients.toml"), contents).unwrap();
    }

    /// The persisted recipient list of a node.
    pub fn recipients(&self, rel: &str) -> Vec<String> {
        let contents =
            std::fs::read_to_string(self.node_dir(rel).join("recipients.toml")).unwrap();
        let value: toml::Value = toml::from_str(&contents).unwrap();
        value["recipients"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    /// Raw contents of the trust cache file, if present.
    pub fn trust_file(&self) -> Option<String> {
        std::fs::read_to_string(self.root().join(".warren-trust.toml")).ok()
    }

    /// Identity of the root keyring, as nodes report it.
    pub fn keyring_id(&self) -> String {
        self.root().join("keyring.toml").to_string_lossy().into_owned()
    }

    /// Record an already-confirmed checksum for a node, as a previous
    /// reconciliation run would have.
    pub fn record_trust(&self, alias: &str, fingerprints: &[&str]) {
        let list: Vec<String> = fingerprints.iter().map(|s| s.to_string()).collect();
        let mut cache = TrustCache::open(self.root()).unwrap();
        cache.record(alias, &self.keyring_id(), &recipients_checksum(&list));
        cache.save().unwrap();
    }

    pub fn tree(&self) -> FsStoreTree {
        FsStoreTree::open(self.root()).unwrap()
    }

    pub fn trust_cache(&self) -> TrustCache {
        TrustCache::open(self.root()).unwrap()
    }

    fn node_dir(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.root().to_path_buf()
        } else {
            self.root().join(rel)
        }
    }
}

fn recipients_toml(list: &[String], checksum: &str) -> String {
    let mut contents = String::from("recipients = [");
    for (i, fp) in list.iter().enumerate() {
        if i > 0 {
            contents.push_str(", ");
        }
        contents.push_str(&format!("\"{fp}\""));
    }
    contents.push_str(&format!("]\nchecksum = \"{checksum}\"\n"));
    contents
}

/// Prompt fake fed with canned answers; records every interaction.
pub struct ScriptedPrompt {
    confirms: VecDeque<bool>,
    selections: VecDeque<(SelectAction, usize)>,
    pub transcript: Vec<String>,
}

impl ScriptedPrompt {
    /// Answers nothing; any prompt is declined / aborted.
    pub fn silent() -> Self {
        Self {
            confirms: VecDeque::new(),
            selections: VecDeque::new(),
            transcript: Vec::new(),
        }
    }

    /// Canned confirmation answers, consumed in order; further confirms
    /// are declined.
    pub fn confirming(answers: &[bool]) -> Self {
        Self {
            confirms: answers.iter().copied().collect(),
            selections: VecDeque::new(),
            transcript: Vec::new(),
        }
    }

    /// Queue a selection outcome.
    pub fn select(mut self, action: SelectAction, index: usize) -> Self {
        self.selections.push_back((action, index));
        self
    }

    /// All recorded confirmation prompts.
    pub fn confirmations(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|line| line.strip_prefix("confirm: "))
            .collect()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.transcript.push(format!("confirm: {prompt}"));
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn select_one(
        &mut self,
        title: &str,
        _help: &str,
        choices: &[String],
    ) -> Result<(SelectAction, usize)> {
        self.transcript
            .push(format!("select: {title} [{}]", choices.join(" | ")));
        Ok(self
            .selections
            .pop_front()
            .unwrap_or((SelectAction::Abort, 0)))
    }
}
