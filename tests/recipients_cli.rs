//! Tests for the `warren recipients` command surface.
//!
//! Only non-interactive paths are driven here; the prompting workflows
//! are covered in `mutation.rs` and `reconcile.rs` with a scripted
//! prompt.

mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use support::{TestStore, FP_ALICE, FP_BOB};

fn warren(store: &TestStore) -> Command {
    let mut cmd = Command::cargo_bin("warren").unwrap();
    cmd.env("WARREN_ROOT", store.root()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_show_lists_every_store_root_first() {
    let store = TestStore::with_mounts(&[("teamA", "teamA")]);
    store.write_recipients("", &[FP_ALICE]);
    store.write_recipients("teamA", &[FP_BOB]);

    warren(&store)
        .args(["recipients", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<root>"))
        .stdout(predicate::str::contains("teamA"))
        .stdout(predicate::str::contains("Alice Example <alice@example.com>"))
        .stdout(predicate::str::contains("Bob Builder <bob@example.com>"));
}

#[test]
fn test_show_json_output() {
    let store = TestStore::new();
    store.write_recipients("", &[FP_ALICE]);

    let output = warren(&store)
        .args(["recipients", "show", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let stores = parsed["stores"].as_array().unwrap();
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0]["store"], "<root>");
    assert_eq!(stores[0]["recipients"][0], FP_ALICE);
}

#[test]
fn test_show_drifted_store_exits_with_list_code() {
    let store = TestStore::new();
    store.write_drifted_recipients("", &[FP_ALICE]);

    warren(&store)
        .args(["recipients", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to list recipients"))
        .stdout(predicate::str::contains("warren recipients update"));
}

#[test]
fn test_expiry_clean_store_succeeds() {
    let store = TestStore::new();
    store.write_recipients("", &[FP_ALICE]);

    warren(&store)
        .args(["recipients", "expiry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expir").not());
}

#[test]
fn test_expiry_expired_key_warns_and_fails() {
    let store = TestStore::new();
    store.write_recipients("", &[FP_ALICE, FP_BOB]);

    warren(&store)
        .args(["recipients", "expiry"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!("0x{FP_BOB}")))
        .stdout(predicate::str::contains("Bob Builder"))
        .stdout(predicate::str::contains("expired at"))
        .stderr(predicate::str::contains("expired/expiring"));
}

#[test]
fn test_expiry_unknown_key_aborts_audit() {
    let store = TestStore::new();
    store.write_recipients("", &["DEADBEEFDEADBEEFDEADBEEFDEADBEEFDEADBEEF"]);

    warren(&store)
        .args(["recipients", "expiry"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("keyring error"));
}

#[test]
fn test_expiry_unknown_store_fails() {
    let store = TestStore::new();
    store.write_recipients("", &[FP_ALICE]);

    warren(&store)
        .args(["recipients", "expiry", "--store", "nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("store nowhere not found"));
}

#[test]
fn test_add_unmatched_id_warns_and_reports_nothing_added() {
    let store = TestStore::new();
    store.write_recipients("", &[FP_ALICE]);

    warren(&store)
        .args(["recipients", "add", "--store", "", "ghost@example.org"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "no matching valid key found for 'ghost@example.org'",
        ))
        .stderr(predicate::str::contains("no key added"));

    // Nothing was committed.
    assert_eq!(store.recipients(""), vec![FP_ALICE.to_string()]);
}

#[test]
fn test_update_with_confirmed_checksums_is_a_noop() {
    let store = TestStore::with_mounts(&[("teamA", "teamA")]);
    store.write_recipients("", &[FP_ALICE]);
    store.write_recipients("teamA", &[FP_ALICE, FP_BOB]);
    store.record_trust("", &[FP_ALICE]);
    store.record_trust("teamA", &[FP_ALICE, FP_BOB]);

    warren(&store)
        .args(["recipients", "update"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));
}

#[test]
fn test_missing_store_config_fails() {
    let dir = tempfile::TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("warren").unwrap();
    cmd.env("WARREN_ROOT", dir.path())
        .env("NO_COLOR", "1")
        .args(["recipients", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("storage failure"));
}

#[test]
fn test_completions_bash() {
    let store = TestStore::new();

    warren(&store)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warren"));
}
