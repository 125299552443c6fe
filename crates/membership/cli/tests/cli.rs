//! Command-line behaviour that must hold without a reachable API: all of
//! these fail during validation or confirmation, before any request is sent.

use assert_cmd::Command;
use predicates::prelude::*;

/// Points at a port nothing listens on, so a request would fail loudly
fn members() -> Command {
    let mut cmd = Command::cargo_bin("members").unwrap();
    cmd.env("MEMBERS_CONFIG", "/nonexistent/members/config.toml")
        .env("MEMBERS_ENDPOINT", "http://127.0.0.1:9")
        .env_remove("MEMBERS_DOMAIN")
        .env_remove("MEMBERS_TOKEN");
    cmd
}

#[test]
fn add_without_members_fails_fast() {
    members()
        .args(["--domain", "docs", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No members given"));
}

#[test]
fn add_with_invalid_role_fails_fast() {
    members()
        .args(["--domain", "docs", "add", "alice", "--role", "superuser"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid role 'superuser'"));
}

#[test]
fn remove_without_members_fails_fast() {
    members()
        .args(["--domain", "docs", "remove", "--ids"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No members given"));
}

#[test]
fn remove_all_with_member_list_is_rejected() {
    members()
        .args(["--domain", "docs", "remove", "--all", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_domain_is_a_configuration_error() {
    members()
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No domain given"));
}

#[test]
fn help_lists_subcommands() {
    members()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("remove"));
}

#[test]
fn unconfirmed_remove_all_fails_without_a_request() {
    members()
        .args(["--domain", "docs", "remove", "--all"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt error").or(predicate::str::contains("Aborted")))
        .stderr(predicate::str::contains("HTTP error").not())
        .stdout(predicate::str::contains("Removed").not());
}
