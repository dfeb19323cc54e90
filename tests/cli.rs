// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

//! End-to-end tests against a freshly created git repository.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
        .args(args)
        .status()
        .expect("git not available");
    assert!(status.success(), "git {args:?} failed");
}

fn commit(dir: &Path, subject: &str, body: Option<&str>) {
    let mut args = vec!["commit", "--allow-empty", "-q", "-m", subject];
    if let Some(body) = body {
        args.push("-m");
        args.push(body);
    }
    git(dir, &args);
}

fn chlog(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("chlog").expect("binary not built");
    cmd.current_dir(dir);
    cmd
}

#[test]
fn renders_grouped_changelog() {
    let tmp = tempfile::tempdir().unwrap();
    git(tmp.path(), &["init", "-q"]);
    commit(tmp.path(), "feat(api): add widget", Some("Adds a widget."));
    commit(
        tmp.path(),
        "fix: correct rounding",
        Some("Breaking changes:\n  - removed the old rounding mode"),
    );

    chlog(tmp.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("### Features")
                .and(predicate::str::contains("- add widget"))
                .and(predicate::str::contains("  Adds a widget."))
                .and(predicate::str::contains("### Bug Fixes"))
                .and(predicate::str::contains("- correct rounding"))
                .and(predicate::str::contains("### BREAKING CHANGES"))
                .and(predicate::str::contains("- removed the old rounding mode")),
        );
}

#[test]
fn unrecognized_commits_stay_out_of_the_output() {
    let tmp = tempfile::tempdir().unwrap();
    git(tmp.path(), &["init", "-q"]);
    commit(tmp.path(), "feat: add widget", None);
    commit(tmp.path(), "no separator here", None);

    chlog(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no separator here").not());
}

#[test]
fn show_errors_prints_diagnostics_to_stderr() {
    let tmp = tempfile::tempdir().unwrap();
    git(tmp.path(), &["init", "-q"]);
    commit(tmp.path(), "oops: mislabeled", None);

    chlog(tmp.path())
        .arg("--show-errors")
        .assert()
        .success()
        .stderr(predicate::str::contains("oops is an unknown commit type."));
}

#[test]
fn strict_fails_on_diagnostics() {
    let tmp = tempfile::tempdir().unwrap();
    git(tmp.path(), &["init", "-q"]);
    commit(tmp.path(), "no separator here", None);

    chlog(tmp.path())
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse diagnostics"));
}

#[test]
fn range_selection_excludes_older_commits() {
    let tmp = tempfile::tempdir().unwrap();
    git(tmp.path(), &["init", "-q"]);
    commit(tmp.path(), "feat: old feature", None);
    git(tmp.path(), &["tag", "v1"]);
    commit(tmp.path(), "fix: new fix", None);

    chlog(tmp.path())
        .args(["--from", "HEAD", "--to", "v1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("- new fix")
                .and(predicate::str::contains("old feature").not()),
        );
}

#[test]
fn fails_outside_a_repository() {
    let tmp = tempfile::tempdir().unwrap();

    chlog(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a git repository"));
}

#[test]
fn config_subcommand_prints_effective_config() {
    let tmp = tempfile::tempdir().unwrap();

    chlog(tmp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("include_unknown")
                .and(predicate::str::contains("heading_level")),
        );
}
