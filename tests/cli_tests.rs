//! CLI surface tests

mod common;

use predicates::prelude::*;

#[test]
fn test_help() {
    let workspace = common::TestWorkspace::new();

    common::fmconv_cmd(&workspace)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn test_version_flag() {
    let workspace = common::TestWorkspace::new();

    common::fmconv_cmd(&workspace)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_command() {
    let workspace = common::TestWorkspace::new();

    common::fmconv_cmd(&workspace)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Build info:"));
}

#[test]
fn test_completions_bash() {
    let workspace = common::TestWorkspace::new();

    common::fmconv_cmd(&workspace)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fmconv"));
}

#[test]
fn test_completions_unknown_shell() {
    let workspace = common::TestWorkspace::new();

    common::fmconv_cmd(&workspace)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}

#[test]
fn test_missing_subcommand() {
    let workspace = common::TestWorkspace::new();

    common::fmconv_cmd(&workspace).assert().failure();
}

#[test]
fn test_verbose_logs_to_stderr() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("post.mdx", common::OLD_POST);

    common::fmconv_cmd(&workspace)
        .args(["--verbose", "convert", "post.mdx"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dropping unrecognized frontmatter key"));
}
