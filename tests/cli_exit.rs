// tests/cli_exit.rs
//
// Exit status of the built binary, fed local fixtures only.
//
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bluebook_scrape"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn success_exits_zero_and_reports_path() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("india.txt");
    let res = bin()
        .arg("--input").arg(fixture("three_level.html"))
        .arg("-o").arg(&out)
        .arg("-f").arg("text")
        .arg("-q")
        .output()
        .unwrap();

    assert!(res.status.success(), "{}", String::from_utf8_lossy(&res.stderr));
    assert!(String::from_utf8_lossy(&res.stdout).contains("Wrote"));
    assert!(fs::read_to_string(&out).unwrap().contains("    Supreme Court"));
}

#[test]
fn missing_anchor_exits_non_zero_without_output() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("india.md");
    let res = bin()
        .arg("--input").arg(fixture("no_anchor.html"))
        .arg("-o").arg(&out)
        .output()
        .unwrap();

    assert!(!res.status.success());
    assert!(String::from_utf8_lossy(&res.stderr).contains("Parse error"));
    assert!(!out.exists());
}

#[test]
fn unwritable_path_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let res = bin()
        .arg("--input").arg(fixture("three_level.html"))
        .arg("-o").arg(blocker.join("india.md"))
        .output()
        .unwrap();

    assert!(!res.status.success());
    assert!(String::from_utf8_lossy(&res.stderr).contains("IO error"));
}

#[test]
fn unknown_flag_is_rejected() {
    let res = bin().arg("--no-such-flag").output().unwrap();
    assert!(!res.status.success());
}
