//! Integration tests for the CLI contract.
//!
//! These exercise the usage/help paths and the failure ordering of the
//! pipeline. Actually joining a namespace and mounting needs
//! CAP_SYS_ADMIN, so the success path is not driven from here.

use assert_cmd::Command;
use predicates::prelude::*;

fn sgpu_mount() -> Command {
    Command::cargo_bin("sgpu-mount").expect("binary built")
}

#[test]
fn help_flag_prints_usage_and_exits_zero() {
    sgpu_mount()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn no_arguments_prints_usage_and_exits_zero() {
    sgpu_mount()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn too_few_arguments_prints_usage_and_exits_zero() {
    sgpu_mount()
        .args(["4821", "/dev/sgpu0", "/var/lib/containers/4821/dev/sgpu0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[cfg(target_os = "linux")]
#[test]
fn nonexistent_pid_exits_with_enoent_and_touches_nothing() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    let gpu_target = tmp.path().join("sgpu0");
    let control_target = tmp.path().join("nvidiactl");

    sgpu_mount()
        .args([
            "0", // PID 0 never has a /proc entry
            "/dev/null",
            gpu_target.to_str().expect("utf-8 path"),
            "/dev/null",
            control_target.to_str().expect("utf-8 path"),
        ])
        .assert()
        .failure()
        .code(2) // ENOENT from opening /proc/0/ns/mnt
        .stderr(predicate::str::contains("cannot open mount namespace"));

    // The pipeline stopped before creating any mount target.
    assert!(!gpu_target.exists());
    assert!(!control_target.exists());
}
