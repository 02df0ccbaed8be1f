//! dyn-invoke 端到端测试

#![cfg(unix)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

const WRAPPER_LIBRARY: &str = "/usr/local/lib/libprintf_wrapper.so";

fn dyn_invoke() -> Command {
    let mut cmd = Command::cargo_bin("dyn-invoke").expect("binary built");
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn runs_wrapper_or_reports_loader_error() {
    let assert = dyn_invoke().assert();

    if Path::new(WRAPPER_LIBRARY).exists() {
        assert
            .success()
            .stdout(predicate::str::contains("Hello from printf!"))
            .stdout(predicate::str::contains("Hello from printf_wrapper!"));
    } else {
        // Nothing is printed on stdout when the library cannot be opened
        assert
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("libprintf_wrapper.so"));
    }
}

#[test]
fn local_print_comes_first() {
    if !Path::new(WRAPPER_LIBRARY).exists() {
        return;
    }
    let output = dyn_invoke().output().expect("dyn-invoke runs");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let local = stdout.find("Hello from printf!").expect("local print");
    let wrapped = stdout
        .find("Hello from printf_wrapper!")
        .expect("wrapper print");
    assert!(local < wrapped, "{}", stdout);
}

#[test]
fn version_exits_zero() {
    dyn_invoke()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn arguments_are_rejected_with_status_one() {
    dyn_invoke().arg("--path").arg("/tmp/x.so").assert().code(1);
}
