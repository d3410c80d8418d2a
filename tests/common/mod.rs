#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn rota_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rota").unwrap();
    cmd.env_remove("ROTA_ROOT");
    cmd.env_remove("ROTA_NOW");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a store in `root`
pub fn init_store(root: &Path) {
    rota_cmd().arg("init").arg(root).assert().success();
}

/// Create a list as of `now` and return its id
pub fn create_list(root: &Path, name: &str, now: &str) -> String {
    let output = rota_cmd()
        .current_dir(root)
        .env("ROTA_NOW", now)
        .arg("create")
        .arg(name)
        .output()
        .unwrap();
    assert!(output.status.success(), "create failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

/// Add people to a list in order
pub fn add_people(root: &Path, id: &str, people: &[&str]) {
    for person in people {
        rota_cmd()
            .current_dir(root)
            .args(["add", id, *person])
            .assert()
            .success();
    }
}
