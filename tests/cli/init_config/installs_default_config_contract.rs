use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn init_config_writes_bundled_default() {
    let ctx = TestContext::bare();

    ctx.cli()
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));

    let content = fs::read_to_string(ctx.config_path()).unwrap();
    assert!(content.contains("world_dir: world"));
}

#[test]
fn init_config_keeps_existing_file() {
    let ctx = TestContext::new();
    fs::write(ctx.config_path(), "world_dir: survival\n").unwrap();

    ctx.cli()
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(ctx.config_path()).unwrap(), "world_dir: survival\n");
}

#[test]
fn first_command_installs_default_config() {
    let ctx = TestContext::bare();
    let dat = ctx.write_world_file("playerdata/abc-123.dat");

    ctx.cli().args(["uuid", "abc-123"]).assert().success();

    assert!(ctx.config_path().exists());
    assert!(!dat.exists(), "bundled default clears playerdata");
}

#[test]
fn invalid_config_fails_at_startup() {
    let ctx = TestContext::bare();
    ctx.write_config("dat:\n  playerdata: playerdata\n");

    ctx.cli()
        .args(["uuid", "abc-123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("world_dir"));
}
