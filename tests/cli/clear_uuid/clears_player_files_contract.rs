use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn uuid_clears_every_configured_file() {
    let ctx = TestContext::new();
    let dat = ctx.write_world_file("playerdata/abc-123.dat");
    let stats = ctx.write_world_file("stats/abc-123.json");
    let other = ctx.write_world_file("playerdata/def-456.dat");

    ctx.cli()
        .args(["uuid", "abc-123"])
        .assert()
        .success()
        .stdout(predicate::eq("say Clearing data of abc-123\n"))
        .stderr(predicate::str::contains("Cleared player data for UUID abc-123 (2 removed)"));

    assert!(!dat.exists(), "playerdata file should be removed");
    assert!(!stats.exists(), "stats file should be removed");
    assert!(other.exists(), "other players must be untouched");
}

#[test]
fn uuid_succeeds_when_nothing_is_present() {
    let ctx = TestContext::new();

    ctx.cli().args(["uuid", "abc-123"]).assert().success();
    ctx.cli()
        .args(["uuid", "abc-123"])
        .assert()
        .success()
        .stderr(predicate::str::contains("(0 removed), or no data was present"));
}
