use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn clean_with_confirm_removes_stale_players_only() {
    let ctx = TestContext::new();
    let stale_dat = ctx.write_aged_world_file("playerdata/abc-123.dat", 45);
    let stale_stats = ctx.write_world_file("stats/abc-123.json");
    let fresh_dat = ctx.write_aged_world_file("playerdata/def-456.dat", 3);

    ctx.cli()
        .args(["clean", "30", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::eq("say Clearing data of abc-123\n"))
        .stderr(predicate::str::contains("Cleaned 1 stale player(s)"));

    assert!(!stale_dat.exists());
    assert!(!stale_stats.exists(), "every category is cleared for a stale player");
    assert!(fresh_dat.exists());
}
