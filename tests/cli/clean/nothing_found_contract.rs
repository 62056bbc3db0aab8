use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn clean_with_no_stale_data_reports_nothing_found() {
    let ctx = TestContext::new();
    let fresh = ctx.write_world_file("playerdata/abc-123.dat");

    ctx.cli()
        .args(["clean", "30", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No player data unmodified for 30 day(s)"));

    assert!(fresh.exists());
}
