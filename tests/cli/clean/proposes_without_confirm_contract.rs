use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn clean_without_confirm_only_proposes() {
    let ctx = TestContext::new();
    let stale = ctx.write_aged_world_file("playerdata/abc-123.dat", 45);

    ctx.cli()
        .args(["clean", "30"])
        .assert()
        .success()
        .stderr(predicate::str::contains("!!cpd clean 30 confirm"));

    assert!(stale.exists(), "a proposal must not delete anything");
}
