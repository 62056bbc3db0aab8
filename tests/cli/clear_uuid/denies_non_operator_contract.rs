use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn uuid_requires_operator_permission() {
    let ctx = TestContext::new();
    let dat = ctx.write_world_file("playerdata/abc-123.dat");

    ctx.cli()
        .args(["--permission-level", "2", "uuid", "abc-123"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("You do not have permission to run this command"));

    assert!(dat.exists(), "data must survive a denied command");
}
