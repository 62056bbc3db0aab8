use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn uuid_rejects_keys_that_escape_the_world() {
    let ctx = TestContext::new();
    std::fs::write(ctx.server_dir().join("server.properties"), "online-mode=true\n").unwrap();

    ctx.cli()
        .args(["uuid", "../../server.properties"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid player key"));

    assert!(ctx.server_dir().join("server.properties").exists());
}
