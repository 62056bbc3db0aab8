use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn console_runs_cpd_lines_in_order() {
    let ctx = TestContext::new();
    let stale = ctx.write_aged_world_file("playerdata/abc-123.dat", 10);
    let target = ctx.write_world_file("playerdata/def-456.dat");

    ctx.cli()
        .arg("console")
        .write_stdin(
            "<Steve> hello\n!!cpd uuid def-456\n!!cpd clean 7\n!!cpd clean 7 confirm\n!!cpd clean x\n",
        )
        .assert()
        .success()
        .stderr(predicate::str::contains("Cleared player data for UUID def-456"))
        .stderr(predicate::str::contains("!!cpd clean 7 confirm"))
        .stderr(predicate::str::contains("Invalid day count 'x'"));

    assert!(!target.exists());
    assert!(!stale.exists());
}

#[test]
fn console_replies_with_help_for_bare_prefix() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("console")
        .write_stdin("!!cpd\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("!!cpd playerid <playerid>"));
}

#[test]
fn console_survives_an_out_of_range_clean_proposal() {
    let ctx = TestContext::new();
    let first = ctx.write_world_file("playerdata/abc-123.dat");
    let last = ctx.write_world_file("playerdata/def-456.dat");

    ctx.cli()
        .arg("console")
        .write_stdin("!!cpd uuid abc-123\n!!cpd clean 4294967295\n!!cpd uuid def-456\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("before the beginning of time"))
        .stderr(predicate::str::contains("Cleared player data for UUID def-456"));

    assert!(!first.exists());
    assert!(!last.exists());
}
