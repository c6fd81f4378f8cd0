use assert_cmd::Command;
use delorean_testing::TestWorld;
use predicates::prelude::*;

#[allow(deprecated)]
fn delorean(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("delorean").expect("delorean binary");
    world.configure_command(&mut cmd);
    cmd
}

#[test]
fn test_fetch_requires_token() {
    let world = TestWorld::new();

    delorean(&world)
        .args(["fetch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no Toggl API token"));
}

#[test]
fn test_fetch_rejects_short_saved_token() {
    let world = TestWorld::new().with_config("api_token = \"abc\"\n");

    delorean(&world)
        .args(["fetch", "--since", "2025-11-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 32 characters"));
}

#[test]
fn test_fetch_rejects_bad_date() {
    let world = TestWorld::new();

    delorean(&world)
        .args(["fetch", "--since", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--since"));
}
