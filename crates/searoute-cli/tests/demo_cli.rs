use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn demo_shows_route_before_and_after_detour() {
    cargo_bin_cmd!("searoute")
        .env("RUST_LOG", "error")
        .arg("--format")
        .arg("compact")
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Initial route considering fuel, speed and weather:\nB -> D (5 h, fuel 15.00)\n",
        ))
        .stdout(predicate::str::contains(
            "Updated route considering fuel, speed and weather:\nB -> A -> C -> D (12 h, fuel 5.00)\n",
        ));
}

#[test]
fn demo_with_tiny_budget_fails() {
    cargo_bin_cmd!("searoute")
        .env("RUST_LOG", "error")
        .arg("demo")
        .arg("--fuel-budget")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "initial route could not be planned",
        ));
}
