//! Behavioral specs for `torq --actions`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > --actions lists every action in order, then exits without running
#[test]
fn actions_lists_every_action_in_order() {
    let output = torq_cmd().arg("--actions").output().expect("command should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let names = ["Black:", "SingleSpace:", "HeaderCheck:", "REPLTest:", "Flake:"];
    let positions: Vec<usize> = names
        .iter()
        .map(|name| stdout.find(name).unwrap_or_else(|| panic!("{name} missing:\n{stdout}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order:\n{stdout}");
    assert!(stdout.contains("    Runs the Flake8 Python linter\n"));
}

/// > --actions does not touch the target
#[test]
fn actions_ignores_target() {
    let project = Project::from_fixture("sample");
    project
        .torq()
        .args(["--actions", "."])
        .assert()
        .success()
        .stdout(predicates::str::contains("Single spaced").not());
    assert_eq!(project.read("bad.py"), "import os\n\n\nprint(os.name)\n");
}
