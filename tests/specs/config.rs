//! Behavioral specs for torq.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > An invalid config file is a configuration error (exit 2)
#[test]
fn invalid_config_exits_with_two() {
    let project = Project::empty();
    project.config("line_lenght = 80\n");
    project.file("a.py", "# a.py\n");

    project
        .torq()
        .arg(".")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid config"));
}

/// > Config is discovered from the target upward
#[test]
fn config_is_discovered_from_target() {
    let project = Project::empty();
    project.config(
        r#"
line_length = 99

[tools]
formatter = ["echo"]
linter = ["true"]
doctest = ["true"]
"#,
    );
    project.file("src/a.py", "# a.py\n");

    project
        .torq()
        .args(["--quiet", "src"])
        .assert()
        .success()
        .stdout(predicates::str::contains("src -l 99"));
}

/// > -C points at a config outside the search path
#[test]
fn explicit_config_flag_wins() {
    let project = Project::with_fake_tools();
    project.file(
        "ci/strict.toml",
        r###"
comment_marker = "##"

[tools]
formatter = ["true"]
linter = ["true"]
doctest = ["true"]
"###,
    );
    project.file("a.py", "# a.py\n");

    project
        .torq()
        .args(["--quiet", "-C", "ci/strict.toml", "a.py"])
        .assert()
        .success()
        .stdout(predicates::str::contains("File header missing for a.py"));
}

/// > TORQ_CONFIG selects the config file
#[test]
fn config_env_var_is_honored() {
    let project = Project::with_fake_tools();
    project.file(
        "other.toml",
        r#"
[tools]
formatter = ["echo", "from-env"]
linter = ["true"]
doctest = ["true"]
"#,
    );
    project.file("a.py", "# a.py\n");

    project
        .torq()
        .env("TORQ_CONFIG", "other.toml")
        .args(["--quiet", "a.py"])
        .assert()
        .success()
        .stdout(predicates::str::contains("from-env a.py -l 80"));
}
