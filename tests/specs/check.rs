// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `tiercheck check`.

use crate::prelude::*;

const SLOW_SMALL: &str = r#"{"tests": [
  {"id": "CartTest#addsItem", "tier": "small", "elapsed": 0.2},
  {"id": "CartTest#checkout", "tier": "SmallTest", "elapsed": 1.5}
]}"#;

const NETWORK_SMALL: &str = r#"{"tests": [
  {"id": "ApiTest#fetch", "tier": "small", "elapsed": 0.1,
   "events": [{"capability": "network", "detail": "connect 10.0.0.1:443"}]},
  {"id": "DbTest#query", "tier": "medium", "elapsed": 2.0,
   "events": [{"capability": "filesystem", "detail": "open /tmp/x"}]}
]}"#;

#[test]
fn clean_run_passes_with_default_modes() {
    let project = Project::empty();
    project.results(SLOW_SMALL);

    // Every domain defaults to off, so even the slow test is not surfaced.
    let out = project.check(&[]);
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert_eq!(out.verdict(), "pass");
    assert!(out.json()["domains"].as_array().unwrap().is_empty());
}

#[test]
fn strict_timing_fails_on_slow_small_test() {
    let project = Project::with_config("[enforcement]\ntiming = \"STRICT\"\n");
    project.results(SLOW_SMALL);

    let out = project.check(&[]);
    assert_eq!(out.code, Some(1));
    assert_eq!(out.verdict(), "fail");

    let violations = out.violations("timing");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["kind"], "timing_exceeded");
    assert_eq!(violations[0]["test"], "CartTest#checkout");
    assert_eq!(violations[0]["tier"], "small");
}

#[test]
fn warn_timing_surfaces_but_exits_zero() {
    let project = Project::with_config("[enforcement]\ntiming = \"warn\"\n");
    project.results(SLOW_SMALL);

    let out = project.check(&[]);
    assert_eq!(out.code, Some(0));
    assert_eq!(out.verdict(), "warn");
    assert_eq!(out.violations("timing").len(), 1);
}

#[test]
fn hermeticity_flags_network_in_small_but_not_filesystem_in_medium() {
    let project = Project::with_config("[enforcement]\nhermeticity = \"STRICT\"\n");
    project.results(NETWORK_SMALL);

    let out = project.check(&[]);
    assert_eq!(out.code, Some(1));
    let violations = out.violations("hermeticity");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["test"], "ApiTest#fetch");
    assert_eq!(violations[0]["measured"]["value"], "network");
}

#[test]
fn distribution_below_minimum_fails() {
    let project = Project::with_config(
        r#"
[enforcement]
distribution = "STRICT"

[distribution]
small = { min = "70%" }
"#,
    );
    project.results(
        r#"{"tests": [
          {"id": "a", "tier": "small", "elapsed": 0.1},
          {"id": "b", "tier": "medium", "elapsed": 0.1}
        ]}"#,
    );

    let out = project.check(&[]);
    assert_eq!(out.code, Some(1));
    let violations = out.violations("distribution");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["kind"], "distribution_imbalance");
    assert!(violations[0].get("test").is_none());
}

#[test]
fn off_domain_is_ignored_while_other_domain_fails() {
    let project = Project::with_config(
        "[enforcement]\ntiming = \"OFF\"\nhermeticity = \"STRICT\"\n",
    );
    project.results(
        r#"{"tests": [
          {"id": "SlowNet", "tier": "small", "elapsed": 3.0,
           "events": [{"capability": "network"}]}
        ]}"#,
    );

    let out = project.check(&[]);
    assert_eq!(out.code, Some(1));
    assert!(out.violations("timing").is_empty());
    assert_eq!(out.violations("hermeticity").len(), 1);
}

#[test]
fn flag_overrides_config_mode() {
    let project = Project::with_config("[enforcement]\ntiming = \"STRICT\"\n");
    project.results(SLOW_SMALL);

    let out = project.check(&["--timing-mode", "warn"]);
    assert_eq!(out.code, Some(0));
    assert_eq!(out.verdict(), "warn");
}

#[test]
fn env_var_overrides_config_mode() {
    let project = Project::empty();
    project.results(SLOW_SMALL);

    project
        .cmd(&["check", "results.json"])
        .env("TIERCHECK_TIMING_MODE", "strict")
        .assert()
        .code(1);
}

#[test]
fn invalid_mode_is_config_error() {
    let project = Project::with_config("[enforcement]\ntiming = \"LOUD\"\n");
    project.results(SLOW_SMALL);

    project
        .cmd(&["check", "results.json"])
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("LOUD").and(predicates::str::contains("timing")));
}

#[test]
fn invalid_distribution_range_is_config_error() {
    let project = Project::with_config("[distribution]\nsmall = { min = 0.9, max = 0.5 }\n");
    project.results(SLOW_SMALL);

    project
        .cmd(&["check", "results.json"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("small"));
}

#[test]
fn unknown_config_key_is_config_error() {
    let project = Project::with_config("[enforcement]\ntimng = \"STRICT\"\n");
    project.results(SLOW_SMALL);

    project.cmd(&["check", "results.json"]).assert().code(2);
}

#[test]
fn unknown_tier_marker_is_internal_error() {
    let project = Project::empty();
    project.results(r#"{"tests": [{"id": "x", "tier": "huge", "elapsed": 0.1}]}"#);

    project
        .cmd(&["check", "results.json"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("huge"));
}

#[test]
fn missing_results_file_is_internal_error() {
    let project = Project::empty();

    project
        .cmd(&["check", "results.json"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("failed to load results"));
}

#[test]
fn explicit_config_flag_is_used() {
    let project = Project::empty();
    project.file("ci/strict.toml", "[enforcement]\ntiming = \"STRICT\"\n");
    project.results(SLOW_SMALL);

    let out = project.check(&["-C", "ci/strict.toml"]);
    assert_eq!(out.code, Some(1));
}

#[test]
fn compact_output_is_single_line() {
    let project = Project::empty();
    project.results(SLOW_SMALL);

    let out = project.check(&["--compact"]);
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout.trim_end().lines().count(), 1);
}

#[test]
fn mixed_suite_fixture_fails_strict_domains() {
    let out: RunOutput = tiercheck_cmd()
        .current_dir(fixture("mixed-suite"))
        .args(["check", "results.json", "--no-save"])
        .output()
        .unwrap()
        .into();

    assert_eq!(out.code, Some(1));
    assert_eq!(out.verdict(), "fail");
    assert_eq!(out.violations("timing").len(), 1);
    assert_eq!(out.violations("hermeticity").len(), 1);
    // Distribution is warn-only in the fixture.
    assert_eq!(out.violations("distribution").len(), 1);
    let domains = out.json()["domains"].clone();
    let order: Vec<_> = domains.as_array().unwrap().iter().map(|d| d["domain"].clone()).collect();
    assert_eq!(order, vec!["timing", "hermeticity", "distribution"]);
}
