// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `tiercheck report` and the saved latest report.

use crate::prelude::*;

#[test]
fn report_without_prior_run_explains() {
    let project = Project::empty();
    project
        .cmd(&["report"])
        .assert()
        .success()
        .stderr(predicates::str::contains("No report found"));
}

#[test]
fn check_saves_latest_report() {
    let project = Project::with_config("[enforcement]\ntiming = \"warn\"\n");
    project.results(r#"{"tests": [{"id": "t", "tier": "small", "elapsed": 2.0}]}"#);

    let out = project.check(&[]);
    assert_eq!(out.code, Some(0));
    assert!(project.path().join(".tiercheck/latest.json").exists());

    let report: RunOutput = project.cmd(&["report"]).output().unwrap().into();
    assert_eq!(report.code, Some(0));
    let json = report.json();
    assert_eq!(json["report"]["verdict"], "warn");
    assert!(json["updated"].is_string());
    assert!(json["results"].as_str().unwrap().ends_with("results.json"));
}

#[test]
fn no_save_skips_latest_report() {
    let project = Project::empty();
    project.results(r#"{"tests": []}"#);

    let out = project.check(&["--no-save"]);
    assert_eq!(out.code, Some(0));
    assert!(!project.path().join(".tiercheck").exists());
}
