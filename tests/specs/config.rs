// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `tiercheck config`.

use crate::prelude::*;

#[test]
fn no_config_file_resolves_everything_off() {
    let project = Project::empty();
    let out: RunOutput = project.cmd(&["config"]).output().unwrap().into();

    assert_eq!(out.code, Some(0));
    let json = out.json();
    assert!(json["config"].is_null());
    assert_eq!(json["modes"]["timing"], "off");
    assert_eq!(json["modes"]["hermeticity"], "off");
    assert_eq!(json["modes"]["distribution"], "off");
}

#[test]
fn resolves_modes_and_constraints_from_file() {
    let project = Project::with_config(
        r#"
version = 1

[enforcement]
timing = "warn"
hermeticity = " Strict "

[distribution]
small = { min = 0.7 }
large = { max = "10%" }
"#,
    );
    let out: RunOutput = project.cmd(&["config"]).output().unwrap().into();

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    let json = out.json();
    assert!(json["config"].as_str().unwrap().ends_with("tiercheck.toml"));
    assert_eq!(json["modes"]["timing"], "warn");
    assert_eq!(json["modes"]["hermeticity"], "strict");
    assert_eq!(json["modes"]["distribution"], "off");
    assert_eq!(json["distribution"]["small"]["min"], 0.7);
    assert_eq!(json["distribution"]["large"]["max"], 0.1);
}

#[test]
fn config_is_found_from_subdirectory() {
    let project = Project::with_config("[enforcement]\ntiming = \"STRICT\"\n");
    project.file("module/src/.keep", "");

    let out: RunOutput = tiercheck_cmd()
        .current_dir(project.path().join("module/src"))
        .arg("config")
        .output()
        .unwrap()
        .into();

    assert_eq!(out.code, Some(0));
    assert_eq!(out.json()["modes"]["timing"], "strict");
}

#[test]
fn unsupported_version_is_config_error() {
    let project = Project::with_config("version = 2\n");
    project
        .cmd(&["config"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

#[test]
fn override_flag_is_validated() {
    let project = Project::empty();
    project
        .cmd(&["config", "--distribution-mode", "sometimes"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("sometimes"));
}
