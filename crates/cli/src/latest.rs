// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Latest report cache.
//!
//! `.tiercheck/latest.json` keeps the most recent finalized report so that
//! `tiercheck report` can hand it to a consumer without re-running enforcement.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::output::write_json_file;
use crate::report::SuiteRunReport;

/// A finalized report plus where and when it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestReport {
    /// When the run was finalized (ISO 8601).
    pub updated: DateTime<Utc>,

    /// Results file the report was computed from.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub results: Option<PathBuf>,

    pub report: SuiteRunReport,
}

impl LatestReport {
    pub fn new(report: SuiteRunReport, results: Option<PathBuf>) -> Self {
        Self { updated: Utc::now(), results, report }
    }

    /// Save to `path`, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        write_json_file(path, self)
    }

    /// Load from `path`, returning `None` if no report was saved yet.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let latest = serde_json::from_str(&content)
            .with_context(|| format!("{} is not a saved report", path.display()))?;
        Ok(Some(latest))
    }
}

#[cfg(test)]
#[path = "latest_tests.rs"]
mod tests;
