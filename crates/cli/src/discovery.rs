// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the starting directory up to the git root looking for
//! `tiercheck.toml`, either directly in a directory or under its `.config/`.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Find the nearest config file at or above `start_dir`, stopping at the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidates = [dir.join(CONFIG_FILE), dir.join(".config").join(CONFIG_FILE)];
        if let Some(found) = candidates.into_iter().find(|p| p.is_file()) {
            return Some(found);
        }

        if dir.join(".git").exists() {
            return None;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
