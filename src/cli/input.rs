//! Input path expansion for the CLI
//!
//! Arguments may be plain paths or glob patterns. Matches for a pattern are
//! sorted; a pattern with no matches (or an invalid pattern) is kept as a
//! literal path so the reader reports it as missing.

use std::path::PathBuf;
use tracing::{debug, warn};

/// Expand `patterns` into file paths, preserving argument order
pub fn expand_file_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref().trim();
        if pattern.is_empty() {
            continue;
        }

        let mut matches: Vec<PathBuf> = match glob::glob(pattern) {
            Ok(entries) => entries
                .filter_map(|entry| match entry {
                    Ok(path) => Some(path),
                    Err(e) => {
                        warn!("Skipping unreadable match for '{}': {}", pattern, e);
                        None
                    }
                })
                .collect(),
            Err(e) => {
                debug!("'{}' is not a valid glob pattern ({}), using as path", pattern, e);
                Vec::new()
            }
        };

        if matches.is_empty() {
            paths.push(PathBuf::from(pattern));
        } else {
            matches.sort();
            debug!("Pattern '{}' matched {} file(s)", pattern, matches.len());
            paths.extend(matches);
        }
    }

    paths
}
