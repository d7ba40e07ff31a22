use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::assets::{get_demo_cc_content, PROJECT_INCLUDES};

/// Location of the stub, relative to the working directory
pub const STUB_PATH: &str = "src/demo.cc";

/// Result of comparing the stub on disk with the bundled one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubStatus {
    UpToDate,
    Missing,
    /// Contents differ; lists project headers no longer included
    Stale { missing_includes: Vec<String> },
}

impl fmt::Display for StubStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpToDate => write!(f, "up to date"),
            Self::Missing => write!(f, "missing"),
            Self::Stale { missing_includes } if missing_includes.is_empty() => {
                write!(f, "stale")
            }
            Self::Stale { missing_includes } => {
                write!(f, "stale (missing {})", missing_includes.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StubSummary {
    pub path: String,
    pub bytes: usize,
    pub sha256: String,
    pub includes: Vec<String>,
}

pub fn stub_path(root: &Path) -> PathBuf {
    root.join(STUB_PATH)
}

/// Write the stub under `root`, truncating any previous contents.
///
/// The parent `src/` directory is never created: if it is absent the
/// write fails and nothing lands on disk.
pub fn write_stub(root: &Path) -> Result<PathBuf> {
    let path = stub_path(root);
    let contents = get_demo_cc_content();
    debug!(path = %path.display(), "writing stub file");

    fs::write(&path, contents)
        .with_context(|| format!("Failed to write stub file: {}", path.display()))?;

    info!(path = %path.display(), bytes = contents.len(), "stub file written");
    Ok(path)
}

/// Compare the stub under `root` with the bundled contents without writing anything
pub fn check_stub(root: &Path) -> Result<StubStatus> {
    let path = stub_path(root);
    let on_disk = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "stub file not found");
            return Ok(StubStatus::Missing);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read stub file: {}", path.display()));
        }
    };

    if on_disk == get_demo_cc_content().as_bytes() {
        debug!(path = %path.display(), "stub file matches");
        return Ok(StubStatus::UpToDate);
    }

    let missing_includes = missing_project_includes(&String::from_utf8_lossy(&on_disk))?;
    warn!(
        path = %path.display(),
        missing = missing_includes.len(),
        "stub file differs from generated contents"
    );
    Ok(StubStatus::Stale { missing_includes })
}

/// Describe the bundled stub without touching the filesystem
pub fn summarize_stub() -> StubSummary {
    let contents = get_demo_cc_content();
    let mut hasher = Sha256::new();
    hasher.update(contents.as_bytes());

    StubSummary {
        path: STUB_PATH.to_string(),
        bytes: contents.len(),
        sha256: format!("{:x}", hasher.finalize()),
        includes: PROJECT_INCLUDES.iter().map(|h| h.to_string()).collect(),
    }
}

fn missing_project_includes(source: &str) -> Result<Vec<String>> {
    let re = Regex::new(r#"(?m)^\s*#\s*include\s+"([^"]+)""#)
        .context("Failed to compile include pattern")?;
    let present: Vec<&str> = re
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    Ok(PROJECT_INCLUDES
        .iter()
        .filter(|header| !present.contains(*header))
        .map(|header| header.to_string())
        .collect())
}
