//! # Git Module
//!
//! Tracked-file listing for the hygiene tools. "Tracked" is delegated to the
//! version-control index via `git ls-files`, so uncommitted untracked files
//! are invisible to both tools.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

use crate::error::RepolintError;

/// Narrow seam over "list tracked files under a path".
///
/// Both tools drive their runs through this trait so the orchestration can be
/// exercised against an in-memory fake without spawning subprocesses.
pub trait FileLister {
  /// List the tracked files under `dir`, relative to `top`.
  fn list_files(&self, top: &Path, dir: &str) -> Result<Vec<String>>;
}

/// Lister backed by a blocking `git ls-files` invocation per directory.
pub struct GitLister;

impl FileLister for GitLister {
  fn list_files(&self, top: &Path, dir: &str) -> Result<Vec<String>> {
    let output = Command::new("git")
      .args(["ls-files", dir])
      .current_dir(top)
      .output()
      .with_context(|| format!("failed to run git ls-files in {}", top.display()))?;

    if !output.status.success() {
      return Err(
        RepolintError::CommandFailed {
          command: format!("git ls-files {dir}"),
          stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
          stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into(),
      );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().map(str::to_string).collect())
  }
}

/// Returns the union of tracked files under `dirs`, deduplicated while
/// preserving first-seen order.
///
/// The result is immutable for the run: callers filter it and iterate, they
/// never extend it.
pub fn tracked_files(lister: &dyn FileLister, top: &Path, dirs: &[String]) -> Result<Vec<String>> {
  let mut seen = HashSet::new();
  let mut paths = Vec::new();

  for dir in dirs {
    for path in lister.list_files(top, dir)? {
      if seen.insert(path.clone()) {
        paths.push(path);
      }
    }
  }

  debug!("listed {} tracked files under {} dir(s)", paths.len(), dirs.len());
  Ok(paths)
}

/// Discover the enclosing git repository root for the default `--top`.
///
/// Falls back to the current directory when git is unavailable or the working
/// directory is not inside a repository.
pub fn discover_repo_root() -> PathBuf {
  let output = Command::new("git").args(["rev-parse", "--show-toplevel"]).output();

  match output {
    Ok(out) if out.status.success() => {
      let root = String::from_utf8_lossy(&out.stdout).trim().to_string();
      if root.is_empty() {
        PathBuf::from(".")
      } else {
        PathBuf::from(root)
      }
    }
    _ => PathBuf::from("."),
  }
}
