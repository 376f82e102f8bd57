//! # License Module
//!
//! License header rendering, checking, and insertion.
//!
//! A header is the license text with every line prefixed by the comment
//! string for the file's suffix, trailing whitespace stripped. Rendered
//! headers are memoized per suffix for the lifetime of one run. Files whose
//! first line is a `#!` loader directive keep that line first; the header
//! goes immediately after it.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::RepolintError;
use crate::git::{self, FileLister};
use crate::output;
use crate::paths;

/// First-line marker that must stay ahead of any inserted header.
pub const LOADER: &str = "#!";

/// Sentinel logged when the file ends before the header does.
const EOF_SENTINEL: &str = "<EOF>";

/// Built-in suffix to comment-prefix mapping.
pub fn builtin_comments() -> HashMap<String, String> {
  let entries = [
    ("py", "# "),
    ("c", "// "),
    ("h", "// "),
    ("cpp", "// "),
    ("hpp", "// "),
    ("rs", "// "),
  ];
  entries
    .iter()
    .map(|(suffix, prefix)| ((*suffix).to_string(), (*prefix).to_string()))
    .collect()
}

/// Merge config-file overrides over the built-in comment map.
pub fn comment_map(config: Option<&Config>) -> HashMap<String, String> {
  let mut comments = builtin_comments();
  if let Some(config) = config {
    for (suffix, prefix) in &config.comments {
      comments.insert(suffix.clone(), prefix.clone());
    }
  }
  comments
}

/// Checks and applies license headers for one run.
///
/// Owns the per-run header memo: rendered headers are cached by suffix so
/// repeated suffixes reuse the rendered lines instead of re-reading the
/// license file.
pub struct LicenseTool {
  license_file: PathBuf,
  comments: HashMap<String, String>,
  headers: HashMap<String, Vec<String>>,
}

impl LicenseTool {
  pub fn new(license_file: PathBuf, comments: HashMap<String, String>) -> Self {
    Self {
      license_file,
      comments,
      headers: HashMap::new(),
    }
  }

  /// Comment prefix for a file, or the fatal unknown-suffix error.
  ///
  /// An unmapped suffix aborts the whole run rather than skipping the file:
  /// a silently unlicensable file would defeat the check.
  fn comment_for(&self, suffix: &str, path: &Path) -> Result<String> {
    self.comments.get(suffix).cloned().ok_or_else(|| {
      RepolintError::UnknownSuffix {
        suffix: suffix.to_string(),
        path: path.to_path_buf(),
      }
      .into()
    })
  }

  /// The rendered header for a suffix, rendered on first use.
  fn header(&mut self, suffix: &str, path: &Path) -> Result<&[String]> {
    let comment = self.comment_for(suffix, path)?;

    match self.headers.entry(suffix.to_string()) {
      Entry::Occupied(entry) => Ok(entry.into_mut().as_slice()),
      Entry::Vacant(entry) => {
        debug!("rendering license header for suffix '{suffix}'");
        let text = fs::read_to_string(&self.license_file)
          .with_context(|| format!("failed to read license file: {}", self.license_file.display()))?;
        let rendered: Vec<String> = text
          .lines()
          .map(|line| format!("{comment}{line}").trim_end().to_string())
          .collect();
        Ok(entry.insert(rendered).as_slice())
      }
    }
  }

  /// Check that `file` starts with the rendered header for its suffix.
  ///
  /// A leading loader line is skipped for comparison purposes, with line
  /// numbering offset accordingly. The first mismatch (premature EOF is
  /// compared as `<EOF>`) is logged with expected and actual content and
  /// fails the file; remaining header lines are not reported.
  pub fn check_file(&mut self, top: &Path, file: &str) -> Result<bool> {
    let path = top.join(file);
    let suffix = file_suffix(&path);
    let header = self.header(&suffix, &path)?;

    let content = fs::read_to_string(&path).with_context(|| format!("failed to read file: {}", path.display()))?;
    let mut lines = content.lines();

    let mut start = 1;
    let mut first = lines.next();
    if let Some(line) = first
      && line.starts_with(LOADER)
    {
      start = 2;
      first = lines.next();
    }

    let mut actual_lines = first.into_iter().chain(lines);
    for (idx, expected) in header.iter().enumerate() {
      let actual = actual_lines.next();
      if actual != Some(expected.as_str()) {
        error!(
          "license header mismatch\n{}:{}:\n expect: {}\n actual: {}",
          path.display(),
          idx + start,
          expected,
          actual.unwrap_or(EOF_SENTINEL)
        );
        return Ok(false);
      }
    }

    Ok(true)
  }

  /// Insert the header into `file` unless it already looks licensed.
  ///
  /// A file is assumed licensed when any of its lines starts with the
  /// suffix's comment prefix and contains `Copyright`. Otherwise the header
  /// is spliced after a preserved loader line (or at the top) and the file
  /// is rewritten atomically.
  ///
  /// Returns `true` if the file was modified.
  pub fn apply_file(&mut self, top: &Path, file: &str) -> Result<bool> {
    let path = top.join(file);
    let suffix = file_suffix(&path);
    let comment = self.comment_for(&suffix, &path)?;
    let header = self.header(&suffix, &path)?;

    let content = fs::read_to_string(&path).with_context(|| format!("failed to read file: {}", path.display()))?;
    let in_lines: Vec<&str> = content.lines().collect();

    if in_lines
      .iter()
      .any(|line| line.starts_with(comment.as_str()) && line.contains("Copyright"))
    {
      debug!("assuming file already licensed: {}", path.display());
      return Ok(false);
    }

    let mut out_lines: Vec<&str> = Vec::with_capacity(in_lines.len() + header.len() + 1);
    let mut rest: &[&str] = &in_lines;
    if let Some((loader, tail)) = in_lines.split_first()
      && loader.starts_with(LOADER)
    {
      out_lines.push(*loader);
      rest = tail;
    }
    out_lines.extend(header.iter().map(String::as_str));
    out_lines.extend_from_slice(rest);

    let mut new_content = out_lines.join("\n");
    new_content.push('\n');
    write_atomic(&path, &new_content)?;

    debug!("inserted license header: {}", path.display());
    Ok(true)
  }
}

/// File suffix without the leading dot; empty for extensionless files.
fn file_suffix(path: &Path) -> String {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .unwrap_or("")
    .to_string()
}

/// Write `content` to a temporary file next to `path`, then rename it over
/// the original. The original is only replaced once the full new content is
/// on disk, so a crash mid-write cannot corrupt it.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
  let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
  let mut tmp = NamedTempFile::new_in(dir).with_context(|| format!("failed to create temp file in {}", dir.display()))?;

  tmp
    .write_all(content.as_bytes())
    .with_context(|| format!("failed to write temp file for {}", path.display()))?;

  tmp
    .persist(path)
    .map_err(|e| e.error)
    .with_context(|| format!("failed to replace {}", path.display()))?;

  Ok(())
}

/// Options for one license run.
pub struct LicenseOptions {
  /// Root directory for resolving relative file operations
  pub top: PathBuf,
  /// Subdirectories to list tracked files under
  pub dirs: Vec<String>,
  /// Include glob patterns
  pub includes: Vec<String>,
  /// Exclude glob patterns
  pub excludes: Vec<String>,
  /// Path to the plain-text license file
  pub license_file: PathBuf,
  /// Verify headers
  pub check: bool,
  /// Insert missing headers
  pub apply: bool,
}

/// Run the license tool: list, filter, then check and/or apply per flags.
///
/// Check runs first; a failed check stops the run before any apply pass.
/// Returns `true` when the run is clean (including "no files matched").
pub fn run_license(lister: &dyn FileLister, opts: &LicenseOptions, comments: HashMap<String, String>) -> Result<bool> {
  let files = git::tracked_files(lister, &opts.top, &opts.dirs)?;
  let files = paths::filter_paths(&files, &opts.includes, &opts.excludes)?;

  if files.is_empty() {
    warn!("no files found");
    output::print_skipped("No files matched, nothing to do");
    return Ok(true);
  }

  let mut tool = LicenseTool::new(opts.license_file.clone(), comments);

  if opts.check {
    let mut failed = 0;
    for file in &files {
      if !tool.check_file(&opts.top, file)? {
        failed += 1;
      }
    }

    if failed > 0 {
      error!("checked {} files: {} errors", files.len(), failed);
      output::print_failure(&format!("Checked {} files: {} errors", files.len(), failed));
      return Ok(false);
    }
    info!("checked {} files", files.len());
    output::print_success(&format!("Checked {} files", files.len()));
  }

  if opts.apply {
    let mut changed = 0;
    for file in &files {
      if tool.apply_file(&opts.top, file)? {
        changed += 1;
      }
    }
    info!("applied {} files: {} changed", files.len(), changed);
    output::print_success(&format!("Applied {} files: {} changed", files.len(), changed));
  }

  Ok(true)
}
