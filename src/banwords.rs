//! # Banwords Module
//!
//! Banned-word list decoding and tracked-file scanning.
//!
//! The word list ships base64-encoded so the banned words never appear as
//! plain text in the repository that enforces them. Decoded, it is one word
//! per line; blank lines and `#` comments are ignored. The list compiles to
//! a single case-insensitive whole-word alternation that is run over every
//! line of every filtered file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::{Regex, RegexBuilder};
use tracing::{debug, error, info, warn};

use crate::error::RepolintError;
use crate::git::{self, FileLister};
use crate::output;
use crate::paths;

/// A compiled banned-word list.
///
/// An empty list (all lines blank or comments) compiles to no pattern at
/// all rather than the malformed alternation `\b()\b`; scanning with it
/// finds nothing.
#[derive(Debug)]
pub struct BanList {
  pattern: Option<Regex>,
}

impl BanList {
  /// Load and decode a base64-encoded banned-word file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, or if its content is not
  /// valid base64 over UTF-8 text. Decode failures are fatal: a corrupt ban
  /// file means the scan cannot be trusted.
  pub fn load(path: &Path) -> Result<Self> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read banned-word file: {}", path.display()))?;

    // The encoder may wrap lines; strip all ASCII whitespace before decoding.
    let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let decoded = BASE64.decode(compact.as_bytes()).map_err(|e| RepolintError::BanfileDecode {
      path: path.to_path_buf(),
      message: e.to_string(),
    })?;

    let text = String::from_utf8(decoded).map_err(|e| RepolintError::BanfileDecode {
      path: path.to_path_buf(),
      message: e.to_string(),
    })?;

    Self::from_text(&text)
  }

  /// Compile a banned-word list from decoded text.
  pub fn from_text(text: &str) -> Result<Self> {
    let words: Vec<String> = text
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty() && !line.starts_with('#'))
      .map(regex::escape)
      .collect();

    if words.is_empty() {
      debug!("banned-word list is empty; nothing will match");
      return Ok(Self { pattern: None });
    }

    let pattern = RegexBuilder::new(&format!(r"\b({})\b", words.join("|")))
      .case_insensitive(true)
      .build()
      .context("failed to compile banned-word pattern")?;

    Ok(Self {
      pattern: Some(pattern),
    })
  }

  /// Number of words in the compiled list.
  pub fn is_empty(&self) -> bool {
    self.pattern.is_none()
  }

  /// Scan one file, logging a diagnostic per matching line.
  ///
  /// The returned count is the number of distinct banned words found per
  /// line, summed across lines; repeated occurrences of the same word on one
  /// line count once. This exact semantic drives the exit status, so it is
  /// preserved rather than a raw occurrence count.
  ///
  /// Files whose bytes are not valid UTF-8 are scanned as empty content:
  /// binary files in the listing should not fail the whole run. Genuine I/O
  /// errors still propagate.
  pub fn scan_file(&self, top: &Path, file: &str, show: bool) -> Result<usize> {
    let Some(pattern) = &self.pattern else {
      return Ok(0);
    };

    let path = top.join(file);
    let bytes = fs::read(&path).with_context(|| format!("failed to read file: {}", path.display()))?;
    let text = match String::from_utf8(bytes) {
      Ok(text) => text,
      Err(_) => {
        debug!("skipping {}: not valid UTF-8 text", path.display());
        String::new()
      }
    };

    let mut count = 0;
    for (idx, line) in text.lines().enumerate() {
      // Distinct matches in first-occurrence order, case preserved as found.
      let mut matches: Vec<&str> = Vec::new();
      for m in pattern.find_iter(line) {
        if !matches.contains(&m.as_str()) {
          matches.push(m.as_str());
        }
      }

      if !matches.is_empty() {
        let shown = if show {
          matches.join(", ")
        } else {
          "<hidden>".to_string()
        };
        error!(
          "found {} banned word(s)\n{}:{}: {}",
          matches.len(),
          path.display(),
          idx + 1,
          shown
        );
        count += matches.len();
      }
    }

    Ok(count)
  }
}

/// Options for one banword scan run.
pub struct ScanOptions {
  /// Root directory for resolving relative file operations
  pub top: PathBuf,
  /// Subdirectories to list tracked files under
  pub dirs: Vec<String>,
  /// Include glob patterns
  pub includes: Vec<String>,
  /// Exclude glob patterns
  pub excludes: Vec<String>,
  /// Path to the base64-encoded banned-word file
  pub ban_file: PathBuf,
  /// Reveal matched words in diagnostics instead of redacting them
  pub show: bool,
}

/// Run a full scan: list, filter, scan each file, aggregate.
///
/// Returns `true` when the scan is clean (including the "no files matched"
/// case) and `false` when banned words were found.
pub fn run_scan(lister: &dyn FileLister, opts: &ScanOptions) -> Result<bool> {
  let files = git::tracked_files(lister, &opts.top, &opts.dirs)?;
  let files = paths::filter_paths(&files, &opts.includes, &opts.excludes)?;

  if files.is_empty() {
    warn!("no files found");
    output::print_skipped("No files matched, nothing to scan");
    return Ok(true);
  }

  let banlist = BanList::load(&opts.ban_file)?;

  let mut total = 0;
  for file in &files {
    total += banlist.scan_file(&opts.top, file, opts.show)?;
  }

  if total > 0 {
    let suffix = if opts.show {
      ""
    } else {
      ", run with --show to see the actual words"
    };
    error!("found {} banned word(s) in {} files{}", total, files.len(), suffix);
    output::print_failure(&format!("Found {} banned word(s) in {} files", total, files.len()));
    return Ok(false);
  }

  info!("checked {} files", files.len());
  output::print_success(&format!("Checked {} files", files.len()));
  Ok(true)
}
