//! # Paths Module
//!
//! Include/exclude glob filtering over the tracked-file listing.
//!
//! Matching uses path-segment semantics: a relative pattern is matched
//! against the trailing segments of the path, one pattern segment per path
//! segment, with `*` never crossing a `/`. So `*.py` matches `src/a.py` and
//! `foo/*.py` matches `src/foo/a.py`, but `*.py` does not match `a.pyc`.

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
  case_sensitive: true,
  require_literal_separator: true,
  require_literal_leading_dot: false,
};

/// A compiled glob pattern with its segment count.
struct SegmentPattern {
  pattern: Pattern,
  segments: usize,
}

impl SegmentPattern {
  fn compile(raw: &str) -> Result<Self> {
    let pattern = Pattern::new(raw).with_context(|| format!("invalid glob pattern '{raw}'"))?;
    Ok(Self {
      pattern,
      segments: raw.split('/').count(),
    })
  }

  /// Match against the trailing `self.segments` path segments.
  fn matches(&self, path: &str) -> bool {
    let parts: Vec<&str> = path.split('/').collect();
    if self.segments > parts.len() {
      return false;
    }
    let tail = parts[parts.len() - self.segments..].join("/");
    self.pattern.matches_with(&tail, MATCH_OPTIONS)
  }
}

/// Filters `files`, keeping a path iff it matches at least one include
/// pattern and no exclude pattern.
///
/// The filter is a pure function of its inputs and preserves input order.
/// An empty include list keeps nothing; callers default to `*`.
///
/// # Errors
///
/// Returns an error if any pattern fails to compile.
pub fn filter_paths(files: &[String], includes: &[String], excludes: &[String]) -> Result<Vec<String>> {
  let includes = compile_patterns(includes)?;
  let excludes = compile_patterns(excludes)?;

  Ok(
    files
      .iter()
      .filter(|path| {
        includes.iter().any(|p| p.matches(path)) && !excludes.iter().any(|p| p.matches(path))
      })
      .cloned()
      .collect(),
  )
}

fn compile_patterns(raw: &[String]) -> Result<Vec<SegmentPattern>> {
  raw.iter().map(|p| SegmentPattern::compile(p)).collect()
}
