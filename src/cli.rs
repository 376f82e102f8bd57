//! # CLI Module
//!
//! Shared command-line surface for the two binaries. Both tools accept the
//! same skeleton of options; only the data-file flag (`--ban` vs
//! `--license`) and the redaction flag differ, and those live with each
//! binary.

use std::path::PathBuf;

use clap::Args;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

use crate::config::ToolConfig;
use crate::git;
use crate::logging::ColorMode;

/// Help styling shared by both binaries.
pub const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Options shared by both tools.
#[derive(Args, Debug)]
pub struct CommonArgs {
  /// Perform the mutating pass
  #[arg(long, overrides_with = "no_apply")]
  pub apply: bool,

  /// Do not perform the mutating pass (default)
  #[arg(long)]
  pub no_apply: bool,

  /// Perform the verification pass (default)
  #[arg(long, overrides_with = "no_check")]
  pub check: bool,

  /// Do not perform the verification pass
  #[arg(long)]
  pub no_check: bool,

  /// Top-level directory for resolving relative file operations
  /// (default: the enclosing git repository root, or `.`)
  #[arg(long, value_name = "DIR")]
  pub top: Option<PathBuf>,

  /// Subdirectories to scan
  #[arg(long, value_name = "DIR", num_args = 1..)]
  pub dirs: Option<Vec<String>>,

  /// Include glob patterns
  #[arg(long, value_name = "GLOB", num_args = 1..)]
  pub includes: Option<Vec<String>>,

  /// Exclude glob patterns
  #[arg(long, value_name = "GLOB", num_args = 1..)]
  pub excludes: Option<Vec<String>>,

  /// Path to config file (default: .repolint.toml under --top)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v debug, -vv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output
  #[arg(long, value_name = "WHEN", default_value_t = ColorMode::Auto, value_enum)]
  pub colors: ColorMode,
}

impl CommonArgs {
  /// Effective apply flag: off unless `--apply` survives its negation.
  pub const fn apply_enabled(&self) -> bool {
    self.apply
  }

  /// Effective check flag: on unless `--no-check` survives its negation.
  pub const fn check_enabled(&self) -> bool {
    self.check || !self.no_check
  }

  /// Resolve the top-level directory, defaulting to the enclosing git
  /// repository root.
  pub fn resolve_top(&self) -> PathBuf {
    self.top.clone().unwrap_or_else(git::discover_repo_root)
  }

  /// Resolve a listing option: CLI flag, then config default, then the
  /// tool's built-in default.
  pub fn resolve_list(cli: Option<&Vec<String>>, config: Option<&Vec<String>>, default: &[&str]) -> Vec<String> {
    if let Some(values) = cli {
      return values.clone();
    }
    if let Some(values) = config {
      return values.clone();
    }
    default.iter().map(|s| (*s).to_string()).collect()
  }

  /// Resolve dirs/includes/excludes for one tool against its config section.
  pub fn resolve_listing(
    &self,
    tool: &ToolConfig,
    default_dirs: &[&str],
    default_includes: &[&str],
  ) -> (Vec<String>, Vec<String>, Vec<String>) {
    let dirs = Self::resolve_list(self.dirs.as_ref(), tool.dirs.as_ref(), default_dirs);
    let includes = Self::resolve_list(self.includes.as_ref(), tool.includes.as_ref(), default_includes);
    let excludes = Self::resolve_list(self.excludes.as_ref(), tool.excludes.as_ref(), &[]);
    (dirs, includes, excludes)
  }
}
