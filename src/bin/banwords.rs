//! # banwords
//!
//! Scan git-tracked source files for banned words.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use repolint::banwords::{ScanOptions, run_scan};
use repolint::cli::{CUSTOM_STYLES, CommonArgs};
use repolint::config::load_config;
use repolint::git::GitLister;
use repolint::logging::init_tracing;

/// Default banned-word file name, resolved under `--top`.
const DEFAULT_BAN_FILE: &str = "banwords.b64";

const DEFAULT_DIRS: &[&str] = &["."];
const DEFAULT_INCLUDES: &[&str] = &["*"];

#[derive(Parser, Debug)]
#[command(
  name = "banwords",
  version,
  about = "Scan git-tracked sources for banned words",
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Scan the whole repository with redacted diagnostics
  banwords

  # Reveal the matched words
  banwords --show

  # Scan only Python sources under src/, excluding tests
  banwords --dirs src --includes '*.py' --excludes 'test_*.py'
"
)]
struct Cli {
  /// Banned words base64 file (default: banwords.b64 under --top)
  #[arg(long, value_name = "FILE")]
  ban: Option<PathBuf>,

  /// Show banned words in diagnostics instead of redacting them
  #[arg(long, overrides_with = "no_show")]
  show: bool,

  /// Redact banned words in diagnostics (default)
  #[arg(long)]
  no_show: bool,

  #[command(flatten)]
  common: CommonArgs,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  init_tracing(cli.common.quiet, cli.common.verbose);
  cli.common.colors.apply();

  let top = cli.common.resolve_top();
  let config = load_config(cli.common.config.as_deref(), &top, cli.common.no_config)?;
  let tool_config = config.map(|c| c.banwords).unwrap_or_default();

  let (dirs, includes, excludes) = cli.common.resolve_listing(&tool_config, DEFAULT_DIRS, DEFAULT_INCLUDES);

  if cli.common.apply_enabled() {
    debug!("--apply has no effect for banned words; scanning only");
  }
  if !cli.common.check_enabled() {
    debug!("--no-check given; nothing to do");
    return Ok(());
  }

  let opts = ScanOptions {
    ban_file: cli.ban.unwrap_or_else(|| top.join(DEFAULT_BAN_FILE)),
    top,
    dirs,
    includes,
    excludes,
    show: cli.show,
  };

  let clean = run_scan(&GitLister, &opts)?;
  if !clean {
    process::exit(1);
  }

  Ok(())
}
