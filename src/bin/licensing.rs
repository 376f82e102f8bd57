//! # licensing
//!
//! Check or apply the standard license header on git-tracked source files.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use repolint::cli::{CUSTOM_STYLES, CommonArgs};
use repolint::config::load_config;
use repolint::git::GitLister;
use repolint::license::{LicenseOptions, comment_map, run_license};
use repolint::logging::init_tracing;

/// Default license file name, resolved under `--top`.
const DEFAULT_LICENSE_FILE: &str = "LICENSE";

const DEFAULT_DIRS: &[&str] = &["src"];
const DEFAULT_INCLUDES: &[&str] = &["*.py", "*.c", "*.h", "*.cpp", "*.hpp", "*.rs"];

#[derive(Parser, Debug)]
#[command(
  name = "licensing",
  version,
  about = "Check/apply LICENSE file to sources",
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Verify license headers under src/
  licensing

  # Insert missing headers
  licensing --apply

  # Check then insert in one invocation
  licensing --check --apply

  # Use a different license file and source tree
  licensing --license COPYING --dirs lib --includes '*.c' '*.h'
"
)]
struct Cli {
  /// License file to use (default: LICENSE under --top)
  #[arg(long, value_name = "FILE")]
  license: Option<PathBuf>,

  #[command(flatten)]
  common: CommonArgs,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  init_tracing(cli.common.quiet, cli.common.verbose);
  cli.common.colors.apply();

  let top = cli.common.resolve_top();
  let config = load_config(cli.common.config.as_deref(), &top, cli.common.no_config)?;
  let comments = comment_map(config.as_ref());
  let tool_config = config.map(|c| c.licensing).unwrap_or_default();

  let (dirs, includes, excludes) = cli.common.resolve_listing(&tool_config, DEFAULT_DIRS, DEFAULT_INCLUDES);

  let opts = LicenseOptions {
    license_file: cli.license.unwrap_or_else(|| top.join(DEFAULT_LICENSE_FILE)),
    top,
    dirs,
    includes,
    excludes,
    check: cli.common.check_enabled(),
    apply: cli.common.apply_enabled(),
  };

  let clean = run_license(&GitLister, &opts, comments)?;
  if !clean {
    process::exit(1);
  }

  Ok(())
}
