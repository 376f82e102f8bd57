//! # Logging Module
//!
//! Tracing initialization and color mode handling for both binaries.
//!
//! Diagnostics go through `tracing` to stderr: per-violation findings at
//! ERROR, run summaries at INFO, the "no files" condition at WARN, and
//! skip/decision detail at DEBUG. Human-facing summary lines on stdout are
//! handled separately by the [`output`](crate::output) module.

use std::fmt;
use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Controls when colored output is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  /// Automatically determine whether to use colors based on TTY detection
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl fmt::Display for ColorMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Self::Auto => "auto",
      Self::Never => "never",
      Self::Always => "always",
    };
    write!(f, "{name}")
  }
}

impl ColorMode {
  /// Apply this color mode process-wide via the owo-colors override.
  pub fn apply(self) {
    match self {
      Self::Auto => owo_colors::unset_override(),
      Self::Never => owo_colors::set_override(false),
      Self::Always => owo_colors::set_override(true),
    }
  }
}

/// Initialize the tracing subscriber for structured logging to stderr.
///
/// Verbosity mapping: default INFO, `-v` DEBUG, `-vv` TRACE, `--quiet`
/// ERROR. An explicit `RUST_LOG` environment filter takes precedence.
pub fn init_tracing(quiet: bool, verbose: u8) {
  let default_level = if quiet {
    "error"
  } else {
    match verbose {
      0 => "info",
      1 => "debug",
      _ => "trace",
    }
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_ansi(std::io::stderr().is_terminal())
    .with_writer(std::io::stderr)
    .init();
}
