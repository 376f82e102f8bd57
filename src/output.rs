//! # Output Module
//!
//! User-facing summary lines for both tools, kept separate from the tracing
//! diagnostics on stderr so stdout stays predictable for piping.

use owo_colors::{OwoColorize, Stream};

/// Symbols used in output
pub mod symbols {
  /// Run finished clean
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Violations found
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Nothing to do
  pub const SKIPPED: &str = "-";
}

/// Print a green success summary line.
pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

/// Print a red failure summary line.
pub fn print_failure(message: &str) {
  println!(
    "{} {}",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    message
  );
}

/// Print a yellow "nothing to do" summary line.
pub fn print_skipped(message: &str) {
  println!(
    "{} {}",
    symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.yellow()),
    message
  );
}
