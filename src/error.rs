//! # Error Module
//!
//! Fatal error types shared by both tools. Per-file findings (banword hits,
//! header mismatches) are not errors: they are logged as they occur and
//! aggregated into counts by the component that found them. Only the
//! unrecoverable classes below abort a run early.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a hygiene run.
#[derive(Debug, Error)]
pub enum RepolintError {
  /// An external listing command exited nonzero. The captured output is
  /// surfaced so the failure is actionable without re-running the command.
  #[error("executing command failed: {command}\n stdout: {stdout}\n stderr: {stderr}")]
  CommandFailed {
    command: String,
    stdout: String,
    stderr: String,
  },

  /// The banned-word file could not be decoded as base64 text.
  #[error("failed to decode banned-word file '{path}': {message}")]
  BanfileDecode { path: PathBuf, message: String },

  /// A file's suffix has no entry in the comment style map.
  #[error("no comment style known for suffix '{suffix}' (file: {path})")]
  UnknownSuffix { suffix: String, path: PathBuf },
}
