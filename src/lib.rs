//! # repolint
//!
//! Repository hygiene utilities for git-tracked source trees.
//!
//! The crate ships two small batch tools that share one skeleton
//! (list tracked files, filter by globs, process each file, aggregate):
//!
//! * `banwords` - scans tracked files for banned words from a
//!   base64-obfuscated word list and reports `file:line` violations
//! * `licensing` - checks that tracked files carry the standard license
//!   header for their suffix, and inserts it when missing
//!
//! Both tools are deliberately sequential and stateless: every run rebuilds
//! its view of the repository from `git ls-files` and the filesystem.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use repolint::banwords::{ScanOptions, run_scan};
//! use repolint::git::GitLister;
//!
//! fn main() -> anyhow::Result<()> {
//!   let opts = ScanOptions {
//!     top: PathBuf::from("."),
//!     dirs: vec![".".to_string()],
//!     includes: vec!["*".to_string()],
//!     excludes: vec![],
//!     ban_file: PathBuf::from("banwords.b64"),
//!     show: false,
//!   };
//!
//!   let clean = run_scan(&GitLister, &opts)?;
//!   if !clean {
//!     println!("banned words found");
//!   }
//!   Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`git`] - tracked-file listing via `git ls-files`
//! * [`paths`] - include/exclude glob filtering
//! * [`banwords`] - banned-word list decoding and scanning
//! * [`license`] - license header rendering, checking, and insertion

pub mod banwords;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod license;
pub mod logging;
pub mod output;
pub mod paths;
