//! End-to-end tests for the `licensing` binary against real git repositories.

mod common;

use std::fs;
use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const LICENSE_TEXT: &str = "Copyright 2024 Example\n";

fn setup_repo(dir: &Path) -> Result<()> {
  common::init_git_repo(dir)?;
  fs::write(dir.join("LICENSE"), LICENSE_TEXT)?;
  fs::create_dir_all(dir.join("src"))?;
  fs::write(dir.join("src/app.py"), "print(1)\nprint(2)\n")?;
  fs::write(dir.join("src/tool.py"), "#!/usr/bin/env python3\nprint(1)\n")?;
  common::git_commit_all(dir, "initial")?;
  Ok(())
}

fn licensing() -> Command {
  Command::cargo_bin("licensing").expect("binary should build")
}

#[test]
fn test_check_reports_missing_headers() -> Result<()> {
  if !common::is_git_available() {
    return Ok(());
  }
  let temp = tempdir()?;
  setup_repo(temp.path())?;

  licensing()
    .args(["--top"])
    .arg(temp.path())
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("license header mismatch"))
    .stderr(predicate::str::contains("expect: # Copyright 2024 Example"))
    .stderr(predicate::str::contains("checked 2 files: 2 errors"));

  Ok(())
}

#[test]
fn test_apply_then_check_passes() -> Result<()> {
  if !common::is_git_available() {
    return Ok(());
  }
  let temp = tempdir()?;
  setup_repo(temp.path())?;

  licensing()
    .args(["--top"])
    .arg(temp.path())
    .args(["--apply", "--no-check"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Applied 2 files: 2 changed"));

  let app = fs::read_to_string(temp.path().join("src/app.py"))?;
  assert_eq!(app, "# Copyright 2024 Example\nprint(1)\nprint(2)\n");

  // Shebang stays first, header follows it.
  let tool = fs::read_to_string(temp.path().join("src/tool.py"))?;
  assert_eq!(tool, "#!/usr/bin/env python3\n# Copyright 2024 Example\nprint(1)\n");

  licensing().args(["--top"]).arg(temp.path()).assert().success();

  Ok(())
}

#[test]
fn test_apply_is_idempotent() -> Result<()> {
  if !common::is_git_available() {
    return Ok(());
  }
  let temp = tempdir()?;
  setup_repo(temp.path())?;

  licensing()
    .args(["--top"])
    .arg(temp.path())
    .args(["--apply", "--no-check"])
    .assert()
    .success();
  let once = fs::read_to_string(temp.path().join("src/app.py"))?;

  licensing()
    .args(["--top"])
    .arg(temp.path())
    .args(["--apply", "--no-check"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Applied 2 files: 0 changed"));
  let twice = fs::read_to_string(temp.path().join("src/app.py"))?;

  assert_eq!(once, twice);
  Ok(())
}

#[test]
fn test_failed_check_stops_before_apply() -> Result<()> {
  if !common::is_git_available() {
    return Ok(());
  }
  let temp = tempdir()?;
  setup_repo(temp.path())?;

  // Check runs first and fails, so the apply pass never modifies anything.
  licensing()
    .args(["--top"])
    .arg(temp.path())
    .args(["--check", "--apply"])
    .assert()
    .failure()
    .code(1);

  let app = fs::read_to_string(temp.path().join("src/app.py"))?;
  assert_eq!(app, "print(1)\nprint(2)\n");
  Ok(())
}

#[test]
fn test_unknown_suffix_aborts_run() -> Result<()> {
  if !common::is_git_available() {
    return Ok(());
  }
  let temp = tempdir()?;
  common::init_git_repo(temp.path())?;
  fs::write(temp.path().join("LICENSE"), LICENSE_TEXT)?;
  fs::create_dir_all(temp.path().join("src"))?;
  fs::write(temp.path().join("src/notes.txt"), "hello\n")?;
  common::git_commit_all(temp.path(), "initial")?;

  licensing()
    .args(["--top"])
    .arg(temp.path())
    .args(["--includes", "*.txt"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("no comment style known for suffix 'txt'"));

  Ok(())
}

#[test]
fn test_no_matching_files_is_success() -> Result<()> {
  if !common::is_git_available() {
    return Ok(());
  }
  let temp = tempdir()?;
  setup_repo(temp.path())?;

  licensing()
    .args(["--top"])
    .arg(temp.path())
    .args(["--includes", "*.nomatch"])
    .assert()
    .success()
    .stderr(predicate::str::contains("no files found"));

  Ok(())
}

#[test]
fn test_config_file_extends_comment_map() -> Result<()> {
  if !common::is_git_available() {
    return Ok(());
  }
  let temp = tempdir()?;
  common::init_git_repo(temp.path())?;
  fs::write(temp.path().join("LICENSE"), LICENSE_TEXT)?;
  fs::write(
    temp.path().join(".repolint.toml"),
    "[comments]\nlua = \"-- \"\n\n[licensing]\nincludes = [\"*.lua\"]\n",
  )?;
  fs::create_dir_all(temp.path().join("src"))?;
  fs::write(temp.path().join("src/mod.lua"), "return {}\n")?;
  common::git_commit_all(temp.path(), "initial")?;

  licensing()
    .args(["--top"])
    .arg(temp.path())
    .args(["--apply", "--no-check"])
    .assert()
    .success();

  let content = fs::read_to_string(temp.path().join("src/mod.lua"))?;
  assert_eq!(content, "-- Copyright 2024 Example\nreturn {}\n");

  Ok(())
}

#[test]
fn test_excludes_skip_generated_sources() -> Result<()> {
  if !common::is_git_available() {
    return Ok(());
  }
  let temp = tempdir()?;
  setup_repo(temp.path())?;
  fs::write(temp.path().join("src/gen_app.py"), "print(3)\n")?;
  common::git_commit_all(temp.path(), "add generated file")?;

  licensing()
    .args(["--top"])
    .arg(temp.path())
    .args(["--apply", "--no-check", "--excludes", "gen_*.py"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Applied 2 files: 2 changed"));

  let r#gen = fs::read_to_string(temp.path().join("src/gen_app.py"))?;
  assert_eq!(r#gen, "print(3)\n");
  Ok(())
}
