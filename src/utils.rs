//! Utility functions for path handling and engine-version parsing

use crate::core::error::{ReleaseError, ReleaseResult};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static VERSION_LIST_RE: OnceLock<Regex> = OnceLock::new();

fn version_list_re() -> &'static Regex {
  VERSION_LIST_RE.get_or_init(|| {
    Regex::new(r"^\d+\.\d+(,\d+\.\d+)*$").expect("version list pattern is valid")
  })
}

/// Check whether a raw `--engine-versions` value is a well-formed
/// comma-separated list of `MAJOR.MINOR` tokens.
pub fn is_valid_version_list(input: &str) -> bool {
  version_list_re().is_match(input)
}

/// Split a comma-separated version list into ordered, trimmed tokens.
///
/// Empty tokens (from malformed lists) are dropped; order is preserved and
/// determines build order.
pub fn parse_versions(input: &str) -> Vec<String> {
  input
    .split(',')
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .map(str::to_string)
    .collect()
}

/// Derive the plugin name from the .uplugin path: file name, extension stripped.
pub fn plugin_name(plugin_path: &Path) -> String {
  plugin_path
    .file_stem()
    .map(|s| s.to_string_lossy().to_string())
    .unwrap_or_default()
}

/// Resolve the path of a file expected to sit beside the running executable.
pub fn exe_sibling(file_name: &str) -> ReleaseResult<PathBuf> {
  let exe = std::env::current_exe()?;
  let dir = exe
    .parent()
    .ok_or_else(|| ReleaseError::message("Cannot determine the executable's directory"))?;
  Ok(dir.join(file_name))
}

/// Determine whether two paths refer to the same location.
///
/// Both sides are canonicalized; paths that cannot be canonicalized (e.g.
/// nonexistent) are never considered equal.
pub fn paths_equal(a: &Path, b: &Path) -> bool {
  match (a.canonicalize(), b.canonicalize()) {
    (Ok(ca), Ok(cb)) => ca == cb,
    _ => false,
  }
}
