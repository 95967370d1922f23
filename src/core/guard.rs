//! Destructive-delete guard
//!
//! A pure predicate deciding whether a path is too dangerous to recursively
//! delete, plus the delete helper that composes it. Every recursive delete
//! in this crate goes through [`remove_dir_all_guarded`]; callers must not
//! reach for `fs::remove_dir_all` directly.

use std::fs;
use std::io;
use std::path::Path;

/// Directory names that must never appear in a deleted path's ancestry.
const RESERVED_SEGMENTS: &[&str] = &["windows"];

/// Returns true iff recursively deleting `path` would be unacceptably
/// dangerous.
///
/// Rules, evaluated on the cleaned, lower-cased path:
/// 1. the path is the root of its volume (`/`, `C:\`, any drive letter)
/// 2. any path segment names a reserved system directory
///
/// The check is string-level and understands both `/` and `\` separators as
/// well as drive letters on every host, so its verdicts are identical across
/// platforms.
pub fn is_dangerous_path(path: &Path) -> bool {
  let normalized = path.to_string_lossy().to_lowercase().replace('\\', "/");
  let trimmed = normalized.trim_end_matches('/');

  // "/" (or "\") trims down to nothing; treat the empty path the same way
  if trimmed.is_empty() {
    return true;
  }

  if is_drive_root(trimmed) {
    return true;
  }

  trimmed.split('/').any(|segment| RESERVED_SEGMENTS.contains(&segment))
}

/// A bare drive root like "c:" (after trailing-separator trimming)
fn is_drive_root(path: &str) -> bool {
  let bytes = path.as_bytes();
  bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Recursively delete `path` unless the safety predicate refuses it.
///
/// Returns `Ok(true)` when the path was deleted (or did not exist, so
/// deletion is idempotent) and `Ok(false)` when the guard refused.
pub fn remove_dir_all_guarded(path: &Path) -> io::Result<bool> {
  if is_dangerous_path(path) {
    return Ok(false);
  }

  match fs::remove_dir_all(path) {
    Ok(()) => Ok(true),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
    Err(e) => Err(e),
  }
}
