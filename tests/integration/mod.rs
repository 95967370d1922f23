//! Integration test entry point
//!
//! Tests stage a full install (binary, config.json, FilterPlugin.ini, fake
//! engine tree) in a tempdir and drive the compiled binary end to end. The
//! fake engine build tool is a shell script, so these tests are unix-only.

#[cfg(unix)]
mod helpers;
#[cfg(unix)]
mod test_build;
