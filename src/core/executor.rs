//! Platform-specific subprocess command factory
//!
//! The pipeline never spawns processes directly; it asks an executor for an
//! inert `Command` describing either a build-tool invocation or an archive
//! step, and runs it itself. One variant exists per supported platform and
//! is selected once at startup; an unrecognized platform is a startup-time
//! fatal error, not a per-build failure.

use crate::core::error::{ReleaseError, ReleaseResult};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Creates the commands that are run as subprocesses by the pipeline.
///
/// Produced commands are not-yet-started descriptions: constructing one has
/// no side effect, running it does. Both stdout and stderr are inherited so
/// the build tool's output streams live into the console.
pub trait SubprocessExecutor {
  /// Command that invokes the engine build tool's plugin-packaging
  /// subcommand for one plugin/output pair.
  fn builder_command(&self, build_script: &Path, plugin_path: &Path, output_dir: &Path) -> Command;

  /// Command that compresses `source_dir` into a sibling `<source_dir>.zip`,
  /// overwriting any pre-existing archive of the same name.
  fn archive_command(&self, source_dir: &Path) -> Command;
}

/// Pick the executor for the host operating system.
pub fn for_host_os() -> ReleaseResult<Box<dyn SubprocessExecutor>> {
  for_os(std::env::consts::OS)
}

/// Pure platform selection; `os` follows `std::env::consts::OS` naming.
pub fn for_os(os: &str) -> ReleaseResult<Box<dyn SubprocessExecutor>> {
  match os {
    "windows" => Ok(Box::new(WindowsExecutor)),
    "linux" | "macos" => Ok(Box::new(UnixExecutor)),
    other => Err(ReleaseError::UnsupportedPlatform { os: other.to_string() }),
  }
}

/// The three flags the BuildPlugin subcommand is always given
fn builder_args(plugin_path: &Path, output_dir: &Path) -> Vec<OsString> {
  vec![
    OsString::from("BuildPlugin"),
    OsString::from(format!("-Plugin={}", plugin_path.display())),
    OsString::from(format!("-Package={}", output_dir.display())),
    OsString::from("-Rocket"),
  ]
}

fn archive_destination(source_dir: &Path) -> OsString {
  let mut dest = source_dir.as_os_str().to_os_string();
  dest.push(".zip");
  dest
}

/// Runs the .bat build script through `cmd /C` and archives with PowerShell's
/// `Compress-Archive`.
pub struct WindowsExecutor;

impl SubprocessExecutor for WindowsExecutor {
  fn builder_command(&self, build_script: &Path, plugin_path: &Path, output_dir: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(build_script);
    cmd.args(builder_args(plugin_path, output_dir));
    cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    cmd
  }

  fn archive_command(&self, source_dir: &Path) -> Command {
    // Compress-Archive -Path "C:\MyFolder\*" -DestinationPath "C:\MyZip.zip" -Force
    let destination = archive_destination(source_dir);
    let mut cmd = Command::new("powershell");
    cmd.arg("-Command").arg(format!(
      r#"Compress-Archive -Path "{}\*" -DestinationPath "{}" -Force"#,
      source_dir.display(),
      destination.to_string_lossy()
    ));
    cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    cmd
  }
}

/// Runs the .sh build script through `sh` and archives with the `zip` CLI.
pub struct UnixExecutor;

impl SubprocessExecutor for UnixExecutor {
  fn builder_command(&self, build_script: &Path, plugin_path: &Path, output_dir: &Path) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg(build_script);
    cmd.args(builder_args(plugin_path, output_dir));
    cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    cmd
  }

  fn archive_command(&self, source_dir: &Path) -> Command {
    // -FS syncs an existing archive with the directory contents, so a stale
    // zip from an earlier run is effectively overwritten
    let mut cmd = Command::new("zip");
    cmd.current_dir(source_dir);
    cmd.arg("-r").arg("-FS").arg(archive_destination(source_dir)).arg(".");
    cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    cmd
  }
}
