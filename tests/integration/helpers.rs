//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A staged install: the binary with its config.json, FilterPlugin.ini and
/// docs file in one directory, plus a fake engine tree and an output base.
pub struct TestInstall {
  _root: TempDir,
  pub install_dir: PathBuf,
  pub engines: PathBuf,
  pub output: PathBuf,
  bin: PathBuf,
}

/// Fake RunUAT script: creates the package directory the way the real build
/// tool would, scratch folders included.
const BUILD_SCRIPT_OK: &str = r#"#!/bin/sh
out=""
for a in "$@"; do
  case "$a" in
    -Package=*) out="${a#-Package=}" ;;
  esac
done
mkdir -p "$out/Binaries" "$out/Build" "$out/Intermediate" "$out/Saved" "$out/Source" "$out/Content"
echo compiled > "$out/Source/module.txt"
"#;

const BUILD_SCRIPT_FAIL: &str = "#!/bin/sh\necho 'simulated build failure' >&2\nexit 1\n";

impl TestInstall {
  /// Stage the binary beside a config.json, FilterPlugin.ini and docs file.
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let install_dir = root.path().join("install");
    let engines = root.path().join("engines");
    let output = root.path().join("releases");
    fs::create_dir_all(&install_dir)?;
    fs::create_dir_all(&engines)?;
    fs::create_dir_all(&output)?;

    let bin = install_dir.join("uplugin-release");
    fs::copy(env!("CARGO_BIN_EXE_uplugin-release"), &bin).context("Failed to stage the binary")?;

    let plugin = install_dir.join("MyPlugin.uplugin");
    fs::write(&plugin, "{ \"FriendlyName\": \"MyPlugin\" }\n")?;

    let docs = install_dir.join("Manual.pdf");
    fs::write(&docs, b"%PDF-1.4 test manual")?;

    fs::write(
      install_dir.join("FilterPlugin.ini"),
      "[FilterPlugin]\n/Documentation/My_Documentation.pdf\n",
    )?;

    let install = Self {
      _root: root,
      install_dir,
      engines,
      output,
      bin,
    };
    install.write_config(true)?;
    Ok(install)
  }

  /// Write config.json beside the binary, with or without docsPath.
  pub fn write_config(&self, with_docs: bool) -> Result<()> {
    let docs_field = if with_docs {
      format!(
        ",\n  \"docsPath\": \"{}\"",
        self.install_dir.join("Manual.pdf").display()
      )
    } else {
      String::new()
    };

    fs::write(
      self.install_dir.join("config.json"),
      format!(
        "{{\n  \"engineBaseDirectory\": \"{}\",\n  \"buildScriptPath\": \"Engine/Build/BatchFiles/RunUAT.sh\",\n  \"outputBaseDirectory\": \"{}\",\n  \"pluginPath\": \"{}\"{}\n}}\n",
        self.engines.display(),
        self.output.display(),
        self.install_dir.join("MyPlugin.uplugin").display(),
        docs_field
      ),
    )?;
    Ok(())
  }

  /// Add a fake engine install whose build script succeeds.
  pub fn add_engine(&self, version: &str) -> Result<()> {
    self.add_engine_script(version, BUILD_SCRIPT_OK)
  }

  /// Add a fake engine install whose build script fails.
  pub fn add_broken_engine(&self, version: &str) -> Result<()> {
    self.add_engine_script(version, BUILD_SCRIPT_FAIL)
  }

  fn add_engine_script(&self, version: &str, script: &str) -> Result<()> {
    let batch_files = self.engines.join(format!("UE_{}", version)).join("Engine/Build/BatchFiles");
    fs::create_dir_all(&batch_files)?;
    let script_path = batch_files.join("RunUAT.sh");
    fs::write(&script_path, script)?;
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))?;
    Ok(())
  }

  /// Run the staged binary with the given arguments.
  pub fn run(&self, args: &[&str]) -> Result<Output> {
    Command::new(&self.bin)
      .args(args)
      .current_dir(&self.install_dir)
      .output()
      .context("Failed to run uplugin-release")
  }

  /// Per-version release directory for MyPlugin.
  pub fn release_dir(&self, version: &str) -> PathBuf {
    self.output.join(format!("MyPlugin_{}", version))
  }
}
