//! Release orchestration pipeline
//!
//! Drives the per-version loop: BUILD → PRUNE → DOCUMENT → ARCHIVE. One
//! version runs to completion before the next begins; nothing is concurrent.
//! A build failure aborts the entire run and discards the whole output base
//! directory (all versions built so far included) behind the delete guard.
//! The post-processing stages only log their failures and keep going.

use crate::core::config::Config;
use crate::core::error::{ReleaseError, ReleaseResult, ResultExt};
use crate::core::executor::SubprocessExecutor;
use crate::core::guard;
use crate::utils;
use std::fs;
use std::path::{Path, PathBuf};

/// Engine installation folder prefix: UE_5.4, UE_5.5, ...
pub const VERSION_PREFIX: &str = "UE_";

/// Name of the packaged configuration folder inside a release
pub const CONFIG_DIR_NAME: &str = "Config";

/// Name of the plugin manifest file, expected beside the executable
pub const MANIFEST_FILE_NAME: &str = "FilterPlugin.ini";

/// Build-tool scratch directories that must not ship in a release
const SCRATCH_DIRS: &[&str] = &["Binaries", "Build", "Intermediate", "Saved"];

/// Per-run input, parsed and validated by the CLI layer
pub struct RunInput {
  /// Ordered engine versions; order determines build order
  pub engine_versions: Vec<String>,
  /// Skip the documentation stage entirely
  pub skip_docs: bool,
}

/// The release orchestrator: owns the configuration, a platform executor
/// and the manifest location, and runs the per-version loop.
pub struct ReleasePipeline {
  config: Config,
  executor: Box<dyn SubprocessExecutor>,
  manifest_path: PathBuf,
}

impl ReleasePipeline {
  pub fn new(config: Config, executor: Box<dyn SubprocessExecutor>, manifest_path: PathBuf) -> Self {
    Self {
      config,
      executor,
      manifest_path,
    }
  }

  /// Build, prune, document and archive every requested version in order.
  pub fn run(&self, input: &RunInput) -> ReleaseResult<()> {
    let plugin_name = utils::plugin_name(&self.config.plugin_path);

    for version in &input.engine_versions {
      let version = version.trim();
      if version.is_empty() {
        continue;
      }

      let output_dir = self.output_dir(&plugin_name, version);
      self.build(version, &output_dir)?;
      self.post_process(&output_dir, input.skip_docs);
    }

    Ok(())
  }

  fn output_dir(&self, plugin_name: &str, version: &str) -> PathBuf {
    self
      .config
      .output_base_directory
      .join(format!("{}_{}", plugin_name, version))
  }

  fn build_script_path(&self, version: &str) -> PathBuf {
    self
      .config
      .engine_base_directory
      .join(format!("{}{}", VERSION_PREFIX, version))
      .join(&self.config.build_script_path)
  }

  /// Run the engine build tool for one version, streaming its output live.
  ///
  /// A missing build script is a configuration error and aborts with no
  /// cleanup (nothing was written yet). A failed build aborts the whole run
  /// and discards the entire output base directory.
  fn build(&self, version: &str, output_dir: &Path) -> ReleaseResult<()> {
    let script = self.build_script_path(version);
    if !script.exists() {
      return Err(ReleaseError::MissingBuildScript {
        version: version.to_string(),
        path: script,
      });
    }

    println!("======================================");
    println!("Building for UE version {}", version);
    println!("Output to: {}", output_dir.display());
    println!("======================================");

    let status = self
      .executor
      .builder_command(&script, &self.config.plugin_path, output_dir)
      .status();

    let detail = match status {
      Ok(s) if s.success() => return Ok(()),
      Ok(s) => format!("exit status {}", s.code().unwrap_or(-1)),
      Err(e) => format!("failed to start build tool: {}", e),
    };

    eprintln!("Build failed for {}: {}", version, detail);
    self.discard_output_tree();

    Err(ReleaseError::BuildFailed {
      version: version.to_string(),
      detail,
    })
  }

  /// Delete the entire output base directory after a failed build.
  ///
  /// Intentionally covers every version processed so far in this run, not
  /// just the failed one. The guard may refuse, in which case the tree is
  /// left in place with a warning.
  fn discard_output_tree(&self) {
    let base = &self.config.output_base_directory;
    println!("Deleting output directory: {}", base.display());

    match guard::remove_dir_all_guarded(base) {
      Ok(true) => {}
      Ok(false) => eprintln!("⚠️ Output directory is dangerous to delete, leaving it in place."),
      Err(e) => eprintln!("⚠️ Failed to remove output directory: {}", e),
    }
  }

  /// PRUNE → DOCUMENT → ARCHIVE; none of these stages can abort the run.
  fn post_process(&self, output_dir: &Path, skip_docs: bool) {
    self.prune_scratch(output_dir);

    if !skip_docs {
      if let Some(docs_path) = self.config.docs_path.clone() {
        if let Err(e) = self.place_documentation(output_dir, &docs_path) {
          eprintln!("⚠️ Skipping documentation for this version: {}", e);
        }
      }
    }

    self.archive(output_dir);
  }

  /// Delete the build-scratch subdirectories from a release, by name.
  ///
  /// Each deletion is independent; missing directories are fine.
  fn prune_scratch(&self, output_dir: &Path) {
    for scratch in SCRATCH_DIRS {
      let full_path = output_dir.join(scratch);
      match guard::remove_dir_all_guarded(&full_path) {
        Ok(true) => {}
        Ok(false) => eprintln!("⚠️ Refusing to delete: {}", full_path.display()),
        Err(e) => eprintln!("⚠️ Failed to delete: {} -> {}", full_path.display(), e),
      }
    }
  }

  /// Place the documentation file at its manifest-declared path and copy
  /// the manifest itself into the release's Config folder.
  fn place_documentation(&self, output_dir: &Path, docs_path: &Path) -> ReleaseResult<()> {
    let relative_doc_path = self.manifest_doc_path()?;
    let target_doc_path = output_dir.join(&relative_doc_path);

    if let Some(target_dir) = target_doc_path.parent() {
      fs::create_dir_all(target_dir)
        .with_context(|| format!("Failed to create doc target folder: {}", target_dir.display()))?;
    }

    fs::copy(docs_path, &target_doc_path)
      .with_context(|| format!("Failed to copy documentation file to {}", target_doc_path.display()))?;

    let config_dir = output_dir.join(CONFIG_DIR_NAME);
    fs::create_dir_all(&config_dir)
      .with_context(|| format!("Failed to create Config dir: {}", config_dir.display()))?;

    let manifest_name = self
      .manifest_path
      .file_name()
      .map(|n| n.to_os_string())
      .unwrap_or_else(|| MANIFEST_FILE_NAME.into());
    fs::copy(&self.manifest_path, config_dir.join(manifest_name))
      .with_context(|| format!("Failed to copy {} into the release", MANIFEST_FILE_NAME))?;

    Ok(())
  }

  /// Read the destination-relative doc path from line 2 of the manifest.
  fn manifest_doc_path(&self) -> ReleaseResult<PathBuf> {
    let raw = fs::read_to_string(&self.manifest_path)
      .with_context(|| format!("Failed to read {}", self.manifest_path.display()))?;

    let second_line = raw.trim().lines().nth(1).ok_or_else(|| {
      ReleaseError::message(format!(
        "{} must contain a second line with the doc path",
        MANIFEST_FILE_NAME
      ))
    })?;

    let relative = second_line.trim().trim_start_matches('/');
    if relative.is_empty() {
      return Err(ReleaseError::message(format!(
        "{} line 2 does not name a doc path",
        MANIFEST_FILE_NAME
      )));
    }

    Ok(PathBuf::from(relative))
  }

  /// Compress the release directory into a sibling zip; failure only logs.
  fn archive(&self, output_dir: &Path) {
    match self.executor.archive_command(output_dir).status() {
      Ok(s) if s.success() => {}
      Ok(s) => eprintln!(
        "⚠️ Failed to archive {}: exit status {}",
        output_dir.display(),
        s.code().unwrap_or(-1)
      ),
      Err(e) => eprintln!("⚠️ Failed to archive {}: {}", output_dir.display(), e),
    }
  }
}
