//! `uplugin-release` build command - the whole run, start to finish
//!
//! Validates the version list, loads and validates config.json from the
//! executable's directory, picks the platform executor and hands control to
//! the release pipeline.

use crate::core::config::{Config, CONFIG_FILE_NAME};
use crate::core::error::{ReleaseError, ReleaseResult};
use crate::core::executor;
use crate::core::pipeline::{ReleasePipeline, RunInput, MANIFEST_FILE_NAME};
use crate::utils;

/// Run the build command
pub fn run_build(engine_versions: String, skip_docs: bool) -> ReleaseResult<()> {
  if !utils::is_valid_version_list(&engine_versions) {
    return Err(ReleaseError::with_help(
      format!("Invalid --engine-versions value: '{}'", engine_versions),
      "Pass a comma-separated list of MAJOR.MINOR engine versions, e.g. \"5.4,5.5\".",
    ));
  }

  let config_path = utils::exe_sibling(CONFIG_FILE_NAME)?;
  let config = Config::load(&config_path)?;
  config.validate()?;

  let executor = executor::for_host_os()?;
  let manifest_path = utils::exe_sibling(MANIFEST_FILE_NAME)?;

  let input = RunInput {
    engine_versions: utils::parse_versions(&engine_versions),
    skip_docs,
  };

  let pipeline = ReleasePipeline::new(config, executor, manifest_path);
  pipeline.run(&input)?;

  println!("✅ All builds completed successfully.");
  Ok(())
}
