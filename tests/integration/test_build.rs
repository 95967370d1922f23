//! End-to-end tests for the batch build run

use crate::helpers::TestInstall;
use anyhow::Result;
use std::fs;

#[test]
fn builds_and_packages_a_single_version() -> Result<()> {
  let install = TestInstall::new()?;
  install.add_engine("5.4")?;

  let output = install.run(&["--engine-versions", "5.4"])?;
  assert!(
    output.status.success(),
    "expected success, stderr: {}",
    String::from_utf8_lossy(&output.stderr)
  );

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("Building for UE version 5.4"));
  assert!(stdout.contains("All builds completed successfully"));

  let release = install.release_dir("5.4");
  assert!(release.is_dir());

  // Scratch directories pruned, real content kept
  for scratch in ["Binaries", "Build", "Intermediate", "Saved"] {
    assert!(!release.join(scratch).exists(), "{} should be pruned", scratch);
  }
  assert!(release.join("Source/module.txt").is_file());
  assert!(release.join("Content").is_dir());

  // Documentation placed at the manifest-declared path, byte-identical
  let doc = release.join("Documentation/My_Documentation.pdf");
  assert_eq!(fs::read(&doc)?, b"%PDF-1.4 test manual");
  assert!(release.join("Config/FilterPlugin.ini").is_file());

  Ok(())
}

#[test]
fn builds_versions_in_order() -> Result<()> {
  let install = TestInstall::new()?;
  install.add_engine("5.4")?;
  install.add_engine("5.5")?;

  let output = install.run(&["--engine-versions", "5.4,5.5", "--skip-docs"])?;
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  let first = stdout.find("Building for UE version 5.4").expect("5.4 banner");
  let second = stdout.find("Building for UE version 5.5").expect("5.5 banner");
  assert!(first < second);

  assert!(install.release_dir("5.4").is_dir());
  assert!(install.release_dir("5.5").is_dir());
  Ok(())
}

#[test]
fn later_build_failure_discards_the_entire_output_tree() -> Result<()> {
  let install = TestInstall::new()?;
  install.add_engine("5.4")?;
  install.add_broken_engine("5.5")?;

  let output = install.run(&["--engine-versions", "5.4,5.5", "--skip-docs"])?;
  assert_eq!(output.status.code(), Some(2));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Build failed for"));
  assert!(stderr.contains("5.5"));

  // The completed 5.4 artifact does not survive the 5.5 failure
  assert!(!install.output.exists());
  Ok(())
}

#[test]
fn missing_build_script_is_fatal() -> Result<()> {
  let install = TestInstall::new()?;
  install.add_engine("5.4")?;

  let output = install.run(&["--engine-versions", "9.9"])?;
  assert_eq!(output.status.code(), Some(1));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Build script not found for engine version 9.9"));

  // No build ran, so no cleanup either
  assert!(install.output.exists());
  Ok(())
}

#[test]
fn rejects_malformed_version_lists() -> Result<()> {
  let install = TestInstall::new()?;
  install.add_engine("5.4")?;

  for bad in ["5", "invalid", "5,4"] {
    let output = install.run(&["--engine-versions", bad])?;
    assert_eq!(output.status.code(), Some(1), "'{}' should be rejected", bad);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid --engine-versions"));
  }

  assert!(!install.release_dir("5.4").exists());
  Ok(())
}

#[test]
fn skip_docs_omits_documentation() -> Result<()> {
  let install = TestInstall::new()?;
  install.add_engine("5.4")?;

  let output = install.run(&["--engine-versions", "5.4", "--skip-docs"])?;
  assert!(output.status.success());

  let release = install.release_dir("5.4");
  assert!(release.is_dir());
  assert!(!release.join("Documentation").exists());
  assert!(!release.join("Config").exists());
  Ok(())
}

#[test]
fn missing_config_is_fatal() -> Result<()> {
  let install = TestInstall::new()?;
  install.add_engine("5.4")?;
  fs::remove_file(install.install_dir.join("config.json"))?;

  let output = install.run(&["--engine-versions", "5.4"])?;
  assert_eq!(output.status.code(), Some(1));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("No configuration found"));
  Ok(())
}

#[test]
fn missing_manifest_keeps_the_run_alive() -> Result<()> {
  let install = TestInstall::new()?;
  install.add_engine("5.4")?;
  fs::remove_file(install.install_dir.join("FilterPlugin.ini"))?;

  let output = install.run(&["--engine-versions", "5.4"])?;
  assert!(output.status.success());

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Skipping documentation"));

  let release = install.release_dir("5.4");
  assert!(release.is_dir());
  assert!(!release.join("Documentation").exists());
  Ok(())
}
