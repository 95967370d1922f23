//! CLI commands for uplugin-release
//!
//! A single user-facing command lives here:
//! - **build**: validate input, load configuration and run the release
//!   pipeline for every requested engine version

pub mod build;

pub use build::run_build;
