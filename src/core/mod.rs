//! Core engine for uplugin-release operations
//!
//! This module contains the fundamental building blocks:
//!
//! - **config**: JSON configuration (config.json) parsing and validation
//! - **error**: Error types with contextual help messages and exit codes
//! - **executor**: Platform-specific subprocess command factory
//! - **guard**: Destructive-delete safety predicate and guarded delete
//! - **pipeline**: The per-version build/prune/document/archive loop

pub mod config;
pub mod error;
pub mod executor;
pub mod guard;
pub mod pipeline;
