//! Error types for uplugin-release with contextual messages and exit codes
//!
//! A single error enum categorizes every failure the tool can hit and maps
//! it to a process exit code. Fatal conditions (bad input, bad config,
//! missing build tool, a failed build) travel up to `main` as errors; the
//! post-processing stages log and continue instead of constructing these.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for uplugin-release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid flags, config problems, missing files)
  User = 1,
  /// A version's build-tool invocation failed
  Build = 2,
  /// System error (unsupported platform, I/O)
  System = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for uplugin-release
#[derive(Debug)]
pub enum ReleaseError {
  /// Configuration errors (config.json)
  Config(ConfigError),

  /// The build script for an engine version does not exist
  MissingBuildScript { version: String, path: PathBuf },

  /// The engine build tool exited non-zero or could not be started
  BuildFailed { version: String, detail: String },

  /// No subprocess executor exists for the host operating system
  UnsupportedPlatform { os: String },

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

/// Result alias used throughout the crate
pub type ReleaseResult<T> = Result<T, ReleaseError>;

impl ReleaseError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ReleaseError::Message { message, context, help } => ReleaseError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      other => ReleaseError::Message {
        help: other.help_message(),
        message: other.to_string(),
        context: Some(ctx_str),
      },
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReleaseError::Config(_) => ExitCode::User,
      ReleaseError::MissingBuildScript { .. } => ExitCode::User,
      ReleaseError::BuildFailed { .. } => ExitCode::Build,
      ReleaseError::UnsupportedPlatform { .. } => ExitCode::System,
      ReleaseError::Io(_) => ExitCode::System,
      ReleaseError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::Config(e) => e.help_message(),
      ReleaseError::MissingBuildScript { version, .. } => Some(format!(
        "Check engineBaseDirectory and buildScriptPath in config.json, and that engine {} is installed.",
        version
      )),
      ReleaseError::BuildFailed { .. } => {
        Some("Inspect the build tool output above for the underlying compile or packaging error.".to_string())
      }
      ReleaseError::UnsupportedPlatform { .. } => {
        Some("Only Windows, Linux and macOS are supported.".to_string())
      }
      ReleaseError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::Config(e) => write!(f, "{}", e),
      ReleaseError::MissingBuildScript { version, path } => {
        write!(
          f,
          "Build script not found for engine version {}: {}",
          version,
          path.display()
        )
      }
      ReleaseError::BuildFailed { version, detail } => {
        write!(f, "Build failed for engine version {}: {}", version, detail)
      }
      ReleaseError::UnsupportedPlatform { os } => {
        write!(f, "Unsupported operating system: {}", os)
      }
      ReleaseError::Io(e) => write!(f, "I/O error: {}", e),
      ReleaseError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ReleaseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReleaseError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ReleaseError {
  fn from(err: io::Error) -> Self {
    ReleaseError::Io(err)
  }
}

impl From<serde_json::Error> for ReleaseError {
  fn from(err: serde_json::Error) -> Self {
    ReleaseError::Config(ConfigError::Parse {
      detail: err.to_string(),
    })
  }
}

impl From<String> for ReleaseError {
  fn from(msg: String) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<&str> for ReleaseError {
  fn from(msg: &str) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<anyhow::Error> for ReleaseError {
  fn from(err: anyhow::Error) -> Self {
    ReleaseError::message(err.to_string())
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// config.json not found beside the executable
  NotFound { path: PathBuf },

  /// config.json could not be parsed
  Parse { detail: String },

  /// A configured value violates an invariant
  Invalid { reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => Some(
        "Create a config.json next to the executable with engineBaseDirectory, \
         buildScriptPath, outputBaseDirectory, pluginPath and optionally docsPath."
          .to_string(),
      ),
      ConfigError::Parse { .. } => {
        Some("config.json must be a JSON object; see the README for the expected fields.".to_string())
      }
      ConfigError::Invalid { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => {
        write!(f, "No configuration found.\nExpected file: {}", path.display())
      }
      ConfigError::Parse { detail } => write!(f, "Error parsing config file: {}", detail),
      ConfigError::Invalid { reason } => write!(f, "Invalid configuration: {}", reason),
    }
  }
}

/// Extension trait for adding context to results
pub trait ResultExt<T> {
  /// Add context to an error
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T>;

  /// Add context lazily
  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ReleaseError>,
{
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ReleaseError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
