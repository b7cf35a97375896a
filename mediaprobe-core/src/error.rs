// ============================================================================
// mediaprobe-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for probing and stream layout parsing
//
// Every fallible operation in the library returns `CoreResult<T>`. Variants
// fall into three groups that callers usually care about:
// - probe failures (the ffprobe process could not run or produced garbage)
// - timeouts (ffprobe did not finish within the configured bound)
// - stream layout failures (the report names a codec we do not know, or is
//   missing fields we need)
//
// No retries happen inside the library; every error is surfaced immediately.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Errors produced by mediaprobe-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Required dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed while waiting for command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("Command '{command}' failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Command '{command}' timed out after {}s", .timeout.as_secs_f64())]
    Timeout { command: String, timeout: Duration },

    #[error("Failed to parse ffprobe output: {0}")]
    JsonParse(String),

    #[error("Malformed probe document: {0}")]
    MalformedProbe(String),

    #[error("Unsupported codec '{codec}' on stream {position}")]
    UnsupportedCodec { codec: String, position: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CoreError {
    /// True for failures of the ffprobe invocation itself (spawn, exit
    /// status, unreadable output), excluding timeouts.
    pub fn is_probe_failure(&self) -> bool {
        matches!(
            self,
            CoreError::Io(_)
                | CoreError::InputNotFound(_)
                | CoreError::DependencyNotFound(_)
                | CoreError::CommandStart(..)
                | CoreError::CommandWait(..)
                | CoreError::CommandFailed { .. }
                | CoreError::JsonParse(_)
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, CoreError::Timeout { .. })
    }
}

/// Result type for mediaprobe-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

pub fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    let command = command.into();
    if err.kind() == io::ErrorKind::NotFound {
        return CoreError::DependencyNotFound(command);
    }
    CoreError::CommandStart(command, err)
}

pub fn command_wait_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(command.into(), err)
}

pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into(),
    }
}
