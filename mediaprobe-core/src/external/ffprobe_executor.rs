//! ffprobe execution
//!
//! This module runs ffprobe against a media file and hands back its JSON
//! report untouched. Interpreting the report is the job of
//! [`crate::media::MediaFile`].

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use serde_json::Value;

use crate::config::ProbeConfig;
use crate::error::{CoreError, CoreResult};
use crate::util::command::run_command_with_timeout;

/// Bound on the `-version` availability check.
const VERSION_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of ffprobe JSON reports.
pub trait FfprobeExecutor {
    /// Returns the ffprobe report for `path`, which must contain at least a
    /// `streams` array.
    fn probe(&self, path: &Path) -> CoreResult<Value>;
}

impl<T: FfprobeExecutor + ?Sized> FfprobeExecutor for &T {
    fn probe(&self, path: &Path) -> CoreResult<Value> {
        (**self).probe(path)
    }
}

/// Runs the ffprobe binary named in a [`ProbeConfig`].
#[derive(Debug, Clone, Default)]
pub struct CommandFfprobeExecutor {
    config: ProbeConfig,
}

impl CommandFfprobeExecutor {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.config.ffprobe_path);
        cmd.args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path);
        cmd
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn probe(&self, path: &Path) -> CoreResult<Value> {
        if !path.exists() {
            return Err(CoreError::InputNotFound(path.to_path_buf()));
        }

        log::debug!(
            "Probing {} (timeout {:?})",
            path.display(),
            self.config.timeout
        );

        let mut cmd = self.command(path);
        let output = run_command_with_timeout(&mut cmd, self.config.timeout)?;

        serde_json::from_slice(&output.stdout).map_err(|e| {
            log::error!("ffprobe returned invalid JSON for {}: {}", path.display(), e);
            CoreError::JsonParse(format!("{}: {}", path.display(), e))
        })
    }
}

/// Checks that the configured ffprobe binary runs and answers `-version`.
pub fn is_available(config: &ProbeConfig) -> bool {
    let mut cmd = Command::new(&config.ffprobe_path);
    cmd.arg("-version");
    match run_command_with_timeout(&mut cmd, VERSION_CHECK_TIMEOUT.min(config.timeout)) {
        Ok(_) => true,
        Err(e) => {
            log::warn!(
                "ffprobe not usable at '{}': {}",
                config.ffprobe_path.display(),
                e
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_command_line() {
        let executor = CommandFfprobeExecutor::default();
        let cmd = executor.command(Path::new("/media/film.mkv"));
        assert_eq!(cmd.get_program(), OsStr::new("ffprobe"));
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(
            args,
            ["-v", "error", "-print_format", "json", "-show_streams", "/media/film.mkv"]
                .map(OsStr::new)
        );
    }

    #[test]
    fn test_missing_input_is_reported_before_spawning() {
        let executor = CommandFfprobeExecutor::default();
        let err = executor
            .probe(Path::new("surely/this/does/not/exist/input.mkv"))
            .unwrap_err();
        assert!(matches!(err, CoreError::InputNotFound(_)));
        assert!(err.is_probe_failure());
    }

    #[test]
    fn test_missing_binary_is_not_available() {
        let config = ProbeConfig {
            ffprobe_path: "mediaprobe-no-such-ffprobe-42".into(),
            ..Default::default()
        };
        assert!(!is_available(&config));
    }
}
