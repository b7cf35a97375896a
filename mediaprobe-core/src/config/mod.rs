//! Configuration for ffprobe invocation.
//!
//! A `ProbeConfig` names the ffprobe binary and the upper bound on how long a
//! single probe may run. Defaults can be overridden through the builder or
//! through environment variables.

mod builder;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};

pub use builder::ProbeConfigBuilder;

/// Default ffprobe executable, resolved through `PATH`.
pub const DEFAULT_FFPROBE_PATH: &str = "ffprobe";

/// Default bound on a single probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(60);

/// Overrides the ffprobe executable.
pub const ENV_FFPROBE_PATH: &str = "MEDIAPROBE_FFPROBE";

/// Overrides the probe timeout, in whole seconds.
pub const ENV_PROBE_TIMEOUT_SECS: &str = "MEDIAPROBE_PROBE_TIMEOUT_SECS";

/// Settings used when running ffprobe.
///
/// # Examples
///
/// ```rust
/// use mediaprobe_core::config::ProbeConfigBuilder;
/// use std::time::Duration;
///
/// let config = ProbeConfigBuilder::new()
///     .ffprobe_path("/usr/local/bin/ffprobe")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// assert_eq!(config.timeout, Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// ffprobe executable, either a bare name looked up in `PATH` or a path
    pub ffprobe_path: PathBuf,

    /// Wall-clock bound on one ffprobe run; the process is killed after it
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: PathBuf::from(DEFAULT_FFPROBE_PATH),
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

impl ProbeConfig {
    /// Defaults overlaid with the environment, falling back to the defaults
    /// (with a warning) when a variable cannot be parsed.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|e| {
            log::warn!("Ignoring probe configuration from environment: {}", e);
            Self::default()
        })
    }

    /// Defaults overlaid with `MEDIAPROBE_FFPROBE` and
    /// `MEDIAPROBE_PROBE_TIMEOUT_SECS`.
    pub fn try_from_env() -> CoreResult<Self> {
        let mut builder = ProbeConfigBuilder::new();

        if let Some(path) = env::var_os(ENV_FFPROBE_PATH) {
            builder = builder.ffprobe_path(path);
        }

        if let Ok(raw) = env::var(ENV_PROBE_TIMEOUT_SECS) {
            let secs = parse_timeout_secs(&raw)?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.ffprobe_path.as_os_str().is_empty() {
            return Err(CoreError::Config("ffprobe path must not be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(CoreError::Config("probe timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}

/// Parses a timeout given in whole seconds.
pub fn parse_timeout_secs(raw: &str) -> CoreResult<u64> {
    raw.trim().parse::<u64>().map_err(|e| {
        CoreError::Config(format!(
            "{} must be a whole number of seconds, got '{}': {}",
            ENV_PROBE_TIMEOUT_SECS, raw, e
        ))
    })
}
