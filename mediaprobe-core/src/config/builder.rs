// ============================================================================
// mediaprobe-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ProbeConfig
//
// Fluent construction of ProbeConfig with defaults for every field and
// validation on build().

use std::path::PathBuf;
use std::time::Duration;

use super::ProbeConfig;
use crate::error::CoreResult;

/// Builder for [`ProbeConfig`].
#[derive(Debug, Clone, Default)]
pub struct ProbeConfigBuilder {
    config: ProbeConfig,
}

impl ProbeConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ffprobe executable.
    pub fn ffprobe_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.ffprobe_path = path.into();
        self
    }

    /// Sets the bound on a single probe.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> CoreResult<ProbeConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
