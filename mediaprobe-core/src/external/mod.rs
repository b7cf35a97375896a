// ============================================================================
// mediaprobe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interaction with the ffprobe command-line tool
//
// The stream layout builder never spawns processes itself. It asks an
// FfprobeExecutor for the JSON report of a file, which keeps the builder
// testable with canned reports and lets callers swap the ffprobe binary or
// the probing strategy.
//
// KEY COMPONENTS:
// - FfprobeExecutor: trait seam for obtaining a probe report
// - CommandFfprobeExecutor: runs the ffprobe binary with a bounded wait
// - MockFfprobeExecutor: canned reports for tests (test-mocks feature)

// ============================================================================
// SUBMODULES
// ============================================================================

/// Traits and implementations for executing ffprobe
pub mod ffprobe_executor;

/// Mock executor used by tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::{CommandFfprobeExecutor, FfprobeExecutor, is_available};

#[cfg(any(test, feature = "test-mocks"))]
pub use mocks::{MockFfprobeExecutor, MockResponse};
