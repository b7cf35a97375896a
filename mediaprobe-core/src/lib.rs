//! Typed stream layout of media files, built from ffprobe's JSON report.
//!
//! The crate runs ffprobe (bounded by a timeout), classifies every reported
//! stream into video, audio or subtitle, and exposes the result as an
//! immutable [`MediaFile`] whose streams are ordered by their ffprobe index.
//! Streams of other kinds (data, attachments) are ignored; a supported stream
//! using an unknown codec fails the whole probe.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediaprobe_core::{MediaFile, StreamKind};
//!
//! let file = MediaFile::of("/path/to/movie.mkv").unwrap();
//! for stream in file.streams_of_kind(StreamKind::Audio) {
//!     println!("#{} {} {:?}", stream.id(), stream.codec(), stream.language());
//! }
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod media;
pub mod util;

// Re-exports for public API
pub use config::{ProbeConfig, ProbeConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{CommandFfprobeExecutor, FfprobeExecutor};
pub use media::{Codec, MediaFile, MediaStream, StreamKind};
