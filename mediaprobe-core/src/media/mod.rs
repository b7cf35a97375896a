//! Media file model
//!
//! Classification of ffprobe stream types and codecs, the per-stream record
//! and the file-level aggregate built from an ffprobe report.

pub mod codec;
pub mod file;
pub mod stream;

// Re-export commonly used types
pub use codec::{Codec, ParseStreamKindError, StreamKind};
pub use file::MediaFile;
pub use stream::MediaStream;
