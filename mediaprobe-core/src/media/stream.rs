//! A single classified stream of a media file.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use serde_json::Value;

use super::codec::{Codec, StreamKind};

/// One elementary track of a media file.
///
/// Identity is the ffprobe stream index: two `MediaStream`s with the same
/// `id` compare equal regardless of codec or metadata. The raw ffprobe
/// object for the stream is kept untouched in [`MediaStream::metadata`].
#[derive(Debug, Clone, Serialize)]
pub struct MediaStream {
    id: u32,
    codec: Codec,
    metadata: Value,
}

impl MediaStream {
    pub fn new(id: u32, codec: Codec, metadata: Value) -> Self {
        Self { id, codec, metadata }
    }

    /// ffprobe stream index.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn codec(&self) -> Codec {
        self.codec
    }

    pub fn kind(&self) -> StreamKind {
        self.codec.kind()
    }

    /// The raw ffprobe stream object.
    pub fn metadata(&self) -> &Value {
        &self.metadata
    }

    /// ISO 639 language tag, if the container declares one.
    pub fn language(&self) -> Option<&str> {
        self.tag("language")
    }

    pub fn title(&self) -> Option<&str> {
        self.tag("title")
    }

    pub fn is_default(&self) -> bool {
        self.disposition("default")
    }

    pub fn is_forced(&self) -> bool {
        self.disposition("forced")
    }

    pub fn width(&self) -> Option<u32> {
        self.u32_field("width")
    }

    pub fn height(&self) -> Option<u32> {
        self.u32_field("height")
    }

    pub fn channels(&self) -> Option<u32> {
        self.u32_field("channels")
    }

    /// Sample rate in Hz. ffprobe prints this one as a string.
    pub fn sample_rate(&self) -> Option<u32> {
        match self.metadata.get("sample_rate")? {
            Value::String(s) => s.parse().ok(),
            other => other.as_u64().and_then(|v| u32::try_from(v).ok()),
        }
    }

    fn tag(&self, key: &str) -> Option<&str> {
        self.metadata
            .get("tags")
            .and_then(|tags| tags.get(key))
            .and_then(Value::as_str)
    }

    fn disposition(&self, key: &str) -> bool {
        self.metadata
            .get("disposition")
            .and_then(|d| d.get(key))
            .and_then(Value::as_u64)
            == Some(1)
    }

    fn u32_field(&self, key: &str) -> Option<u32> {
        self.metadata
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
    }
}

impl PartialEq for MediaStream {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MediaStream {}

impl Hash for MediaStream {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for MediaStream {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MediaStream {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
