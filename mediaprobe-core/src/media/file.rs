//! Media files and their stream layout
//!
//! Responsibilities:
//! - Obtain an ffprobe report for a file through an [`FfprobeExecutor`]
//! - Classify every reported stream, skipping kinds we do not model and
//!   failing on codecs we do not know
//! - Assemble the immutable, id-ordered stream list of the file
//!
//! A `MediaFile` is built once and never changes afterwards. Duplicate
//! stream ids keep the first stream reported by ffprobe.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::{Path, PathBuf};

use log::{debug, error, warn};
use serde::Serialize;
use serde_json::Value;

use super::codec::{Codec, StreamKind};
use super::stream::MediaStream;
use crate::config::ProbeConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{CommandFfprobeExecutor, FfprobeExecutor};
use crate::util::path::absolute_normalized;

/// A media file and its supported streams, ordered by stream id.
#[derive(Debug, Clone, Serialize)]
pub struct MediaFile {
    path: PathBuf,
    streams: Vec<MediaStream>,
}

impl MediaFile {
    /// Probes `path` with ffprobe, configured from the environment
    /// (see [`ProbeConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// * probe failures (missing file, ffprobe missing or failing, bad JSON)
    /// * `CoreError::Timeout` when ffprobe runs past the configured bound
    /// * `CoreError::UnsupportedCodec` when a video, audio or subtitle stream
    ///   uses a codec outside the known table
    /// * `CoreError::MalformedProbe` when the report lacks required fields
    pub fn of<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let executor = CommandFfprobeExecutor::new(ProbeConfig::from_env());
        Self::probe_with(&executor, path)
    }

    /// Same as [`MediaFile::of`] with a caller supplied executor.
    pub fn probe_with<E, P>(executor: &E, path: P) -> CoreResult<Self>
    where
        E: FfprobeExecutor + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let document = executor.probe(path).inspect_err(|e| {
            error!("Probing {} failed: {}", path.display(), e);
        })?;
        Self::from_probe_output(path, &document)
    }

    /// Builds a `MediaFile` from an ffprobe report that was already obtained.
    pub fn from_probe_output<P: AsRef<Path>>(path: P, document: &Value) -> CoreResult<Self> {
        let streams = collect_streams(document)?;
        let path = absolute_normalized(path.as_ref())?;
        debug!("{}: {} supported stream(s)", path.display(), streams.len());
        Ok(Self { path, streams })
    }

    /// Absolute, lexically normalized path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All supported streams, ascending by id.
    pub fn streams(&self) -> &[MediaStream] {
        &self.streams
    }

    /// Streams whose codec belongs to `kind`, ascending by id.
    pub fn streams_of_kind(&self, kind: StreamKind) -> Vec<&MediaStream> {
        self.streams.iter().filter(|s| s.kind() == kind).collect()
    }

    /// The stream with the given ffprobe index, if it is a supported one.
    pub fn stream(&self, id: u32) -> Option<&MediaStream> {
        self.streams
            .binary_search_by_key(&id, MediaStream::id)
            .ok()
            .map(|i| &self.streams[i])
    }
}

fn collect_streams(document: &Value) -> CoreResult<Vec<MediaStream>> {
    let entries = document
        .get("streams")
        .and_then(Value::as_array)
        .ok_or_else(|| CoreError::MalformedProbe("missing 'streams' array".to_string()))?;

    let mut by_id: BTreeMap<u32, MediaStream> = BTreeMap::new();
    for (position, entry) in entries.iter().enumerate() {
        let Some(stream) = parse_stream(position, entry)? else {
            continue;
        };
        match by_id.entry(stream.id()) {
            Entry::Vacant(slot) => {
                slot.insert(stream);
            }
            Entry::Occupied(kept) => {
                warn!(
                    "Ignoring duplicate stream id {} at position {} (keeping the {} stream seen first)",
                    stream.id(),
                    position,
                    kept.get().codec()
                );
            }
        }
    }

    Ok(by_id.into_values().collect())
}

/// Classifies one element of the `streams` array. `Ok(None)` means the
/// stream kind is not one we model.
fn parse_stream(position: usize, entry: &Value) -> CoreResult<Option<MediaStream>> {
    if !entry.is_object() {
        return Err(CoreError::MalformedProbe(format!(
            "stream at position {} is not an object",
            position
        )));
    }

    let codec_type = required_str(entry, "codec_type", position)?;
    let Some(kind) = StreamKind::classify(codec_type) else {
        debug!(
            "Skipping stream at position {} with unsupported type '{}'",
            position, codec_type
        );
        return Ok(None);
    };

    let codec_name = required_str(entry, "codec_name", position)?;
    let codec = Codec::classify(codec_name).ok_or_else(|| CoreError::UnsupportedCodec {
        codec: codec_name.to_string(),
        position,
    })?;

    if codec.kind() != kind {
        warn!(
            "Stream at position {} reports type '{}' but codec '{}' is {}",
            position,
            kind,
            codec,
            codec.kind()
        );
    }

    let id = stream_id(entry, position)?;
    Ok(Some(MediaStream::new(id, codec, entry.clone())))
}

fn required_str<'a>(entry: &'a Value, key: &str, position: usize) -> CoreResult<&'a str> {
    entry.get(key).and_then(Value::as_str).ok_or_else(|| {
        CoreError::MalformedProbe(format!(
            "stream at position {} has no string '{}'",
            position, key
        ))
    })
}

fn stream_id(entry: &Value, position: usize) -> CoreResult<u32> {
    let id = match entry.get("index") {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    id.ok_or_else(|| {
        CoreError::MalformedProbe(format!(
            "stream at position {} has no valid 'index'",
            position
        ))
    })
}
