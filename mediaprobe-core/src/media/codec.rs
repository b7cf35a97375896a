//! Stream kind and codec classification
//!
//! ffprobe reports a stream's category in `codec_type` and its encoding in
//! `codec_name`. Both are mapped here onto closed enumerations:
//! - an unknown `codec_type` is not an error, the stream is simply not one we
//!   model (data, attachment, ...) and callers skip it;
//! - an unknown `codec_name` is reported as `None` and the builder turns it
//!   into a hard error when the stream kind is one we do model.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Broad category of a media stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
}

impl StreamKind {
    pub const ALL: [StreamKind; 3] = [StreamKind::Video, StreamKind::Audio, StreamKind::Subtitle];

    /// Maps an ffprobe `codec_type` onto a supported kind.
    ///
    /// Returns `None` for every other value, which means "skip this stream".
    pub fn classify(raw: &str) -> Option<StreamKind> {
        match raw {
            "video" => Some(StreamKind::Video),
            "audio" => Some(StreamKind::Audio),
            "subtitle" => Some(StreamKind::Subtitle),
            _ => None,
        }
    }

    /// The spelling ffprobe uses for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamKind::Video => "video",
            StreamKind::Audio => "audio",
            StreamKind::Subtitle => "subtitle",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`StreamKind`] from user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stream kind '{0}' (expected video, audio or subtitle)")]
pub struct ParseStreamKindError(String);

impl FromStr for StreamKind {
    type Err = ParseStreamKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StreamKind::classify(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| ParseStreamKindError(s.to_string()))
    }
}

/// Codecs this library knows how to reason about.
///
/// Each codec belongs to exactly one [`StreamKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    // Video
    H264,
    Hevc,
    Av1,
    Vp8,
    Vp9,
    Mpeg2Video,
    Mpeg4,

    // Audio
    Aac,
    Ac3,
    Eac3,
    Dts,
    TrueHd,
    Flac,
    Opus,
    Vorbis,
    Mp3,
    PcmS16Le,
    PcmS24Le,

    // Subtitle
    Ass,
    Ssa,
    SubRip,
    WebVtt,
    MovText,
    HdmvPgs,
    DvdSubtitle,
}

impl Codec {
    /// Every known codec, grouped by kind.
    pub const ALL: [Codec; 25] = [
        Codec::H264,
        Codec::Hevc,
        Codec::Av1,
        Codec::Vp8,
        Codec::Vp9,
        Codec::Mpeg2Video,
        Codec::Mpeg4,
        Codec::Aac,
        Codec::Ac3,
        Codec::Eac3,
        Codec::Dts,
        Codec::TrueHd,
        Codec::Flac,
        Codec::Opus,
        Codec::Vorbis,
        Codec::Mp3,
        Codec::PcmS16Le,
        Codec::PcmS24Le,
        Codec::Ass,
        Codec::Ssa,
        Codec::SubRip,
        Codec::WebVtt,
        Codec::MovText,
        Codec::HdmvPgs,
        Codec::DvdSubtitle,
    ];

    /// Looks up an ffprobe `codec_name`. Matching is exact.
    pub fn classify(raw: &str) -> Option<Codec> {
        let codec = match raw {
            "h264" => Codec::H264,
            "hevc" => Codec::Hevc,
            "av1" => Codec::Av1,
            "vp8" => Codec::Vp8,
            "vp9" => Codec::Vp9,
            "mpeg2video" => Codec::Mpeg2Video,
            "mpeg4" => Codec::Mpeg4,
            "aac" => Codec::Aac,
            "ac3" => Codec::Ac3,
            "eac3" => Codec::Eac3,
            "dts" => Codec::Dts,
            "truehd" => Codec::TrueHd,
            "flac" => Codec::Flac,
            "opus" => Codec::Opus,
            "vorbis" => Codec::Vorbis,
            "mp3" => Codec::Mp3,
            "pcm_s16le" => Codec::PcmS16Le,
            "pcm_s24le" => Codec::PcmS24Le,
            "ass" => Codec::Ass,
            "ssa" => Codec::Ssa,
            "subrip" => Codec::SubRip,
            "webvtt" => Codec::WebVtt,
            "mov_text" => Codec::MovText,
            "hdmv_pgs_subtitle" => Codec::HdmvPgs,
            "dvd_subtitle" => Codec::DvdSubtitle,
            _ => return None,
        };
        Some(codec)
    }

    pub fn kind(&self) -> StreamKind {
        match self {
            Codec::H264
            | Codec::Hevc
            | Codec::Av1
            | Codec::Vp8
            | Codec::Vp9
            | Codec::Mpeg2Video
            | Codec::Mpeg4 => StreamKind::Video,
            Codec::Aac
            | Codec::Ac3
            | Codec::Eac3
            | Codec::Dts
            | Codec::TrueHd
            | Codec::Flac
            | Codec::Opus
            | Codec::Vorbis
            | Codec::Mp3
            | Codec::PcmS16Le
            | Codec::PcmS24Le => StreamKind::Audio,
            Codec::Ass
            | Codec::Ssa
            | Codec::SubRip
            | Codec::WebVtt
            | Codec::MovText
            | Codec::HdmvPgs
            | Codec::DvdSubtitle => StreamKind::Subtitle,
        }
    }

    /// The `codec_name` ffprobe reports for this codec.
    pub fn as_str(&self) -> &'static str {
        match self {
            Codec::H264 => "h264",
            Codec::Hevc => "hevc",
            Codec::Av1 => "av1",
            Codec::Vp8 => "vp8",
            Codec::Vp9 => "vp9",
            Codec::Mpeg2Video => "mpeg2video",
            Codec::Mpeg4 => "mpeg4",
            Codec::Aac => "aac",
            Codec::Ac3 => "ac3",
            Codec::Eac3 => "eac3",
            Codec::Dts => "dts",
            Codec::TrueHd => "truehd",
            Codec::Flac => "flac",
            Codec::Opus => "opus",
            Codec::Vorbis => "vorbis",
            Codec::Mp3 => "mp3",
            Codec::PcmS16Le => "pcm_s16le",
            Codec::PcmS24Le => "pcm_s24le",
            Codec::Ass => "ass",
            Codec::Ssa => "ssa",
            Codec::SubRip => "subrip",
            Codec::WebVtt => "webvtt",
            Codec::MovText => "mov_text",
            Codec::HdmvPgs => "hdmv_pgs_subtitle",
            Codec::DvdSubtitle => "dvd_subtitle",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Codec::H264 => "H.264 / AVC",
            Codec::Hevc => "H.265 / HEVC",
            Codec::Av1 => "AOMedia Video 1",
            Codec::Vp8 => "On2 VP8",
            Codec::Vp9 => "Google VP9",
            Codec::Mpeg2Video => "MPEG-2 video",
            Codec::Mpeg4 => "MPEG-4 part 2",
            Codec::Aac => "AAC (Advanced Audio Coding)",
            Codec::Ac3 => "ATSC A/52A (AC-3)",
            Codec::Eac3 => "ATSC A/52B (E-AC-3)",
            Codec::Dts => "DCA (DTS Coherent Acoustics)",
            Codec::TrueHd => "TrueHD",
            Codec::Flac => "FLAC (Free Lossless Audio Codec)",
            Codec::Opus => "Opus",
            Codec::Vorbis => "Vorbis",
            Codec::Mp3 => "MP3 (MPEG audio layer 3)",
            Codec::PcmS16Le => "PCM signed 16-bit little-endian",
            Codec::PcmS24Le => "PCM signed 24-bit little-endian",
            Codec::Ass => "ASS (Advanced SSA) subtitle",
            Codec::Ssa => "SSA (SubStation Alpha) subtitle",
            Codec::SubRip => "SubRip subtitle",
            Codec::WebVtt => "WebVTT subtitle",
            Codec::MovText => "3GPP Timed Text subtitle",
            Codec::HdmvPgs => "HDMV Presentation Graphic Stream subtitles",
            Codec::DvdSubtitle => "DVD subtitles",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Codec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
