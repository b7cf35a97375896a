// mediaprobe-core/tests/media_file_tests.rs
//
// Builds MediaFile values from canned ffprobe reports through the mock
// executor and checks the ordering, filtering and failure behavior.

use mediaprobe_core::external::{MockFfprobeExecutor, MockResponse};
use mediaprobe_core::{Codec, CoreError, MediaFile, MediaStream, StreamKind};
use serde_json::{Value, json};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

const MOVIE: &str = "/library/movie.mkv";

fn ids<'a>(streams: impl IntoIterator<Item = &'a MediaStream>) -> Vec<u32> {
    streams.into_iter().map(MediaStream::id).collect()
}

fn probe(document: Value) -> Result<MediaFile, CoreError> {
    let executor = MockFfprobeExecutor::new().with_document(MOVIE, document);
    MediaFile::probe_with(&executor, MOVIE)
}

fn typical_report() -> Value {
    json!({ "streams": [
        { "index": 0, "codec_type": "video", "codec_name": "h264", "width": 1920, "height": 1080 },
        { "index": 1, "codec_type": "audio", "codec_name": "aac",
          "channels": 2, "sample_rate": "48000", "tags": { "language": "jpn" } },
        { "index": 2, "codec_type": "data", "codec_name": "bin_data" }
    ]})
}

#[test]
fn test_typical_report() {
    let file = probe(typical_report()).unwrap();

    assert_eq!(ids(file.streams()), vec![0, 1]);
    assert_eq!(file.streams()[0].codec(), Codec::H264);
    assert_eq!(file.streams()[1].codec(), Codec::Aac);
    assert_eq!(ids(file.streams_of_kind(StreamKind::Video)), vec![0]);
    assert_eq!(ids(file.streams_of_kind(StreamKind::Audio)), vec![1]);
    assert!(file.streams_of_kind(StreamKind::Subtitle).is_empty());

    let video = &file.streams()[0];
    assert_eq!((video.width(), video.height()), (Some(1920), Some(1080)));
    assert_eq!(file.streams()[1].language(), Some("jpn"));
}

#[test]
fn test_unknown_codec_fails_the_whole_file() {
    let report = json!({ "streams": [
        { "index": 0, "codec_type": "video", "codec_name": "h264" },
        { "index": 1, "codec_type": "audio", "codec_name": "unknown_xyz" },
        { "index": 2, "codec_type": "data", "codec_name": "bin_data" }
    ]});

    match probe(report) {
        Err(CoreError::UnsupportedCodec { codec, .. }) => assert_eq!(codec, "unknown_xyz"),
        other => panic!("expected UnsupportedCodec, got {:?}", other),
    }
}

#[test]
fn test_unknown_codec_on_unsupported_kind_is_ignored() {
    let report = json!({ "streams": [
        { "index": 0, "codec_type": "attachment", "codec_name": "ttf" },
        { "index": 1, "codec_type": "data", "codec_name": "whatever_this_is" },
        { "index": 2, "codec_type": "subtitle", "codec_name": "ass" }
    ]});

    let file = probe(report).unwrap();
    assert_eq!(ids(file.streams()), vec![2]);
}

#[test]
fn test_streams_are_sorted_regardless_of_report_order() {
    let report = json!({ "streams": [
        { "index": 5, "codec_type": "subtitle", "codec_name": "hdmv_pgs_subtitle" },
        { "index": 3, "codec_type": "audio", "codec_name": "truehd" },
        { "index": 0, "codec_type": "video", "codec_name": "hevc" },
        { "index": 4, "codec_type": "subtitle", "codec_name": "subrip" },
        { "index": 1, "codec_type": "audio", "codec_name": "eac3" }
    ]});

    let file = probe(report).unwrap();
    assert_eq!(ids(file.streams()), vec![0, 1, 3, 4, 5]);
    assert_eq!(ids(file.streams_of_kind(StreamKind::Audio)), vec![1, 3]);
    assert_eq!(ids(file.streams_of_kind(StreamKind::Subtitle)), vec![4, 5]);
}

#[test]
fn test_kind_filter_is_an_ordered_subset() {
    let report = json!({ "streams": [
        { "index": 7, "codec_type": "audio", "codec_name": "opus" },
        { "index": 2, "codec_type": "video", "codec_name": "vp9" },
        { "index": 3, "codec_type": "audio", "codec_name": "vorbis" },
        { "index": 9, "codec_type": "subtitle", "codec_name": "webvtt" }
    ]});

    let file = probe(report).unwrap();
    let all = ids(file.streams());
    let mut rebuilt = Vec::new();
    for kind in StreamKind::ALL {
        let subset = ids(file.streams_of_kind(kind));
        assert!(subset.windows(2).all(|w| w[0] < w[1]));
        assert!(subset.iter().all(|id| all.contains(id)));
        assert!(
            file.streams_of_kind(kind).iter().all(|s| s.codec().kind() == kind)
        );
        rebuilt.extend(subset);
    }
    rebuilt.sort_unstable();
    assert_eq!(rebuilt, all);
}

#[test]
fn test_duplicate_ids_keep_the_first_stream() {
    let report = json!({ "streams": [
        { "index": 1, "codec_type": "audio", "codec_name": "aac", "tags": { "language": "eng" } },
        { "index": 0, "codec_type": "video", "codec_name": "h264" },
        { "index": 1, "codec_type": "audio", "codec_name": "flac", "tags": { "language": "fre" } }
    ]});

    let file = probe(report).unwrap();
    assert_eq!(ids(file.streams()), vec![0, 1]);
    let audio = file.stream(1).unwrap();
    assert_eq!(audio.codec(), Codec::Aac);
    assert_eq!(audio.language(), Some("eng"));
}

#[test]
fn test_metadata_is_retained_verbatim() {
    let element = json!({
        "index": 0,
        "codec_type": "video",
        "codec_name": "av1",
        "profile": "Main",
        "side_data_list": [{ "side_data_type": "Mastering display metadata" }]
    });
    let file = probe(json!({ "streams": [element.clone()] })).unwrap();
    assert_eq!(file.streams()[0].metadata(), &element);
}

#[test]
fn test_timeout_propagates() {
    let executor = MockFfprobeExecutor::new()
        .with_response(MOVIE, MockResponse::Timeout(Duration::from_secs(60)));

    let err = MediaFile::probe_with(&executor, MOVIE).unwrap_err();
    assert!(err.is_timeout());
    assert!(!err.is_probe_failure());
}

#[test]
fn test_probe_failures_propagate() {
    let executor = MockFfprobeExecutor::new()
        .with_response(MOVIE, MockResponse::InvalidJson("expected value".to_string()));
    let err = MediaFile::probe_with(&executor, MOVIE).unwrap_err();
    assert!(matches!(err, CoreError::JsonParse(_)));
    assert!(err.is_probe_failure());

    let err = MediaFile::probe_with(&executor, "/library/elsewhere.mkv").unwrap_err();
    assert!(matches!(err, CoreError::InputNotFound(_)));

    let executor = MockFfprobeExecutor::new().with_response(MOVIE, MockResponse::NotFound);
    match MediaFile::probe_with(&executor, MOVIE) {
        Err(CoreError::InputNotFound(path)) => assert_eq!(path, PathBuf::from(MOVIE)),
        other => panic!("expected InputNotFound, got {:?}", other),
    }
}

#[test]
fn test_each_build_probes_once() {
    let executor = MockFfprobeExecutor::new().with_document(MOVIE, typical_report());
    MediaFile::probe_with(&executor, MOVIE).unwrap();
    MediaFile::probe_with(&executor, MOVIE).unwrap();
    assert_eq!(
        executor.received_calls(),
        vec![PathBuf::from(MOVIE), PathBuf::from(MOVIE)]
    );
}

#[test]
fn test_path_is_absolute_and_normalized() {
    let relative = Path::new("library/./shows/../movie.mkv");
    let executor = MockFfprobeExecutor::new().with_document(relative, typical_report());

    let file = MediaFile::probe_with(&executor, relative).unwrap();
    assert!(file.path().is_absolute());
    assert!(
        file.path()
            .components()
            .all(|c| !matches!(c, Component::CurDir | Component::ParentDir))
    );
    assert!(file.path().ends_with("library/movie.mkv"));
}

#[test]
fn test_media_file_serializes_streams() {
    let file = probe(typical_report()).unwrap();
    let json = serde_json::to_value(&file).unwrap();

    assert_eq!(json["path"], json!(file.path().to_string_lossy()));
    assert_eq!(json["streams"][0]["codec"], json!("h264"));
    assert_eq!(json["streams"][1]["id"], json!(1));
    assert_eq!(json["streams"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_media_file_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MediaFile>();
    assert_send_sync::<MediaStream>();
}
