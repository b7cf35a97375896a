//! `mediaprobe streams`: probe a file and list its streams.

use std::error::Error;
use std::path::Path;
use std::time::Duration;

use mediaprobe_core::{
    CommandFfprobeExecutor, CoreResult, MediaFile, MediaStream, ProbeConfig, ProbeConfigBuilder,
};
use serde::Serialize;

use crate::cli::StreamsArgs;
use crate::output::{print_heading, print_info, print_stream};

/// Probe configuration from the command line. clap already folds the
/// `MEDIAPROBE_*` environment variables into the arguments.
pub fn probe_config(args: &StreamsArgs) -> CoreResult<ProbeConfig> {
    let mut builder = ProbeConfigBuilder::new();
    if let Some(path) = &args.ffprobe {
        builder = builder.ffprobe_path(path);
    }
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

#[derive(Serialize)]
struct StreamsReport<'a> {
    path: &'a Path,
    streams: &'a [&'a MediaStream],
}

pub fn run_streams(args: StreamsArgs) -> Result<(), Box<dyn Error>> {
    let executor = CommandFfprobeExecutor::new(probe_config(&args)?);
    let file = MediaFile::probe_with(&executor, &args.input)?;

    let streams: Vec<&MediaStream> = match args.kind {
        Some(kind) => file.streams_of_kind(kind),
        None => file.streams().iter().collect(),
    };

    if args.json {
        let report = StreamsReport {
            path: file.path(),
            streams: &streams,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_heading(&file.path().display().to_string());
    match args.kind {
        Some(kind) => print_info(&format!("{} streams", kind), streams.len()),
        None => print_info("Streams", streams.len()),
    }
    for stream in streams {
        print_stream(stream);
    }
    Ok(())
}
