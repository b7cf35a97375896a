// mediaprobe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use mediaprobe_core::StreamKind;
use mediaprobe_core::config::{ENV_FFPROBE_PATH, ENV_PROBE_TIMEOUT_SECS};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mediaprobe: inspect the stream layout of media files",
    long_about = "Runs ffprobe on a media file and lists its video, audio and subtitle streams \
                  in stream order, using the mediaprobe-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists the supported streams of a media file
    Streams(StreamsArgs),

    /// Lists the codecs mediaprobe recognizes
    Codecs(CodecsArgs),
}

#[derive(Parser, Debug)]
pub struct StreamsArgs {
    /// Media file to probe
    #[arg(required = true, value_name = "FILE")]
    pub input: PathBuf,

    /// Only show streams of this kind (video, audio, subtitle)
    #[arg(short, long, value_name = "KIND")]
    pub kind: Option<StreamKind>,

    /// Print the result as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Seconds to wait for ffprobe before giving up (default: 60)
    #[arg(long, value_name = "SECONDS", env = ENV_PROBE_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// ffprobe executable to run (default: ffprobe from PATH)
    #[arg(long, value_name = "PATH", env = ENV_FFPROBE_PATH)]
    pub ffprobe: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CodecsArgs {
    /// Only show codecs of this kind (video, audio, subtitle)
    #[arg(short, long, value_name = "KIND")]
    pub kind: Option<StreamKind>,
}
