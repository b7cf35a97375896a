// mediaprobe-cli/src/lib.rs
//
// Library portion of the mediaprobe CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, CodecsArgs, Commands, StreamsArgs};
pub use commands::codecs::run_codecs;
pub use commands::streams::run_streams;
