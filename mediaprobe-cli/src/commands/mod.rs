//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// `codecs`: prints the codecs mediaprobe recognizes.
pub mod codecs;

/// `streams`: probes a media file and prints its stream layout.
pub mod streams;
