// mediaprobe-cli/src/output.rs
//
// Console formatting helpers. Styling is dropped automatically by `console`
// when stdout is not a terminal.

use console::style;
use mediaprobe_core::{Codec, MediaStream, StreamKind};
use std::fmt::Display;

/// Print a heading with clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);
    println!("{}", style(&line).blue().bright());
    println!("{}", style(format!(" {} ", text)).bold());
    println!("{}", style(&line).blue().bright());
}

/// Print a section heading (smaller than main heading)
pub fn print_section(text: &str) {
    println!("\n{}", style(format!(" {} ", text)).bold());
    println!("{}", style("-".repeat(40)).blue());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", style(label).cyan().bright(), value);
}

pub fn print_stream(stream: &MediaStream) {
    println!("  {}", describe_stream(stream));
}

pub fn print_codec(codec: Codec) {
    println!(
        "  {:<20} {:<9} {}",
        style(codec.as_str()).bold(),
        codec.kind(),
        codec.long_name()
    );
}

/// One-line summary of a stream, e.g.
/// `#1  audio     aac         jpn 2ch 48000Hz "Japanese" [default]`.
pub fn describe_stream(stream: &MediaStream) -> String {
    let mut line = format!(
        "#{:<3}{:<10}{:<12}",
        stream.id(),
        stream.kind().as_str(),
        stream.codec().as_str()
    );

    let mut details: Vec<String> = Vec::new();
    match stream.kind() {
        StreamKind::Video => {
            if let (Some(w), Some(h)) = (stream.width(), stream.height()) {
                details.push(format!("{}x{}", w, h));
            }
        }
        StreamKind::Audio => {
            if let Some(lang) = stream.language() {
                details.push(lang.to_string());
            }
            if let Some(channels) = stream.channels() {
                details.push(format!("{}ch", channels));
            }
            if let Some(rate) = stream.sample_rate() {
                details.push(format!("{}Hz", rate));
            }
        }
        StreamKind::Subtitle => {
            if let Some(lang) = stream.language() {
                details.push(lang.to_string());
            }
        }
    }
    if let Some(title) = stream.title() {
        details.push(format!("\"{}\"", title));
    }
    if stream.is_default() {
        details.push("[default]".to_string());
    }
    if stream.is_forced() {
        details.push("[forced]".to_string());
    }

    line.push_str(&details.join(" "));
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_describe_audio_stream() {
        let stream = MediaStream::new(
            1,
            Codec::Aac,
            json!({
                "channels": 2,
                "sample_rate": "48000",
                "disposition": { "default": 1 },
                "tags": { "language": "jpn", "title": "Japanese" }
            }),
        );
        assert_eq!(
            describe_stream(&stream),
            "#1  audio     aac         jpn 2ch 48000Hz \"Japanese\" [default]"
        );
    }

    #[test]
    fn test_describe_bare_video_stream() {
        let stream = MediaStream::new(0, Codec::H264, json!({}));
        assert_eq!(describe_stream(&stream), "#0  video     h264");
    }

    #[test]
    fn test_describe_forced_subtitle() {
        let stream = MediaStream::new(
            12,
            Codec::SubRip,
            json!({ "disposition": { "forced": 1 }, "tags": { "language": "eng" } }),
        );
        assert_eq!(describe_stream(&stream), "#12 subtitle  subrip      eng [forced]");
    }
}
