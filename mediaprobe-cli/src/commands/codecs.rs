//! `mediaprobe codecs`: list the codec table.

use mediaprobe_core::{Codec, StreamKind};

use crate::cli::CodecsArgs;
use crate::output::{print_codec, print_section};

/// Codecs of `kind`, or all of them, in table order.
pub fn known_codecs(kind: Option<StreamKind>) -> Vec<Codec> {
    Codec::ALL
        .into_iter()
        .filter(|codec| kind.is_none_or(|k| codec.kind() == k))
        .collect()
}

pub fn run_codecs(args: CodecsArgs) {
    let kinds: Vec<StreamKind> = match args.kind {
        Some(kind) => vec![kind],
        None => StreamKind::ALL.to_vec(),
    };

    for kind in kinds {
        print_section(&format!("{} codecs", kind));
        for codec in known_codecs(Some(kind)) {
            print_codec(codec);
        }
    }
}
