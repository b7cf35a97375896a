// ============================================================================
// mediaprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// The library logs through the `log` facade; the CLI installs env_logger as
// the backend. RUST_LOG wins when set:
// - default: warnings and errors only
// - RUST_LOG=info: normal operation
// - RUST_LOG=debug (or --verbose): commands run, skipped streams
// - RUST_LOG=trace: everything

use log::LevelFilter;

/// Installs env_logger. Logs go to stderr so stdout stays parseable.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Logger initialized with default level {}", default_level);
}
