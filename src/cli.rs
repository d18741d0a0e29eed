//! Shared helpers for the command line binary.

use clap::builder::styling::{AnsiColor, Effects, Styles};

pub fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Cyan.on_default())
}

/// Install the global tracing subscriber. With a log file, events are
/// written there as JSON lines; otherwise they go to stderr as text.
pub fn logging_setup<W: std::io::Write + Send + 'static>(
    max_level: &tracing::Level,
    log_file: Option<W>,
) {
    use tracing_subscriber::fmt;
    match log_file {
        Some(file) => fmt()
            .json()
            .with_max_level(*max_level)
            .with_writer(std::sync::Mutex::new(file))
            .init(),
        None => fmt().with_max_level(*max_level).init(),
    }
}
