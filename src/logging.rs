use tracing_subscriber::EnvFilter;

/// Set up the tracing subscriber for the CLI.
///
/// Each repeat of `-v` lowers the threshold one step: warn by default,
/// then info, debug, and trace. A `RUST_LOG` filter, when present in the
/// environment, wins over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lunar_convert={level}")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
