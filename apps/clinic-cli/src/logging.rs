use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `-v` picks the level for the
/// clinic crates (warn, info, debug, trace) and everything else stays at warn.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("logging already initialized: {e}");
    }
}

fn level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn default_filter(verbose: u8) -> EnvFilter {
    let level = level(verbose);
    EnvFilter::new(format!(
        "warn,clinic_cli={level},clinic_api={level},clinic_http={level}"
    ))
}
