use tracing_subscriber::filter::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let filter = match std::env::var_os("RUST_LOG") {
        Some(_) => EnvFilter::try_from_default_env().unwrap_or_else(|e| {
            eprintln!("Invalid RUST_LOG ({}), falling back to info", e);
            EnvFilter::new("info")
        }),
        None => EnvFilter::new("info"),
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
