use env_logger::Env;

/// Initialize the logger, `RUST_LOG` overrides the default `info` filter.
///
/// Calling it more than once is harmless, later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .try_init();
}
