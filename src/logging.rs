//! helpers for logging.

/// Log to stderr, `info` level unless `RUST_LOG` says otherwise.
///
/// If called multiple times in the same process, only applies once.
pub fn init() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format_timestamp_millis()
            .init();
    });
}
