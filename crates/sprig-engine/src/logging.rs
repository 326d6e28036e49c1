//! Logger initialization.
//!
//! Centralizes `env_logger` setup behind the `log` facade; the rest of the
//! engine only ever uses `log::...` macros.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// Filter precedence: the `env_filter` argument, then the `RUST_LOG`
/// environment variable, then `info`.
pub fn init_logging(env_filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
