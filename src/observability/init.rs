//! Tracing initialization.

use crate::Config;
use tracing::Level;

/// Default level when neither `RUST_LOG` nor the configuration names one.
const DEFAULT_LEVEL: &str = "info";

/// Parses a level name, case-insensitively. Unknown names fall back to `INFO`.
#[must_use]
pub fn parse_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::INFO)
}

/// Installs the global tracing subscriber for this target.
///
/// Idempotent: only the first call takes effect, later calls are no-ops.
///
/// # Example
///
/// ```rust
/// use leavedesk_landing::observability::init_tracing;
/// use leavedesk_landing::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    install(level);
}

#[cfg(target_arch = "wasm32")]
fn install(level: &str) {
    use std::sync::Once;

    static INIT: Once = Once::new();
    let level = parse_level(level);
    INIT.call_once(|| {
        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build();
        tracing_wasm::set_as_global_default_with_config(config);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false));

    let _ = subscriber.try_init();
}

/// Filter used when `RUST_LOG` is unset: the configured level, or `INFO` if it
/// is not a level name.
#[cfg(not(target_arch = "wasm32"))]
fn default_filter(level: &str) -> tracing_subscriber::EnvFilter {
    let level = tracing_subscriber::filter::LevelFilter::from_level(parse_level(level));
    tracing_subscriber::EnvFilter::default().add_directive(level.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("chatty"), Level::INFO);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn unknown_native_level_falls_back_to_info() {
        use tracing_subscriber::filter::LevelFilter;

        assert_eq!(default_filter("chatty").max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(default_filter("Debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing(&Config::default());
        init_tracing(&Config {
            trace_level: Some("trace".to_string()),
            ..Config::default()
        });
        tracing::debug!("still logging");
    }
}
