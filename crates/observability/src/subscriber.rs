//! Subscriber installation.
//!
//! Native targets log JSON lines with timestamps. In the browser there is no
//! clock source for the fmt timer and no stdout, so events are written as
//! plain text to the devtools console instead.

use tracing_subscriber::EnvFilter;

use crate::DEFAULT_DIRECTIVE;

/// Build the level filter. `RUST_LOG` wins over `directive` when set.
pub fn filter(directive: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| directive_filter(directive.unwrap_or(DEFAULT_DIRECTIVE)))
}

/// Filter for `directive` alone; an unparsable directive yields the default.
pub fn directive_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Safe to call multiple times (subsequent calls are no-ops).
#[cfg(not(target_arch = "wasm32"))]
pub fn init(directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(directive))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Safe to call multiple times (subsequent calls are no-ops).
#[cfg(target_arch = "wasm32")]
pub fn init(directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(directive))
        .with_writer(crate::console::ConsoleWriter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn init_twice_is_a_noop() {
        init(Some("debug"));
        init(None);
        tracing::info!("still logging after repeated init");
    }

    #[test]
    fn invalid_directive_falls_back_to_default() {
        let filter = directive_filter("marketplace=loudest");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn valid_directive_sets_the_level() {
        assert_eq!(directive_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(directive_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }
}
