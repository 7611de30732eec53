//! Structured logging for the viewer.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the command line says otherwise.
/// ggez's graphics stack is chatty at info.
pub const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn";

/// Build the filter: `RUST_LOG` wins, then `level`, then [`DEFAULT_FILTER`].
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) if !level.is_empty() => EnvFilter::new(format!("{},wgpu=warn,naga=warn", level)),
        _ => EnvFilter::new(DEFAULT_FILTER),
    })
}

/// Install the global subscriber: human-readable console output with
/// uptime timestamps and module paths.
pub fn init_logging(level: Option<&str>) {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_override_keeps_the_noise_down() {
        let filter = EnvFilter::new(format!("{},wgpu=warn,naga=warn", "debug"));
        let filter = format!("{}", filter);
        assert!(filter.contains("debug"));
        assert!(filter.contains("wgpu=warn"));
    }

    #[test]
    fn default_filter_parses() {
        let filter = format!("{}", EnvFilter::new(DEFAULT_FILTER));
        assert!(filter.contains("info"));
        assert!(filter.contains("naga=warn"));
    }
}
