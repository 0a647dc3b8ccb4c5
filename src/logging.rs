//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber for the process.
///
/// `RUST_LOG` wins when set; otherwise `fallback_level` is used, and `info`
/// if that does not parse either. Calling this more than once is harmless:
/// later calls leave the first subscriber in place.
pub fn init_tracing(fallback_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_repeatable() {
        init_tracing("debug");
        init_tracing("not a level [");
        tracing::info!("still logging");
    }
}
