//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given `-v` count.
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "rls_bug_tracker=warn",
        1 => "rls_bug_tracker=info",
        _ => "rls_bug_tracker=debug",
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `verbosity` when set. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "rls_bug_tracker=warn");
        assert_eq!(default_directive(1), "rls_bug_tracker=info");
        assert_eq!(default_directive(5), "rls_bug_tracker=debug");
    }
}
