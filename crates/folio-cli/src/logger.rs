//! Logging setup for the folio CLI.
//!
//! Built on the `tracing` ecosystem. Verbosity is resolved in this
//! order: `--verbose`, `--quiet`, the `RUST_LOG` environment variable,
//! then an info-level default for the folio crates.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber. Call once, before any
/// logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("folio_cli=debug,folio_config=debug,folio_core=debug,folio_render=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("folio_cli=info,folio_config=info,folio_core=info,folio_render=info")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    // try_init so tests that call this repeatedly don't panic.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_harmless() {
        init_logger(false, false, true);
        init_logger(true, false, true);
    }
}
