//! Logging setup for the binary

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::GlobalOpts;

/// Directive used when `RUST_LOG` is not set
fn default_directive(global: &GlobalOpts) -> &'static str {
    if global.verbose {
        "xenrich=debug"
    } else if global.quiet {
        "warn"
    } else {
        "xenrich=info"
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over the CLI flags.
pub fn init_logging(global: &GlobalOpts) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(global)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(quiet: bool, verbose: bool) -> GlobalOpts {
        GlobalOpts { quiet, verbose }
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(&opts(false, false)), "xenrich=info");
        assert_eq!(default_directive(&opts(true, false)), "warn");
        assert_eq!(default_directive(&opts(false, true)), "xenrich=debug");
    }
}
