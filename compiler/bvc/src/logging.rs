//! Tracing setup for the command-line driver.

use std::sync::Once;

/// Filter directives for the driver, e.g. `BV_LOG=bv_eval=trace`.
pub const LOG_ENV: &str = "BV_LOG";

/// When set, events are printed as an indented span tree.
pub const LOG_TREE_ENV: &str = "BV_LOG_TREE";

static TRACING_INIT: Once = Once::new();

/// Install a global subscriber if `BV_LOG` or `RUST_LOG` is set.
///
/// Output goes to stderr so that evaluation results on stdout stay clean.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if let Ok(directives) = std::env::var(LOG_ENV) {
            EnvFilter::new(directives)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        if std::env::var_os(LOG_TREE_ENV).is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
