//! Logging initialization.
//!
//! Off unless `TRUD_LOG` (or `RUST_LOG`) is set, e.g.
//! `TRUD_LOG=trud_eval=debug`. `TRUD_LOG_TREE=1` renders spans as an
//! indented call tree, which follows the recursion of the evaluator.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("TRUD_LOG").or_else(|_| std::env::var("RUST_LOG"))
        else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let tree = std::env::var("TRUD_LOG_TREE").is_ok_and(|v| v == "1");

        let result = if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .try_init()
        };
        if let Err(err) = result {
            eprintln!("warning: could not initialize logging: {err}");
        }
    });
}
