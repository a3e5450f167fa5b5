//! Log output for the driver.
//!
//! Nothing is installed unless `RUST_LOG` is set. `RUST_LOG` uses the usual
//! filter syntax (`scaly_parse=trace`, `debug`, ...). Setting
//! `SCALYC_LOG_TREE` switches from flat lines to indented span trees.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        if std::env::var_os("SCALYC_LOG_TREE").is_some() {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true)
                .with_writer(std::io::stderr);
            Registry::default().with(filter).with(tree_layer).init();
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
