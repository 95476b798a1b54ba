//! Log output for the binary.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install a subscriber writing to stderr.
///
/// Does nothing unless `LISPY_LOG` (or, failing that, `RUST_LOG`) holds a
/// filter such as `lispy_eval=trace`. With `LISPY_LOG_TREE` set, spans are
/// drawn as an indented tree instead of flat lines. Safe to call more than
/// once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(directives) = std::env::var("LISPY_LOG").or_else(|_| std::env::var("RUST_LOG"))
        else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let registry = tracing_subscriber::registry().with(filter);

        let installed = if std::env::var_os("LISPY_LOG_TREE").is_some() {
            registry
                .with(HierarchicalLayer::new(2).with_targets(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .try_init()
        };

        if let Err(error) = installed {
            eprintln!("warning: could not install log subscriber: {error}");
        }
    });
}
