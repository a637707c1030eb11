//! The Lexi command-line front end.
//!
//! Everything here consumes the engine in `lexi_eval` through its public
//! surface: load lines, run, render errors, inspect state.
//!
//! - `commands` - file loading and the one-shot `lexi FILE` runner
//! - `repl` - the interactive shell
//! - `report` - error rendering with source context

pub mod commands;
pub mod repl;
pub mod report;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Silent unless `LEXI_LOG` or `RUST_LOG` holds a filter. `LEXI_LOG` wins
/// when both are set. With `LEXI_LOG_TREE=1`, spans are printed as an
/// indented tree instead of flat lines. All output goes to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = match std::env::var("LEXI_LOG") {
            Ok(directives) => EnvFilter::new(directives),
            Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
            Err(_) => return,
        };

        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var("LEXI_LOG_TREE").is_ok_and(|value| value == "1") {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    });
}
