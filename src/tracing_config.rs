//! Tracing configuration for debugging transform passes.
//!
//! Supports three output formats controlled by `UNAWAIT_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Boundary hits and detach statistics as an indented tree
//! UNAWAIT_LOG=debug UNAWAIT_LOG_FORMAT=tree cargo test
//!
//! # Every traversal boundary, as JSON
//! UNAWAIT_LOG="unawait_transform::traverse=trace" UNAWAIT_LOG_FORMAT=json cargo test
//! ```
//!
//! The subscriber is only initialised when `UNAWAIT_LOG` (or `RUST_LOG`) is
//! set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Read from the `UNAWAIT_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        Self::parse(&std::env::var("UNAWAIT_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `UNAWAIT_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("UNAWAIT_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `UNAWAIT_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr. Calling this more than once is harmless: later calls
/// leave the first subscriber in place.
pub fn init_tracing() {
    let has_unawait_log = std::env::var("UNAWAIT_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_unawait_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    let result = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };

    // A subscriber installed earlier (another test, the host binary) wins.
    if let Err(err) = result {
        tracing::debug!(%err, "[tracing_config] subscriber already initialised");
    }
}
