// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tracing setup shared by the binaries.
//!
//! Logs go to stderr so that tables, CSV and OEIS lines on stdout stay
//! machine-readable. `RUST_LOG` overrides the verbosity flag.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default level for a `-v` count: warn, info, debug, then trace.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Call once, at the start of `main`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose).to_string()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
