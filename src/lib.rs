//! A small mailing-list sign-up service: one page, one table, three routes.
//!
//! `GET /` serves the sign-up form, `POST /add-email` stores whatever the
//! form submitted, `GET /emails` lists everything stored so far.

pub mod app;
pub mod config;
mod error;
pub mod model;
pub mod web;

// re-export
pub use app::{App, AppState};
pub use error::{Error, Result};

use tracing_subscriber::EnvFilter;

/// Tracing setup for production builds: compact single-line output,
/// `info` level unless `RUST_LOG` overrides it.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();
}

/// Tracing setup for debug builds.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(false)
        .init();
}
