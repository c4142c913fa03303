#![doc(test(attr(deny(warnings))))]

//! Tracker Core offers the ledger aggregation, recurrence, and persistence
//! primitives that power a personal finance tracking app. The presentation
//! layer is an external collaborator and drives the crate exclusively
//! through [`core::Tracker`].

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod time;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Tracker Core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("tracker_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
