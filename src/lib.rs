//! Core of the DSSC student clinic dashboard.
//!
//! A [`session::DashboardSession`] owns the student profile and the
//! appointment book, persists JSON snapshots through the local key-value
//! store, and surfaces outcomes through the notification scheduler. All
//! rendering, form binding, and image processing live outside this crate.

pub mod appointments;
pub mod config;
pub mod db;
pub mod format;
pub mod history;
pub mod notify;
pub mod profile;
pub mod session;
pub mod validation;

pub use session::DashboardSession;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding application.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
