//! # carte-client
//!
//! The business-card component itself: an owned state snapshot, a
//! two-state view controller, the orchestration service and pure
//! state-to-markup view projections.
//!
//! The embedding host provides the mount point, wires DOM events to
//! controller methods, and performs the actual file save; everything else
//! lives here.

pub mod controller;
pub mod error;
pub mod events;
pub mod service;
pub mod state;
pub mod views;

use tracing_subscriber::{fmt, EnvFilter};

pub use controller::CardController;
pub use error::ClientError;
pub use service::{CardService, DownloadPayload};
pub use state::{CardState, View};

/// Initialise the tracing stack. Called once by the host at startup.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("carte_client=debug,carte_store=debug,carte_media=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
