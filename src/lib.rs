//! Snipbar — capture toolbar layout for a screenshot tool.
//!
//! This is the library shell that wires together:
//! - Screen geometry (geometry.rs)
//! - Button layout engine (buttons/)
//! - Button configuration (config.rs)
//! - Capture selection session (capture/)

pub mod buttons;
pub mod capture;
pub mod config;
pub mod geometry;

pub use buttons::{ButtonHandler, ButtonKind, CaptureButton, PlaceableItem, Side};
pub use capture::CaptureSession;
pub use config::ButtonConfig;
pub use geometry::{Point, Rect, Region};

/// Installs the `env_logger` backend. Honors `RUST_LOG`; safe to call twice.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("Snipbar logging initialized");
    }
}
