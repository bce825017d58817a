//! Capture toolbar buttons — public API.
//!
//! Lays a set of square tool buttons out around the user's selection,
//! keeps per-side hit regions, and hides or shows the buttons as groups.

mod capture_button;
mod handler;
mod item;
pub mod placement;

pub use capture_button::{ButtonKind, CaptureButton, Visibility};
pub use handler::ButtonHandler;
pub use item::PlaceableItem;
pub use placement::{Side, SEPARATION};
