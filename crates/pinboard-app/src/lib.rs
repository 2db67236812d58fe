//! Pinboard application shell.
//!
//! Hosts the annotation widget over a scrollable demo page: the interaction
//! overlay, composer/editor/marker views, floating controls, and the native
//! capability implementations (toasts, confirm dialogs).

mod app;
mod host;
mod overlay;
mod views;

pub use app::PinboardApp;
