//! Reusable styled egui components.
//!
//! Domain-free building blocks for the Pinboard shell:
//!
//! - **Buttons**: labeled toggle and action buttons
//! - **Panels**: popup and toolbar frames
//! - **Toast**: transient notification stack
//! - **Loading**: full-viewport blocking overlay

pub mod buttons;
pub mod loading;
pub mod panels;
pub mod toast;

pub use buttons::{ActionButton, ToggleButton};
pub use loading::loading_overlay;
pub use panels::{panel_frame, toolbar_frame};
pub use toast::{Toast, ToastLevel, Toasts};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Control bar button height
    pub const CONTROL_HEIGHT: f32 = 24.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Destructive action color (red)
    pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);
    /// Success color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
