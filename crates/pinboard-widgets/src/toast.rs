//! Transient notification stack, rendered top-right with newest on top.

use egui::{Align2, Color32, Context, CornerRadius, Order, Stroke, vec2};
use std::time::{Duration, Instant};

use crate::{sizing, theme};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn accent(self) -> Color32 {
        match self {
            ToastLevel::Success => theme::SUCCESS,
            ToastLevel::Error => theme::DANGER,
            ToastLevel::Info => theme::ACCENT,
        }
    }
}

/// One transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    born: Instant,
}

/// Stack of live toasts.
#[derive(Debug, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast. Newest entries render on top.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.entries.insert(
            0,
            Toast {
                level,
                message: message.into(),
                born: Instant::now(),
            },
        );
    }

    /// Number of live toasts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries older than [`TOAST_TTL`] as of `now`.
    fn prune(&mut self, now: Instant) {
        self.entries
            .retain(|toast| now.duration_since(toast.born) < TOAST_TTL);
    }

    /// Render the stack and expire old entries.
    pub fn show(&mut self, ctx: &Context) {
        self.prune(Instant::now());
        if self.entries.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("pinboard-toasts"))
            .anchor(Align2::RIGHT_TOP, vec2(-12.0, 12.0))
            .order(Order::Tooltip)
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.entries {
                    let accent = toast.level.accent();
                    egui::Frame::new()
                        .fill(theme::PANEL_BG)
                        .corner_radius(CornerRadius::same(sizing::CORNER_RADIUS))
                        .stroke(Stroke::new(1.0, accent))
                        .inner_margin(egui::Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.message)
                                    .size(12.0)
                                    .color(theme::TEXT),
                            );
                        });
                    ui.add_space(4.0);
                }
            });

        // Keep repainting so toasts disappear without further input.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_on_top() {
        let mut toasts = Toasts::new();
        toasts.push(ToastLevel::Success, "first");
        toasts.push(ToastLevel::Error, "second");

        assert_eq!(toasts.entries[0].message, "second");
        assert_eq!(toasts.entries[1].message, "first");
    }

    #[test]
    fn test_prune_keeps_fresh_entries() {
        let mut toasts = Toasts::new();
        toasts.push(ToastLevel::Info, "fresh");
        toasts.prune(Instant::now());
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn test_prune_drops_expired_entries() {
        let mut toasts = Toasts::new();
        toasts.push(ToastLevel::Info, "old");
        toasts.prune(Instant::now() + TOAST_TTL + Duration::from_millis(1));
        assert!(toasts.is_empty());
    }
}
