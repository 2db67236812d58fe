//! Full-viewport loading overlay shown while a remote operation is
//! outstanding.

use egui::{Align2, Color32, Context, Order, Sense, vec2};

/// Cover the viewport with a translucent layer that swallows pointer input,
/// plus a spinner and label. Advisory rather than a lock: it discourages
/// further input while a request is in flight.
pub fn loading_overlay(ctx: &Context, visible: bool) {
    if !visible {
        return;
    }

    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("pinboard-loading"))
        .order(Order::Tooltip)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            // Claim the whole viewport so clicks do not reach anything below.
            let _blocker = ui.allocate_rect(screen, Sense::click_and_drag());

            ui.painter().rect_filled(
                screen,
                egui::CornerRadius::ZERO,
                Color32::from_black_alpha(90),
            );

            let spinner_rect =
                egui::Rect::from_center_size(screen.center(), vec2(40.0, 40.0));
            ui.put(spinner_rect, egui::Spinner::new().size(36.0));

            ui.painter().text(
                screen.center() + vec2(0.0, 36.0),
                Align2::CENTER_CENTER,
                "Loading...",
                egui::FontId::proportional(14.0),
                Color32::WHITE,
            );
        });

    // Spinner animation needs continuous frames while visible.
    ctx.request_repaint();
}
