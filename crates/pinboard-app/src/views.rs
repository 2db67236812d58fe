//! Anchored views: pin markers, the note composer, and the detail editor.

use egui::{
    Color32, Context, CursorIcon, Id, Key, Order, Pos2, Rect, RichText, Sense, Stroke, vec2,
};
use kurbo::{Point, Size};
use pinboard_core::{
    ComposerSession, InspectorSession, PageEnvironment, Pin, viewport_position,
};
use pinboard_widgets::{ActionButton, panel_frame, theme};

/// Marker diameter in logical pixels.
pub const MARKER_SIZE: f32 = 16.0;

const COMPOSER_WIDTH: f32 = 240.0;
const EDITOR_WIDTH: f32 = 260.0;

/// What the composer view asked for this frame.
pub enum ComposerAction {
    None,
    /// Valid submit with the raw draft text.
    Submit(String),
    Cancel,
}

/// What the editor view asked for this frame.
pub enum EditorAction {
    None,
    Close,
    /// Valid save with the replacement feedback text.
    Save(String),
    /// The user pressed remove; confirmation happens in the overlay.
    RemoveRequested,
}

fn to_pos2(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

fn measured_size(rect: Rect) -> Size {
    Size::new(rect.width() as f64, rect.height() as f64)
}

/// Viewport rectangle a marker occupies this frame.
pub fn marker_rect(pin: &Pin, env: &PageEnvironment) -> Rect {
    let shown = viewport_position(pin.position(), env.scroll);
    Rect::from_center_size(to_pos2(shown), vec2(MARKER_SIZE, MARKER_SIZE))
}

/// Draw one pin marker, re-projected from the current scroll offset.
/// Returns true when activated by click or keyboard.
pub fn marker(ctx: &Context, pin: &Pin, env: &PageEnvironment) -> bool {
    let rect = marker_rect(pin, env);
    let mut activated = false;

    egui::Area::new(Id::new(("pinboard-marker", &pin.id)))
        .order(Order::Foreground)
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(vec2(MARKER_SIZE, MARKER_SIZE), Sense::click());

            let keyed = response.has_focus()
                && ui.input(|i| i.key_pressed(Key::Enter) || i.key_pressed(Key::Space));
            activated = response.clicked() || keyed;

            if ui.is_rect_visible(rect) {
                let radius = if response.hovered() {
                    MARKER_SIZE / 2.0
                } else {
                    MARKER_SIZE / 2.0 - 1.0
                };
                ui.painter()
                    .circle_filled(rect.center(), radius, theme::ACCENT);
                ui.painter().circle_stroke(
                    rect.center(),
                    radius,
                    Stroke::new(2.0, Color32::WHITE),
                );
                if response.has_focus() {
                    ui.painter().circle_stroke(
                        rect.center(),
                        radius + 3.0,
                        Stroke::new(1.0, theme::ACCENT),
                    );
                }
            }

            response.on_hover_cursor(CursorIcon::PointingHand);
        });

    activated
}

/// Small dot marking the captured click position while the composer is open.
pub fn click_indicator(ctx: &Context, anchor: Point) {
    egui::Area::new(Id::new("pinboard-click-indicator"))
        .order(Order::Foreground)
        .interactable(false)
        .fixed_pos(to_pos2(anchor) - vec2(5.0, 5.0))
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 5.0, theme::ACCENT.gamma_multiply(0.7));
        });
}

/// The note-entry form, anchored at the captured click point and kept inside
/// the viewport once its size is known.
pub fn composer_popup(
    ctx: &Context,
    session: &mut ComposerSession,
    viewport: Size,
) -> ComposerAction {
    let position = session.position(viewport);
    let mut action = ComposerAction::None;

    let area = egui::Area::new(Id::new("pinboard-composer"))
        .order(Order::Foreground)
        .fixed_pos(to_pos2(position))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(COMPOSER_WIDTH);
                ui.label(
                    RichText::new("Add Feedback")
                        .size(13.0)
                        .strong()
                        .color(theme::TEXT),
                );
                ui.add_space(6.0);

                let edit = egui::TextEdit::multiline(session.draft.text_mut())
                    .desired_rows(4)
                    .desired_width(f32::INFINITY)
                    .hint_text("Enter your feedback here...");
                let edit_response = ui.add(edit);
                if ui.memory(|m| m.focused().is_none()) {
                    edit_response.request_focus();
                }

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ActionButton::new("Cancel").show(ui) {
                        action = ComposerAction::Cancel;
                    }
                    let submittable = session.draft.can_submit();
                    if ActionButton::new("Submit").enabled(submittable).show(ui) {
                        // submit() re-checks the gate, so a stale click can
                        // never push whitespace through.
                        if let Some(text) = session.draft.submit() {
                            action = ComposerAction::Submit(text);
                        }
                    }
                });
            });
        });

    session.measured = Some(measured_size(area.response.rect));
    action
}

/// The detail popup over one pin: view, edit, save, remove, dismiss.
pub fn editor_popup(
    ctx: &Context,
    session: &mut InspectorSession,
    pin: &Pin,
    viewport: Size,
) -> EditorAction {
    let position = session.position(viewport);
    let mut action = EditorAction::None;

    let area = egui::Area::new(Id::new("pinboard-editor"))
        .order(Order::Foreground)
        .fixed_pos(to_pos2(position))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(EDITOR_WIDTH);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Pin Details")
                            .size(13.0)
                            .strong()
                            .color(theme::TEXT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close = ui.add(
                            egui::Button::new(RichText::new("×").size(14.0)).frame(false),
                        );
                        if close.clicked() {
                            action = EditorAction::Close;
                        }
                    });
                });
                ui.add_space(6.0);

                if session.draft.is_editing() {
                    let edit = egui::TextEdit::multiline(session.draft.text_mut())
                        .desired_rows(4)
                        .desired_width(f32::INFINITY);
                    let edit_response = ui.add(edit);
                    if ui.memory(|m| m.focused().is_none()) {
                        edit_response.request_focus();
                    }
                } else {
                    ui.label(RichText::new(&pin.feedback).size(12.0).color(theme::TEXT));
                }

                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Created: {}", format_created_at(pin.created_at)))
                        .size(10.0)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    if session.draft.is_editing() {
                        if ActionButton::new("Cancel").show(ui) {
                            session.draft.cancel();
                        }
                        let savable = session.draft.can_save(&pin.feedback);
                        if ActionButton::new("Save").enabled(savable).show(ui) {
                            if let Some(text) = session.draft.save(&pin.feedback) {
                                action = EditorAction::Save(text);
                            }
                        }
                    } else {
                        if ActionButton::new("Edit").show(ui) {
                            session.draft.begin(&pin.feedback);
                        }
                        if ActionButton::new("Remove Pin").danger().show(ui) {
                            action = EditorAction::RemoveRequested;
                        }
                    }
                });
            });
        });

    session.measured = Some(measured_size(area.response.rect));
    action
}

fn format_created_at(millis: i64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp_millis(millis)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%b %e, %Y %H:%M")
                .to_string()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_rect_tracks_scroll() {
        let pin = Pin {
            id: "1".to_string(),
            x: 100.0,
            y: 200.0,
            path: "demo://home".to_string(),
            feedback: "note".to_string(),
            created_at: 1_700_000_000_000,
            owner_id: "me@example.com".to_string(),
        };
        let env = PageEnvironment::new("demo://home", Size::new(1024.0, 768.0))
            .with_scroll(kurbo::Vec2::new(50.0, 75.0));

        let rect = marker_rect(&pin, &env);
        assert_eq!(rect.center(), Pos2::new(50.0, 125.0));
    }

    #[test]
    fn test_format_created_at_accepts_epoch_millis() {
        let formatted = format_created_at(1_700_000_000_000);
        assert!(formatted.contains("2023"));
    }

    #[test]
    fn test_format_created_at_out_of_range_is_empty() {
        assert_eq!(format_created_at(i64::MAX), "");
    }
}
