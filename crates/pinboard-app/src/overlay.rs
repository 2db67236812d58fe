//! The transparent interaction layer over the hosted page.
//!
//! Layer order does the click targeting: markers and popups live on the
//! foreground layer and consume their own clicks, so only a click on the
//! bare surface reaches the background layer and opens the composer.

use crate::views::{self, ComposerAction, EditorAction};
use egui::{Context, Id, Order, Pos2, Sense};
use kurbo::Point;
use pinboard_core::{
    Confirm, PageEnvironment, Pin, PinStore, Surface, document_position, new_pin_id,
};

/// Drive the overlay for one frame: dismissal, click capture, markers and
/// both popups, writing through the store as the user acts.
pub fn show(
    ctx: &Context,
    surface: &mut Surface,
    store: &mut PinStore,
    env: &PageEnvironment,
    active: bool,
    markers_visible: bool,
    confirm: &dyn Confirm,
) {
    let pins = store.pins_by_path(&env.path);

    dismiss_on_outside_press(ctx, surface, &pins, env, markers_visible);

    let screen = ctx.screen_rect();
    egui::Area::new(Id::new("pinboard-surface"))
        .order(Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            // When inactive the layer senses nothing and the page beneath
            // stays interactive.
            let sense = if active { Sense::click() } else { Sense::hover() };
            let response = ui.allocate_rect(screen, sense);
            if active && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    surface.click_on_surface(true, Point::new(pos.x as f64, pos.y as f64));
                }
            }
        });

    if markers_visible {
        for pin in &pins {
            if views::marker(ctx, pin, env) {
                surface.open_inspector(pin);
            }
        }
    }

    if let Some(composer) = surface.composer() {
        views::click_indicator(ctx, composer.anchor);
    }

    drive_composer(ctx, surface, store, env);
    drive_inspector(ctx, surface, store, env, &pins, confirm);
}

fn drive_composer(
    ctx: &Context,
    surface: &mut Surface,
    store: &mut PinStore,
    env: &PageEnvironment,
) {
    let mut anchor = Point::ZERO;
    let mut action = ComposerAction::None;
    if let Some(session) = surface.composer_mut() {
        anchor = session.anchor;
        action = views::composer_popup(ctx, session, env.viewport);
    }

    match action {
        ComposerAction::Submit(text) => {
            // Document coordinates: captured viewport point minus the scroll
            // offset as of submission.
            let stored = document_position(anchor, env.scroll);
            store.create(Pin {
                id: new_pin_id(),
                x: stored.x,
                y: stored.y,
                path: env.path.clone(),
                feedback: text,
                created_at: chrono::Utc::now().timestamp_millis(),
                // The store stamps the acting identity on every write.
                owner_id: String::new(),
            });
            surface.close_composer();
        }
        ComposerAction::Cancel => surface.close_composer(),
        ComposerAction::None => {}
    }
}

fn drive_inspector(
    ctx: &Context,
    surface: &mut Surface,
    store: &mut PinStore,
    env: &PageEnvironment,
    pins: &[Pin],
    confirm: &dyn Confirm,
) {
    let mut outcome = None;
    let mut stale = false;
    if let Some(session) = surface.inspector_mut() {
        match pins.iter().find(|p| p.id == session.pin_id) {
            Some(pin) => {
                let action = views::editor_popup(ctx, session, pin, env.viewport);
                outcome = Some((action, pin.clone()));
            }
            // The pin disappeared underneath us, e.g. a bulk clear committed.
            None => stale = true,
        }
    }
    if stale {
        surface.close_inspector();
        return;
    }

    match outcome {
        Some((EditorAction::Close, _)) => surface.close_inspector(),
        Some((EditorAction::Save(text), pin)) => {
            let mut updated = pin;
            updated.feedback = text;
            store.update(updated);
        }
        Some((EditorAction::RemoveRequested, pin)) => {
            if confirm.confirm("Are you sure you want to remove this pin?") {
                store.delete(pin.id);
                surface.close_inspector();
            }
        }
        _ => {}
    }
}

/// A pointer press outside the open popups and all markers closes whatever
/// is open. One check per frame against last frame's measured rects.
fn dismiss_on_outside_press(
    ctx: &Context,
    surface: &mut Surface,
    pins: &[Pin],
    env: &PageEnvironment,
    markers_visible: bool,
) {
    if !surface.is_composing() && !surface.is_inspecting() {
        return;
    }
    let Some(press) = ctx.input(|i| {
        if i.pointer.any_pressed() {
            i.pointer.interact_pos()
        } else {
            None
        }
    }) else {
        return;
    };

    let inside_composer = surface
        .composer()
        .and_then(|session| {
            session
                .measured
                .map(|size| popup_rect(session.position(env.viewport), size).contains(press))
        })
        .unwrap_or(false);

    let inside_inspector = surface
        .inspector()
        .and_then(|session| {
            session
                .measured
                .map(|size| popup_rect(session.position(env.viewport), size).contains(press))
        })
        .unwrap_or(false);

    let over_marker = markers_visible
        && pins
            .iter()
            .any(|pin| views::marker_rect(pin, env).contains(press));

    if !inside_composer && !inside_inspector && !over_marker {
        surface.dismiss_popups();
    }
}

fn popup_rect(position: Point, size: kurbo::Size) -> egui::Rect {
    egui::Rect::from_min_size(
        Pos2::new(position.x as f32, position.y as f32),
        egui::vec2(size.width as f32, size.height as f32),
    )
}
