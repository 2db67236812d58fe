//! Interaction-surface state: which popups are open and where.

use crate::draft::{EditDraft, NoteDraft};
use crate::geometry::clamp_to_viewport;
use crate::pin::Pin;
use kurbo::{Point, Size};

/// An open note composer, anchored at the captured click point.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerSession {
    /// Raw click position in viewport space. Also where the indicator dot is
    /// drawn.
    pub anchor: Point,
    /// The note being typed.
    pub draft: NoteDraft,
    /// Popup size measured on a previous frame, once known.
    pub measured: Option<Size>,
}

impl ComposerSession {
    fn new(anchor: Point) -> Self {
        Self {
            anchor,
            draft: NoteDraft::new(),
            measured: None,
        }
    }

    /// Where to place the popup this frame: the anchor until the popup has
    /// been measured, then the viewport-clamped position. Scroll never feeds
    /// into this.
    pub fn position(&self, viewport: Size) -> Point {
        resolve_position(self.anchor, self.measured, viewport)
    }
}

/// An open detail editor for one existing pin.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorSession {
    /// Id of the pin being inspected.
    pub pin_id: String,
    /// The pin's stored position, used directly as the popup anchor.
    pub anchor: Point,
    /// View/edit session over the pin's text.
    pub draft: EditDraft,
    /// Popup size measured on a previous frame, once known.
    pub measured: Option<Size>,
}

impl InspectorSession {
    fn new(pin: &Pin) -> Self {
        Self {
            pin_id: pin.id.clone(),
            anchor: pin.position(),
            draft: EditDraft::new(),
            measured: None,
        }
    }

    /// Popup placement for this frame; same rules as the composer.
    pub fn position(&self, viewport: Size) -> Point {
        resolve_position(self.anchor, self.measured, viewport)
    }
}

fn resolve_position(anchor: Point, measured: Option<Size>, viewport: Size) -> Point {
    match measured {
        Some(size) => clamp_to_viewport(anchor, size, viewport),
        None => anchor,
    }
}

/// The transparent full-page layer's view state.
///
/// Composer and inspector are independent: opening a pin's details leaves an
/// in-progress composition alone, exactly like dismissing works on each
/// separately.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Surface {
    composer: Option<ComposerSession>,
    inspector: Option<InspectorSession>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn composer(&self) -> Option<&ComposerSession> {
        self.composer.as_ref()
    }

    pub fn composer_mut(&mut self) -> Option<&mut ComposerSession> {
        self.composer.as_mut()
    }

    pub fn inspector(&self) -> Option<&InspectorSession> {
        self.inspector.as_ref()
    }

    pub fn inspector_mut(&mut self) -> Option<&mut InspectorSession> {
        self.inspector.as_mut()
    }

    pub fn is_composing(&self) -> bool {
        self.composer.is_some()
    }

    pub fn is_inspecting(&self) -> bool {
        self.inspector.is_some()
    }

    /// A primary click landed on the surface itself (not on a marker or
    /// popup). Opens the composer at the click point when annotation mode is
    /// active; ignored otherwise.
    pub fn click_on_surface(&mut self, active: bool, at: Point) {
        if !active {
            return;
        }
        self.composer = Some(ComposerSession::new(at));
    }

    /// A marker was activated. Opens the inspector for that pin, anchored at
    /// its stored position. Replaces any inspector already open.
    pub fn open_inspector(&mut self, pin: &Pin) {
        self.inspector = Some(InspectorSession::new(pin));
    }

    /// Close the composer, dropping its draft.
    pub fn close_composer(&mut self) {
        self.composer = None;
    }

    /// Close the inspector.
    pub fn close_inspector(&mut self) {
        self.inspector = None;
    }

    /// A pointer went down outside every popup and marker: close whatever is
    /// open.
    pub fn dismiss_popups(&mut self) {
        self.composer = None;
        self.inspector = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin_at(id: &str, x: f64, y: f64) -> Pin {
        Pin {
            id: id.to_string(),
            x,
            y,
            path: "demo://home".to_string(),
            feedback: "note".to_string(),
            created_at: 1_700_000_000_000,
            owner_id: "me@example.com".to_string(),
        }
    }

    #[test]
    fn test_inactive_click_is_ignored() {
        let mut surface = Surface::new();
        surface.click_on_surface(false, Point::new(100.0, 100.0));
        assert!(!surface.is_composing());
    }

    #[test]
    fn test_active_click_opens_composer_at_point() {
        let mut surface = Surface::new();
        surface.click_on_surface(true, Point::new(320.0, 240.0));

        let composer = surface.composer().expect("composer open");
        assert_eq!(composer.anchor, Point::new(320.0, 240.0));
        assert_eq!(composer.draft.text(), "");
    }

    #[test]
    fn test_marker_click_keeps_composer_open() {
        let mut surface = Surface::new();
        surface.click_on_surface(true, Point::new(50.0, 50.0));
        surface.open_inspector(&pin_at("1", 200.0, 300.0));

        assert!(surface.is_composing());
        let inspector = surface.inspector().expect("inspector open");
        assert_eq!(inspector.pin_id, "1");
        assert_eq!(inspector.anchor, Point::new(200.0, 300.0));
    }

    #[test]
    fn test_dismiss_closes_both() {
        let mut surface = Surface::new();
        surface.click_on_surface(true, Point::new(50.0, 50.0));
        surface.open_inspector(&pin_at("1", 200.0, 300.0));

        surface.dismiss_popups();
        assert!(!surface.is_composing());
        assert!(!surface.is_inspecting());
    }

    #[test]
    fn test_unmeasured_popup_sits_at_anchor() {
        let mut surface = Surface::new();
        surface.click_on_surface(true, Point::new(900.0, 100.0));

        let viewport = Size::new(1024.0, 768.0);
        let composer = surface.composer().unwrap();
        // No measurement yet: the anchor passes through unchanged.
        assert_eq!(composer.position(viewport), Point::new(900.0, 100.0));
    }

    #[test]
    fn test_measured_popup_is_clamped() {
        let mut surface = Surface::new();
        surface.click_on_surface(true, Point::new(900.0, 100.0));
        surface.composer_mut().unwrap().measured = Some(Size::new(200.0, 150.0));

        let viewport = Size::new(1024.0, 768.0);
        assert_eq!(
            surface.composer().unwrap().position(viewport),
            Point::new(814.0, 100.0)
        );
    }

    #[test]
    fn test_inspector_anchor_is_stored_position() {
        // The popup anchors at the pin's stored coordinates directly; scroll
        // is no input to popup placement at all.
        let mut surface = Surface::new();
        surface.open_inspector(&pin_at("1", 100.0, 200.0));

        let viewport = Size::new(1024.0, 768.0);
        let inspector = surface.inspector().unwrap();
        assert_eq!(inspector.position(viewport), Point::new(100.0, 200.0));
    }
}
