//! UI session state for the note composer and detail editor.
//!
//! Separated from the views so the gating rules are testable without a
//! windowing host.

use crate::pin::is_acceptable_feedback;

/// Draft text for a new note.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NoteDraft {
    text: String,
}

impl NoteDraft {
    /// Start an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the text input binding.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Whether the draft passes the trim gate. The submit control stays
    /// disabled while this is false.
    pub fn can_submit(&self) -> bool {
        is_acceptable_feedback(&self.text)
    }

    /// Take the draft for submission. Returns the raw text exactly as typed
    /// (the trim check gates, it does not transform) and clears the draft;
    /// returns None when the gate fails, guarding programmatic submits too.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }

    /// Discard the draft unconditionally.
    pub fn cancel(&mut self) {
        self.text.clear();
    }
}

/// Which face of the detail editor is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Read-only view of the pin's text.
    #[default]
    Viewing,
    /// Text input seeded with the pin's current text.
    Editing,
}

/// Two-mode edit session over one pin's feedback text.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EditDraft {
    mode: EditorMode,
    text: String,
}

impl EditDraft {
    /// Start in viewing mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Editing
    }

    /// Current draft text. Meaningful only while editing.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the text input binding.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Enter editing mode, seeding the draft with the pin's current text.
    pub fn begin(&mut self, original: &str) {
        self.mode = EditorMode::Editing;
        self.text = original.to_string();
    }

    /// Discard the draft and revert to viewing; the original text is
    /// untouched.
    pub fn cancel(&mut self) {
        self.mode = EditorMode::Viewing;
        self.text.clear();
    }

    /// Whether a save may be issued: editing, non-whitespace draft, and a
    /// draft that actually differs from the original (no-op saves are
    /// blocked).
    pub fn can_save(&self, original: &str) -> bool {
        self.is_editing() && is_acceptable_feedback(&self.text) && self.text != original
    }

    /// Take the replacement text and revert to viewing. None when the save
    /// gate fails.
    pub fn save(&mut self, original: &str) -> Option<String> {
        if !self.can_save(original) {
            return None;
        }
        self.mode = EditorMode::Viewing;
        Some(std::mem::take(&mut self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_draft_gate_blocks_whitespace() {
        let mut draft = NoteDraft::new();
        assert!(!draft.can_submit());

        *draft.text_mut() = "  ".to_string();
        assert!(!draft.can_submit());
        assert_eq!(draft.submit(), None);
        // The draft survives a refused submit.
        assert_eq!(draft.text(), "  ");
    }

    #[test]
    fn test_note_draft_submit_preserves_raw_text() {
        let mut draft = NoteDraft::new();
        *draft.text_mut() = "  spaced   out  ".to_string();

        assert_eq!(draft.submit(), Some("  spaced   out  ".to_string()));
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn test_note_draft_cancel_discards() {
        let mut draft = NoteDraft::new();
        *draft.text_mut() = "something".to_string();
        draft.cancel();
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn test_edit_begin_seeds_draft() {
        let mut edit = EditDraft::new();
        assert!(!edit.is_editing());

        edit.begin("original text");
        assert!(edit.is_editing());
        assert_eq!(edit.text(), "original text");
    }

    #[test]
    fn test_edit_cancel_reverts_to_viewing() {
        let mut edit = EditDraft::new();
        edit.begin("original");
        *edit.text_mut() = "half-finished edit".to_string();

        edit.cancel();
        assert_eq!(edit.mode(), EditorMode::Viewing);
        assert_eq!(edit.text(), "");
    }

    #[test]
    fn test_edit_save_blocked_when_unchanged() {
        let mut edit = EditDraft::new();
        edit.begin("original");
        assert!(!edit.can_save("original"));
        assert_eq!(edit.save("original"), None);
        assert!(edit.is_editing());
    }

    #[test]
    fn test_edit_save_blocked_when_whitespace() {
        let mut edit = EditDraft::new();
        edit.begin("original");
        *edit.text_mut() = "   ".to_string();
        assert!(!edit.can_save("original"));
    }

    #[test]
    fn test_edit_save_returns_replacement_and_reverts() {
        let mut edit = EditDraft::new();
        edit.begin("original");
        *edit.text_mut() = "revised".to_string();

        assert!(edit.can_save("original"));
        assert_eq!(edit.save("original"), Some("revised".to_string()));
        assert_eq!(edit.mode(), EditorMode::Viewing);
    }
}
