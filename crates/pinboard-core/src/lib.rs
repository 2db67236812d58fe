//! Pinboard Core Library
//!
//! Platform-agnostic data structures and logic for the Pinboard feedback
//! annotation widget: the pin record, the pin store and its remote
//! collaborator backends, coordinate adjustment, and the interaction-surface
//! state that the host shell renders.

pub mod backend;
pub mod draft;
pub mod env;
pub mod geometry;
pub mod notify;
pub mod pin;
pub mod store;
pub mod surface;

pub use backend::{BackendError, BackendResult, HttpBackend, MemoryBackend, PinBackend};
pub use draft::{EditDraft, EditorMode, NoteDraft};
pub use env::PageEnvironment;
pub use geometry::{EDGE_MARGIN, clamp_to_viewport, document_position, viewport_position};
pub use notify::{Confirm, NoticeKind, Notifier, NullNotifier};
pub use pin::{Pin, is_acceptable_feedback, new_pin_id};
pub use store::{ConfigError, PinStore};
pub use surface::{ComposerSession, InspectorSession, Surface};
