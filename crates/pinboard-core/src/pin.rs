//! The pin record: one feedback annotation anchored to a page position.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single feedback annotation attached to a position on a specific page.
///
/// `x`/`y` are document coordinates: the viewport position at creation time
/// minus the scroll offset at that time. Rendering always re-derives the
/// on-screen position from the current scroll offset; the stored values never
/// change with scrolling.
///
/// Field names on the wire follow the remote collaborator's schema
/// (`createdAt`, `emailId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Opaque unique identifier, generated by the caller.
    pub id: String,
    /// Document-space x coordinate.
    pub x: f64,
    /// Document-space y coordinate.
    pub y: f64,
    /// Page identifier the pin belongs to. Exact string match, no
    /// normalization: trailing slashes, query strings and fragments are all
    /// significant.
    pub path: String,
    /// The note text. Never persisted empty or whitespace-only.
    pub feedback: String,
    /// Creation time in milliseconds since the Unix epoch. Immutable.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    /// Identity of the authoring user. The store overwrites this on every
    /// create and update with its own configured identity.
    #[serde(rename = "emailId")]
    pub owner_id: String,
}

impl Pin {
    /// The pin's stored document-space position as a point.
    pub fn position(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

/// Generate a fresh opaque pin identifier.
pub fn new_pin_id() -> String {
    Uuid::new_v4().to_string()
}

/// The trim gate applied before any feedback text is accepted.
///
/// This is a gate, not a transform: accepted text is stored exactly as typed,
/// internal whitespace included.
pub fn is_acceptable_feedback(text: &str) -> bool {
    !text.trim().is_empty()
}
