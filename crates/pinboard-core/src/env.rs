//! Host page environment snapshot.

use kurbo::{Size, Vec2};

/// What the hosting page looks like on the current frame.
///
/// The host builds one of these per frame and passes it down, so nothing in
/// core reads ambient globals for the current page identifier, scroll offset
/// or viewport size. That keeps the projection and positioning logic testable
/// without a windowing host.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEnvironment {
    /// Identifier of the page currently shown. Pins partition on exact
    /// equality with this string.
    pub path: String,
    /// Current scroll offset of the page content.
    pub scroll: Vec2,
    /// Current viewport size in logical pixels.
    pub viewport: Size,
}

impl PageEnvironment {
    /// Snapshot for the given page with no scrolling.
    pub fn new(path: impl Into<String>, viewport: Size) -> Self {
        Self {
            path: path.into(),
            scroll: Vec2::ZERO,
            viewport,
        }
    }

    /// Same snapshot with a different scroll offset.
    pub fn with_scroll(mut self, scroll: Vec2) -> Self {
        self.scroll = scroll;
        self
    }
}
