//! Host-side implementations of the core capability traits.

use pinboard_core::{Confirm, NoticeKind, Notifier};
use pinboard_widgets::{ToastLevel, Toasts};
use std::cell::RefCell;
use std::rc::Rc;

/// Routes store notifications into the shared toast stack.
pub struct ToastNotifier {
    toasts: Rc<RefCell<Toasts>>,
}

impl ToastNotifier {
    pub fn new(toasts: Rc<RefCell<Toasts>>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        let level = match kind {
            NoticeKind::Success => ToastLevel::Success,
            NoticeKind::Error => ToastLevel::Error,
            NoticeKind::Info => ToastLevel::Info,
        };
        self.toasts.borrow_mut().push(level, message);
    }
}

/// Blocking confirmation via a native message dialog.
pub struct NativeConfirm;

impl Confirm for NativeConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let result = rfd::MessageDialog::new()
            .set_title("Pinboard")
            .set_description(prompt)
            .set_level(rfd::MessageLevel::Warning)
            .set_buttons(rfd::MessageButtons::OkCancel)
            .show();
        matches!(result, rfd::MessageDialogResult::Ok)
    }
}
