//! Local UI chrome state: dark mode and transient toasts.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`auth`, `feed`) so the
//! toast stack and theme toggle can evolve independently of the data layer.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification in the toast stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id used for dismissal.
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// UI state for theme, navigation chrome, and notifications.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Whether the collapsible nav link list is open on small screens.
    pub mobile_menu_open: bool,
    pub toasts: Vec<Toast>,
    toast_seq: u64,
}

impl UiState {
    /// Flip the mobile nav menu open or closed.
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Collapse the mobile nav menu, e.g. after following a link.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Append a toast and return its id.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        let id = self.toast_seq;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
