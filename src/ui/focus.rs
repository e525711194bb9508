//! Modal focus and scroll bookkeeping.
//!
//! Generic over the element handle so the rules run without a DOM; the modal component
//! instantiates it with `web_sys::HtmlElement`.

/// Elements that can take keyboard focus inside a modal.
pub const FOCUSABLE_SELECTOR: &str = "button:not([disabled]), [href], input:not([disabled]), \
    select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

/// What the modal must undo when it closes.
#[derive(Debug, Clone, PartialEq)]
pub struct Release<T> {
    /// Element focused before the modal opened. Only refocus it if it is still attached.
    pub restore_to: Option<T>,
    /// Page `overflow` style in effect before the scroll lock.
    pub overflow: String,
}

impl<T> Release<T> {
    /// The element to refocus on close, dropped if it has left the document since.
    pub fn restore_target(self, is_attached: impl Fn(&T) -> bool) -> Option<T> {
        self.restore_to.filter(|el| is_attached(el))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Phase<T> {
    Closed,
    Open(Release<T>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FocusController<T> {
    phase: Phase<T>,
}

impl<T> Default for FocusController<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Closed,
        }
    }
}

impl<T> FocusController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open(_))
    }

    /// CLOSED -> OPEN. Captures the focused element and the overflow style the scroll
    /// lock replaces. Returns `false` if already open, in which case nothing is captured.
    pub fn open(&mut self, focused: Option<T>, overflow: impl Into<String>) -> bool {
        if self.is_open() {
            return false;
        }
        self.phase = Phase::Open(Release {
            restore_to: focused,
            overflow: overflow.into(),
        });
        true
    }

    /// OPEN -> CLOSED. Returns what to restore, or `None` if it was not open.
    pub fn close(&mut self) -> Option<Release<T>> {
        match std::mem::replace(&mut self.phase, Phase::Closed) {
            Phase::Open(release) => Some(release),
            Phase::Closed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialFocus {
    /// Index into the modal's focusable descendants.
    Descendant(usize),
    Container,
}

pub fn initial_focus(focusable_count: usize) -> InitialFocus {
    if focusable_count == 0 {
        InitialFocus::Container
    } else {
        InitialFocus::Descendant(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    RequestClose,
    Tab { backwards: bool },
    Ignore,
}

pub fn key_action(key: &str, shift: bool, close_on_escape: bool) -> KeyAction {
    match key {
        "Escape" | "Esc" if close_on_escape => KeyAction::RequestClose,
        "Tab" => KeyAction::Tab { backwards: shift },
        _ => KeyAction::Ignore,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabMove {
    /// Let the browser move focus; the next element is still inside the modal.
    Native,
    /// Prevent the default and focus this descendant.
    Focus(usize),
    /// Prevent the default and keep focus where it is.
    Hold,
}

/// Decides where Tab goes so focus never leaves the modal. `current` is the index of the
/// focused element among the focusable descendants, `None` when focus is elsewhere
/// (the container itself, or outside the modal).
pub fn tab_move(focusable_count: usize, current: Option<usize>, backwards: bool) -> TabMove {
    if focusable_count == 0 {
        return TabMove::Hold;
    }
    let last = focusable_count - 1;
    match (current, backwards) {
        (None, false) => TabMove::Focus(0),
        (None, true) => TabMove::Focus(last),
        (Some(i), false) if i >= last => TabMove::Focus(0),
        (Some(0), true) => TabMove::Focus(last),
        _ => TabMove::Native,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_cycle() {
        let mut ctl = FocusController::<&str>::new();
        assert!(!ctl.is_open());
        assert_eq!(ctl.close(), None);

        assert!(ctl.open(Some("launcher"), "auto"));
        assert!(ctl.is_open());

        // second open keeps the first capture
        assert!(!ctl.open(Some("inside-modal"), "hidden"));

        let release = ctl.close().expect("open modal should release");
        assert_eq!(release.restore_to, Some("launcher"));
        assert_eq!(release.overflow, "auto");
        assert!(!ctl.is_open());
        assert_eq!(ctl.close(), None);
    }

    #[test]
    fn test_open_without_focus() {
        let mut ctl = FocusController::<u32>::new();
        ctl.open(None, "");
        let release = ctl.close().expect("should release");
        assert_eq!(release.restore_to, None);
        assert_eq!(release.overflow, "");
    }

    #[test]
    fn test_restore_skips_detached_element() {
        let attached = ["launcher", "toolbar"];
        let is_attached = |el: &&str| attached.contains(el);

        let mut ctl = FocusController::<&str>::new();
        ctl.open(Some("launcher"), "");
        let release = ctl.close().expect("open modal should release");
        assert_eq!(release.restore_target(is_attached), Some("launcher"));

        // the launcher was removed while the modal was open
        ctl.open(Some("row-delete"), "");
        let release = ctl.close().expect("open modal should release");
        assert_eq!(release.restore_target(is_attached), None);

        ctl.open(None, "");
        let release = ctl.close().expect("open modal should release");
        assert_eq!(release.restore_target(is_attached), None);
    }

    #[test]
    fn test_initial_focus() {
        assert_eq!(initial_focus(0), InitialFocus::Container);
        assert_eq!(initial_focus(3), InitialFocus::Descendant(0));
    }

    #[test]
    fn test_key_action() {
        assert_eq!(key_action("Escape", false, true), KeyAction::RequestClose);
        assert_eq!(key_action("Escape", false, false), KeyAction::Ignore);
        assert_eq!(key_action("Tab", true, true), KeyAction::Tab { backwards: true });
        assert_eq!(key_action("Tab", false, false), KeyAction::Tab { backwards: false });
        assert_eq!(key_action("a", false, true), KeyAction::Ignore);
    }

    #[test]
    fn test_tab_wraps_at_edges() {
        assert_eq!(tab_move(3, Some(2), false), TabMove::Focus(0));
        assert_eq!(tab_move(3, Some(0), true), TabMove::Focus(2));
        assert_eq!(tab_move(3, Some(0), false), TabMove::Native);
        assert_eq!(tab_move(3, Some(1), true), TabMove::Native);
        assert_eq!(tab_move(3, Some(2), true), TabMove::Native);
        assert_eq!(tab_move(1, Some(0), false), TabMove::Focus(0));
        assert_eq!(tab_move(1, Some(0), true), TabMove::Focus(0));
    }

    #[test]
    fn test_tab_from_outside_enters_modal() {
        assert_eq!(tab_move(4, None, false), TabMove::Focus(0));
        assert_eq!(tab_move(4, None, true), TabMove::Focus(3));
    }

    #[test]
    fn test_tab_without_focusables_holds() {
        assert_eq!(tab_move(0, None, false), TabMove::Hold);
        assert_eq!(tab_move(0, None, true), TabMove::Hold);
    }
}
