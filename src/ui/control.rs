//! Value ownership for text controls.
//!
//! A control is *controlled* when its owner supplies the value at creation; the owner is
//! then the only source of truth and the control keeps no copy. Otherwise the control is
//! *uncontrolled* and owns its text. The mode is fixed for the lifetime of the control.

/// What the owner is told after every edit or clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ValueSource {
    Controlled,
    Uncontrolled(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    source: ValueSource,
}

impl FormControl {
    pub fn new(supplied: bool) -> Self {
        let source = if supplied {
            ValueSource::Controlled
        } else {
            ValueSource::Uncontrolled(String::new())
        };
        Self { source }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.source, ValueSource::Controlled)
    }

    /// Text to display. A controlled control shows `external` and nothing else, so an
    /// owner that rejects an edit keeps the previous text on screen.
    pub fn display(&self, external: Option<&str>) -> String {
        match &self.source {
            ValueSource::Controlled => external.unwrap_or_default().to_string(),
            ValueSource::Uncontrolled(own) => own.clone(),
        }
    }

    pub fn has_value(&self, external: Option<&str>) -> bool {
        match &self.source {
            ValueSource::Controlled => external.is_some_and(|v| !v.is_empty()),
            ValueSource::Uncontrolled(own) => !own.is_empty(),
        }
    }

    /// Records an edit and returns the event for the owner. Uncontrolled controls update
    /// their own text before the owner hears about it.
    pub fn change(&mut self, value: impl Into<String>) -> ChangeEvent {
        let value = value.into();
        if let ValueSource::Uncontrolled(own) = &mut self.source {
            own.clone_from(&value);
        }
        ChangeEvent { value }
    }

    /// Empties the value through the same path as an edit.
    pub fn clear(&mut self) -> ChangeEvent {
        self.change(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_owns_value() {
        let mut control = FormControl::new(false);
        assert!(!control.is_controlled());
        assert_eq!(control.display(None), "");
        assert!(!control.has_value(None));

        let ev = control.change("hel");
        assert_eq!(ev.value, "hel");
        assert_eq!(control.display(None), "hel");

        // external values are ignored once the control owns its text
        assert_eq!(control.display(Some("other")), "hel");
        assert!(control.has_value(Some("")));
    }

    #[test]
    fn test_controlled_never_stores() {
        let mut control = FormControl::new(true);
        assert!(control.is_controlled());

        let ev = control.change("abc");
        assert_eq!(ev, ChangeEvent { value: "abc".to_string() });

        // owner hasn't accepted the edit yet
        assert_eq!(control.display(Some("ab")), "ab");
        assert_eq!(control.display(None), "");
        assert!(control.has_value(Some("ab")));
        assert!(!control.has_value(Some("")));
        assert_eq!(control, FormControl::new(true));
    }

    #[test]
    fn test_clear_matches_edit_shape() {
        let mut uncontrolled = FormControl::new(false);
        uncontrolled.change("text");
        let cleared = uncontrolled.clear();
        let mut other = FormControl::new(false);
        assert_eq!(cleared, other.change(""));
        assert_eq!(uncontrolled.display(None), "");

        let mut controlled = FormControl::new(true);
        assert_eq!(controlled.clear(), ChangeEvent { value: String::new() });
        assert_eq!(controlled.display(Some("still owner's")), "still owner's");
    }
}
