pub const DEFAULT_MAX: u32 = 99;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeCount {
    Number(u32),
    Text(String),
}

impl From<u32> for BadgeCount {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for BadgeCount {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for BadgeCount {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Text rendered inside the badge. Numbers above `max` collapse to `"{max}+"`, and zero is
/// hidden unless `show_zero` is set.
pub fn display_count(count: Option<&BadgeCount>, max: u32, show_zero: bool) -> Option<String> {
    match count? {
        BadgeCount::Number(0) if !show_zero => None,
        BadgeCount::Number(n) if *n > max => Some(format!("{max}+")),
        BadgeCount::Number(n) => Some(n.to_string()),
        BadgeCount::Text(s) if s.is_empty() => None,
        BadgeCount::Text(s) => Some(s.clone()),
    }
}

/// Whether the badge mark itself is drawn. A badge with nothing to show and no children
/// renders nothing at all.
pub fn should_show(dot: bool, display: Option<&str>) -> bool {
    dot || display.is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeLayout {
    /// Children render inside the badge itself.
    Label,
    /// Children render as-is with the badge pinned to their corner.
    Decorated,
    /// Only the badge mark renders.
    Standalone,
    Hidden,
}

pub fn layout(has_children: bool, show: bool) -> BadgeLayout {
    match (has_children, show) {
        (true, false) => BadgeLayout::Label,
        (true, true) => BadgeLayout::Decorated,
        (false, true) => BadgeLayout::Standalone,
        (false, false) => BadgeLayout::Hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_count() {
        assert_eq!(display_count(None, DEFAULT_MAX, false), None);
        assert_eq!(display_count(Some(&BadgeCount::Number(5)), DEFAULT_MAX, false), Some("5".into()));
        assert_eq!(display_count(Some(&BadgeCount::Number(99)), DEFAULT_MAX, false), Some("99".into()));
        assert_eq!(display_count(Some(&BadgeCount::Number(100)), DEFAULT_MAX, false), Some("99+".into()));
        assert_eq!(display_count(Some(&BadgeCount::Number(1000)), 999, false), Some("999+".into()));
        assert_eq!(display_count(Some(&"new".into()), 1, false), Some("new".into()));
        assert_eq!(display_count(Some(&"".into()), 1, false), None);
    }

    #[test]
    fn test_zero() {
        assert_eq!(display_count(Some(&BadgeCount::Number(0)), DEFAULT_MAX, false), None);
        assert_eq!(display_count(Some(&BadgeCount::Number(0)), DEFAULT_MAX, true), Some("0".into()));
    }

    #[test]
    fn test_should_show() {
        assert!(should_show(true, None));
        assert!(should_show(false, Some("3")));
        assert!(!should_show(false, None));
    }

    #[test]
    fn test_layout() {
        assert_eq!(layout(true, false), BadgeLayout::Label);
        assert_eq!(layout(true, true), BadgeLayout::Decorated);
        assert_eq!(layout(false, true), BadgeLayout::Standalone);
        assert_eq!(layout(false, false), BadgeLayout::Hidden);
    }
}
