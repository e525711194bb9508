//! Variant enums and BEM class composition (`block`, `block--modifier`).

pub trait Modifier {
    fn as_str(&self) -> &'static str;
}

macro_rules! modifier_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl Modifier for $name {
            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }
    };
}

modifier_enum!(Size {
    Small => "small",
    #[default]
    Medium => "medium",
    Large => "large",
});

modifier_enum!(ButtonVariant {
    #[default]
    Primary => "primary",
    Secondary => "secondary",
    Danger => "danger",
    Success => "success",
    Warning => "warning",
    Ghost => "ghost",
    Outline => "outline",
});

modifier_enum!(IconPosition {
    #[default]
    Left => "left",
    Right => "right",
});

modifier_enum!(InputVariant {
    #[default]
    Outline => "outline",
    Filled => "filled",
    Underline => "underline",
});

modifier_enum!(CardVariant {
    #[default]
    Outline => "outline",
    Filled => "filled",
    Shadow => "shadow",
    Flat => "flat",
});

modifier_enum!(ModalSize {
    Small => "small",
    #[default]
    Medium => "medium",
    Large => "large",
    Fullscreen => "fullscreen",
});

modifier_enum!(BadgeVariant {
    #[default]
    Primary => "primary",
    Secondary => "secondary",
    Success => "success",
    Warning => "warning",
    Danger => "danger",
    Info => "info",
    Gray => "gray",
});

modifier_enum!(BadgeStyle {
    #[default]
    Solid => "solid",
    Outline => "outline",
    Soft => "soft",
});

modifier_enum!(BadgeShape {
    Circle => "circle",
    #[default]
    Rounded => "rounded",
    Square => "square",
});

modifier_enum!(SpinnerKind {
    #[default]
    Spin => "spin",
    Pulse => "pulse",
    Bounce => "bounce",
    Wave => "wave",
    Dots => "dots",
});

modifier_enum!(SpinnerColor {
    #[default]
    Primary => "primary",
    Secondary => "secondary",
    White => "white",
    Gray => "gray",
});

impl SpinnerKind {
    /// Number of animated child elements the kind renders; the spin kind draws an svg instead.
    pub fn parts(&self) -> usize {
        match self {
            Self::Spin => 0,
            Self::Pulse => 1,
            Self::Bounce | Self::Dots => 3,
            Self::Wave => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassList {
    block: &'static str,
    classes: Vec<String>,
}

impl ClassList {
    pub fn new(block: &'static str) -> Self {
        Self {
            block,
            classes: vec![block.to_string()],
        }
    }

    /// Adds `block--<modifier>`.
    pub fn modifier(mut self, m: &impl Modifier) -> Self {
        self.classes.push(format!("{}--{}", self.block, m.as_str()));
        self
    }

    /// Adds `block--<name>` when `on` is set.
    pub fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self.classes.push(format!("{}--{name}", self.block));
        }
        self
    }

    pub fn build(self) -> String {
        self.classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Size::default(), Size::Medium);
        assert_eq!(ButtonVariant::default().as_str(), "primary");
        assert_eq!(InputVariant::default(), InputVariant::Outline);
        assert_eq!(CardVariant::default(), CardVariant::Outline);
        assert_eq!(BadgeShape::default(), BadgeShape::Rounded);
        assert_eq!(ModalSize::default(), ModalSize::Medium);
        assert_eq!(SpinnerKind::default(), SpinnerKind::Spin);
    }

    #[test]
    fn test_class_list() {
        let classes = ClassList::new("btn")
            .modifier(&ButtonVariant::Danger)
            .modifier(&Size::Large)
            .flag("loading", true)
            .flag("disabled", false)
            .build();
        assert_eq!(classes, "btn btn--danger btn--large btn--loading");

        assert_eq!(ClassList::new("card").build(), "card");
    }

    #[test]
    fn test_spinner_parts() {
        assert_eq!(SpinnerKind::Spin.parts(), 0);
        assert_eq!(SpinnerKind::Pulse.parts(), 1);
        assert_eq!(SpinnerKind::Bounce.parts(), 3);
        assert_eq!(SpinnerKind::Wave.parts(), 5);
        assert_eq!(SpinnerKind::Dots.parts(), 3);
    }
}
