use leptos::{either::EitherOf4, prelude::*};

use crate::ui::{
    badge::{display_count, layout, should_show, BadgeCount, BadgeLayout, DEFAULT_MAX},
    classes::{BadgeShape, BadgeStyle, BadgeVariant, ClassList, Size},
};

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] size: Size,
    #[prop(optional)] badge_style: BadgeStyle,
    #[prop(optional)] shape: BadgeShape,
    #[prop(optional)] dot: bool,
    #[prop(into, optional)] count: Option<BadgeCount>,
    #[prop(default = DEFAULT_MAX)] max: u32,
    #[prop(optional)] show_zero: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let display = display_count(count.as_ref(), max, show_zero);
    let show = should_show(dot, display.as_deref());
    let layout = layout(children.is_some(), show);

    let classes = ClassList::new("badge")
        .modifier(&variant)
        .modifier(&size)
        .modifier(&badge_style)
        .modifier(&shape)
        .flag("dot", dot)
        .flag("standalone", layout == BadgeLayout::Standalone)
        .build();
    // a dot never carries text
    let text = display.filter(|_| !dot);

    match (layout, children) {
        (BadgeLayout::Label, Some(children)) => {
            EitherOf4::A(view! { <span class=classes>{children()}</span> })
        }
        (BadgeLayout::Decorated, Some(children)) => EitherOf4::B(view! {
            <div class="badge-wrapper">
                {children()}
                <span class=classes>{text}</span>
            </div>
        }),
        (BadgeLayout::Standalone, _) => EitherOf4::C(view! { <span class=classes>{text}</span> }),
        _ => EitherOf4::D(()),
    }
}
