use leptos::{either::Either, prelude::*};

use crate::ui::classes::{ClassList, Modifier, Size, SpinnerColor, SpinnerKind};

/// Circular arc used by the spin kind and inside loading buttons and cards.
#[component]
pub fn SpinnerIcon(class: &'static str, #[prop(default = 2)] stroke_width: u8) -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" class=class>
            <circle
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width=stroke_width.to_string()
                stroke-linecap="round"
                fill="none"
                stroke-dasharray="31.416"
                stroke-dashoffset="31.416"
            />
        </svg>
    }
}

fn part_classes(kind: SpinnerKind) -> (&'static str, &'static str) {
    match kind {
        SpinnerKind::Pulse => ("spinner__pulse-container", "spinner__pulse"),
        SpinnerKind::Bounce => ("spinner__bounce-container", "spinner__bounce-dot"),
        SpinnerKind::Wave => ("spinner__wave-container", "spinner__wave-bar"),
        SpinnerKind::Dots | SpinnerKind::Spin => ("spinner__dots-container", "spinner__dot"),
    }
}

#[component]
pub fn Spinner(
    #[prop(optional)] size: Size,
    #[prop(optional)] color: SpinnerColor,
    #[prop(optional)] kind: SpinnerKind,
    #[prop(into, optional)] label: Option<String>,
    #[prop(optional)] overlay: bool,
) -> impl IntoView {
    let classes = ClassList::new("spinner")
        .modifier(&size)
        .modifier(&color)
        .modifier(&kind)
        .flag("overlay", overlay)
        .build();

    let indicator = if kind == SpinnerKind::Spin {
        Either::Left(view! { <SpinnerIcon class="spinner__icon" /> })
    } else {
        let (container, part) = part_classes(kind);
        Either::Right(view! {
            <div class=container>
                {(0..kind.parts()).map(|_| view! { <div class=part /> }).collect_view()}
            </div>
        })
    };
    let label = label.map(|l| view! { <span class="spinner__label">{l}</span> });

    view! {
        <div class=classes role="status" aria-live="polite" data-kind=kind.as_str()>
            {if overlay {
                Either::Left(view! { <div class="spinner__content">{indicator} {label}</div> })
            } else {
                Either::Right(view! { {indicator} {label} })
            }}
        </div>
    }
}
