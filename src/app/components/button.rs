use leptos::{ev::MouseEvent, prelude::*};

use super::SpinnerIcon;
use crate::ui::{
    accepts_press,
    classes::{ButtonVariant, ClassList, IconPosition, Size},
};

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: Size,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    #[prop(into, optional)] loading: MaybeProp<bool>,
    #[prop(into, optional)] icon: Option<String>,
    #[prop(optional)] icon_position: IconPosition,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] submit: bool,
    #[prop(into, optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let is_loading = move || loading.get().unwrap_or(false);
    let inert = move || !accepts_press(is_disabled(), is_loading());
    let icon_only = children.is_none() && icon.is_some();

    let classes = move || {
        ClassList::new("btn")
            .modifier(&variant)
            .modifier(&size)
            .flag("loading", is_loading())
            .flag("disabled", is_disabled())
            .flag("full-width", full_width)
            .flag("icon-only", icon_only)
            .build()
    };

    let handle_click = move |ev: MouseEvent| {
        if inert() {
            ev.prevent_default();
            return;
        }
        if let Some(on_click) = on_click {
            on_click.run(ev);
        }
    };

    let icon_at = move |position: IconPosition| {
        let icon = icon.clone();
        let class = if position == IconPosition::Left {
            "btn__icon btn__icon--left"
        } else {
            "btn__icon btn__icon--right"
        };
        move || {
            (icon_position == position && !is_loading())
                .then(|| icon.clone())
                .flatten()
                .map(|icon| {
                    view! {
                        <span class=class aria-hidden="true">
                            {icon}
                        </span>
                    }
                })
        }
    };
    let left_icon = icon_at(IconPosition::Left);
    let right_icon = icon_at(IconPosition::Right);

    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=classes
            disabled=inert
            aria-disabled=move || inert().to_string()
            aria-busy=move || is_loading().to_string()
            on:click=handle_click
        >
            {move || {
                is_loading()
                    .then(|| {
                        view! {
                            <span class="btn__spinner" aria-hidden="true">
                                <SpinnerIcon class="btn__spinner-icon" stroke_width=4 />
                            </span>
                        }
                    })
            }}
            {left_icon}
            {children.map(|children| view! { <span class="btn__text">{children()}</span> })}
            {right_icon}
        </button>
    }
}
