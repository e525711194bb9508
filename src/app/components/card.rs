use leptos::{
    ev::{KeyboardEvent, MouseEvent},
    prelude::*,
};

use super::SpinnerIcon;
use crate::ui::{
    card_accepts_click,
    classes::{CardVariant, ClassList, Size},
    is_activation_key,
};

#[component]
pub fn Card(
    #[prop(into, optional)] title: Option<String>,
    #[prop(into, optional)] header: Option<ViewFn>,
    #[prop(into, optional)] footer: Option<ViewFn>,
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] size: Size,
    #[prop(optional)] hoverable: bool,
    #[prop(optional)] clickable: bool,
    #[prop(into, optional)] loading: MaybeProp<bool>,
    #[prop(into, optional)] class: Option<String>,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let is_loading = move || loading.get().unwrap_or(false);

    let classes = move || {
        let base = ClassList::new("card")
            .modifier(&variant)
            .modifier(&size)
            .flag("hoverable", hoverable)
            .flag("clickable", clickable)
            .flag("loading", is_loading())
            .build();
        match &class {
            Some(extra) => format!("{base} {extra}"),
            None => base,
        }
    };

    let activate = move || {
        if !card_accepts_click(clickable, is_loading()) {
            return;
        }
        if let Some(on_click) = on_click {
            on_click.run(());
        }
    };

    let header = match (header, title) {
        (Some(header), _) => Some(header.run()),
        (None, Some(title)) => Some(view! { <h3 class="card__title">{title}</h3> }.into_any()),
        (None, None) => None,
    };

    view! {
        <div
            class=classes
            role=clickable.then_some("button")
            tabindex=clickable.then_some("0")
            aria-busy=move || is_loading().to_string()
            on:click=move |_: MouseEvent| activate()
            on:keydown=move |ev: KeyboardEvent| {
                if clickable && is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    activate();
                }
            }
        >
            {move || {
                is_loading()
                    .then(|| {
                        view! {
                            <div class="card__loading-overlay">
                                <div class="card__spinner">
                                    <SpinnerIcon class="card__spinner-icon" />
                                </div>
                            </div>
                        }
                    })
            }}
            {header.map(|header| view! { <div class="card__header">{header}</div> })}
            <div class="card__body">{children()}</div>
            {footer.map(|footer| view! { <div class="card__footer">{footer.run()}</div> })}
        </div>
    }
}
