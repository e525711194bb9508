use leptos::{
    ev::{self, KeyboardEvent, MouseEvent},
    html,
    portal::Portal,
    prelude::*,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::ui::{
    classes::{ClassList, ModalSize},
    focus::{
        initial_focus, key_action, tab_move, FocusController, InitialFocus, KeyAction, TabMove,
        FOCUSABLE_SELECTOR,
    },
    unique_id,
};

fn focusable_elements(panel: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = panel.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn active_element() -> Option<HtmlElement> {
    document().active_element()?.dyn_into::<HtmlElement>().ok()
}

fn body_overflow() -> String {
    document()
        .body()
        .and_then(|body| body.style().get_property_value("overflow").ok())
        .unwrap_or_default()
}

fn set_body_overflow(value: &str) {
    let Some(body) = document().body() else {
        return;
    };
    let style = body.style();
    let res = if value.is_empty() {
        style.remove_property("overflow").map(|_| ())
    } else {
        style.set_property("overflow", value)
    };
    if let Err(e) = res {
        log::warn!("couldn't set body overflow: {e:?}");
    }
}

fn focus_first(panel: &HtmlElement) {
    let focusables = focusable_elements(panel);
    let res = match initial_focus(focusables.len()) {
        InitialFocus::Descendant(i) => focusables.get(i).map_or(Ok(()), |el| el.focus()),
        InitialFocus::Container => panel.focus(),
    };
    if let Err(e) = res {
        log::warn!("couldn't move focus into modal: {e:?}");
    }
}

fn trap_tab(ev: &KeyboardEvent, panel: &HtmlElement, backwards: bool) {
    let focusables = focusable_elements(panel);
    let current = document().active_element().and_then(|active| {
        focusables
            .iter()
            .position(|el| AsRef::<Element>::as_ref(el) == &active)
    });
    match tab_move(focusables.len(), current, backwards) {
        TabMove::Native => {}
        TabMove::Focus(i) => {
            ev.prevent_default();
            if let Some(el) = focusables.get(i) {
                let _ = el.focus();
            }
        }
        TabMove::Hold => ev.prevent_default(),
    }
}

/// Dialog rendered into `<body>` while `open` is true.
///
/// Opening locks page scroll, remembers the focused element and moves focus inside. Closing,
/// or tearing the component down while open, undoes all of that exactly once.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into, optional)] title: Option<String>,
    #[prop(optional)] size: ModalSize,
    #[prop(default = true)] close_on_overlay: bool,
    #[prop(default = true)] close_on_escape: bool,
    #[prop(default = true)] show_close_button: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let panel_ref = NodeRef::<html::Div>::new();
    let controller = StoredValue::new_local(FocusController::<HtmlElement>::new());

    let engage = move || {
        let focused = active_element();
        let overflow = body_overflow();
        let engaged = controller
            .try_update_value(|c| c.open(focused, overflow))
            .unwrap_or(false);
        if !engaged {
            return;
        }
        log::debug!("modal opened");
        set_body_overflow("hidden");
        request_animation_frame(move || {
            if let Some(panel) = panel_ref.get_untracked() {
                focus_first(&panel);
            }
        });
    };

    let release = move || {
        let Some(release) = controller.try_update_value(|c| c.close()).flatten() else {
            return;
        };
        log::debug!("modal closed");
        set_body_overflow(&release.overflow);
        if let Some(el) = release.restore_target(|el| el.is_connected()) {
            let _ = el.focus();
        }
    };

    Effect::watch(
        move || open.get(),
        move |is_open, _, _| {
            if *is_open {
                engage();
            } else {
                release();
            }
        },
        true,
    );

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        match key_action(&ev.key(), ev.shift_key(), close_on_escape) {
            KeyAction::RequestClose => {
                ev.prevent_default();
                on_close.run(());
            }
            KeyAction::Tab { backwards } => {
                if let Some(panel) = panel_ref.get_untracked() {
                    trap_tab(&ev, &panel, backwards);
                }
            }
            KeyAction::Ignore => {}
        }
    });

    on_cleanup(move || {
        keydown.remove();
        release();
    });

    let has_title = title.is_some();
    let title = StoredValue::new(title);
    let title_id = StoredValue::new(unique_id("modal-title"));
    let children = StoredValue::new(children);
    let panel_classes = ClassList::new("modal").modifier(&size).build();
    let panel_classes = StoredValue::new(panel_classes);

    let handle_overlay = move |ev: MouseEvent| {
        if close_on_overlay && ev.target() == ev.current_target() {
            on_close.run(());
        }
    };

    let dialog = move || {
        view! {
            <div
                class="modal-overlay"
                role="dialog"
                aria-modal="true"
                aria-labelledby=has_title.then(|| title_id.get_value())
                on:click=handle_overlay
            >
                <div
                    node_ref=panel_ref
                    class=panel_classes.get_value()
                    tabindex="-1"
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    {(has_title || show_close_button)
                        .then(|| {
                            view! {
                                <div class="modal__header">
                                    {title
                                        .get_value()
                                        .map(|t| {
                                            view! {
                                                <h2 id=title_id.get_value() class="modal__title">
                                                    {t}
                                                </h2>
                                            }
                                        })}
                                    {show_close_button
                                        .then(|| {
                                            view! {
                                                <button
                                                    type="button"
                                                    class="modal__close"
                                                    aria-label="Close dialog"
                                                    on:click=move |_| on_close.run(())
                                                >
                                                    <svg viewBox="0 0 24 24" class="modal__close-icon">
                                                        <path
                                                            d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"
                                                            fill="currentColor"
                                                        />
                                                    </svg>
                                                </button>
                                            }
                                        })}
                                </div>
                            }
                        })}
                    <div class="modal__body">{children.with_value(|children| children())}</div>
                </div>
            </div>
        }
    };

    view! {
        <Show when=move || open.get()>
            <Portal>{dialog()}</Portal>
        </Show>
    }
}
