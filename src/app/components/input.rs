use leptos::{
    ev::{Event, MouseEvent},
    html,
    prelude::*,
};

use crate::ui::{
    classes::{ClassList, InputVariant, Modifier, Size},
    control::{ChangeEvent, FormControl},
    unique_id,
};

/// Text input that runs controlled when `value` is supplied and keeps its own value otherwise.
///
/// In controlled mode every edit is reported through `on_change` and the field always shows
/// the owner's value, so an owner that ignores an edit leaves the field unchanged.
#[component]
pub fn Input(
    #[prop(into, optional)] label: Option<String>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into, optional)] error: MaybeProp<String>,
    #[prop(into, optional)] hint: Option<String>,
    #[prop(optional)] size: Size,
    #[prop(optional)] variant: InputVariant,
    #[prop(into, optional)] prefix: Option<String>,
    #[prop(into, optional)] suffix: Option<String>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] clearable: bool,
    #[prop(optional)] full_width: bool,
    #[prop(into, optional)] value: Option<Signal<String>>,
    #[prop(into, optional)] on_change: Option<Callback<ChangeEvent>>,
    #[prop(into, optional)] on_clear: Option<Callback<()>>,
    #[prop(optional)] input_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let control = RwSignal::new(FormControl::new(value.is_some()));
    let (focused, set_focused) = signal(false);

    let input_id = unique_id("input");
    let error_id = format!("{input_id}-error");
    let hint_id = format!("{input_id}-hint");

    let external = move || value.map(|v| v.get());
    let display = move || {
        let external = external();
        control.with(|c| c.display(external.as_deref()))
    };
    let has_value = move || {
        let external = external();
        control.with(|c| c.has_value(external.as_deref()))
    };
    let is_disabled = move || disabled.get().unwrap_or(false);
    let has_error = move || error.get().is_some_and(|e| !e.is_empty());

    // the field must show the owner's value even when the owner rejected the edit
    let sync_controlled = move || {
        let (Some(value), Some(el)) = (value, input_ref.get_untracked()) else {
            return;
        };
        let owned = value.get_untracked();
        if el.value() != owned {
            el.set_value(&owned);
        }
    };

    let handle_input = move |ev: Event| {
        let next = event_target_value(&ev);
        let Some(change) = control.try_update(|c| c.change(next)) else {
            return;
        };
        if let Some(on_change) = on_change {
            on_change.run(change);
        }
        sync_controlled();
    };

    let handle_clear = move |_: MouseEvent| {
        let Some(change) = control.try_update(|c| c.clear()) else {
            return;
        };
        log::debug!("clearing input");
        if let Some(on_change) = on_change {
            on_change.run(change);
        }
        if let Some(on_clear) = on_clear {
            on_clear.run(());
        }
        sync_controlled();
    };

    let has_prefix = prefix.is_some();
    let has_suffix = suffix.is_some();
    let container_classes = move || {
        ClassList::new("input__container")
            .modifier(&variant)
            .modifier(&size)
            .flag("focused", focused.get())
            .flag("error", has_error())
            .flag("disabled", is_disabled())
            .flag("with-prefix", has_prefix)
            .flag("with-suffix", has_suffix)
            .build()
    };
    let wrapper_classes = ClassList::new("input-wrapper")
        .flag("full-width", full_width)
        .build();

    let described_by = {
        let error_id = error_id.clone();
        let hint_id = hint_id.clone();
        let has_hint = hint.is_some();
        move || {
            if has_error() {
                Some(error_id.clone())
            } else if has_hint {
                Some(hint_id.clone())
            } else {
                None
            }
        }
    };

    view! {
        <div class=wrapper_classes data-size=size.as_str()>
            {label
                .map(|label| {
                    view! {
                        <label for=input_id.clone() class="input__label">
                            {label}
                            {required
                                .then(|| {
                                    view! {
                                        <span class="input__required" aria-label="required">
                                            "*"
                                        </span>
                                    }
                                })}
                        </label>
                    }
                })}
            <div class=container_classes>
                {prefix
                    .map(|prefix| {
                        view! {
                            <div class="input__prefix" aria-hidden="true">
                                {prefix}
                            </div>
                        }
                    })}
                <input
                    node_ref=input_ref
                    id=input_id.clone()
                    type="text"
                    class=move || {
                        if has_value() { "input__field input__field--has-value" } else { "input__field" }
                    }
                    placeholder=placeholder
                    prop:value=display
                    disabled=is_disabled
                    required=required
                    aria-invalid=move || has_error().to_string()
                    aria-describedby=described_by
                    on:input=handle_input
                    on:focus=move |_| set_focused.set(true)
                    on:blur=move |_| set_focused.set(false)
                />
                {move || {
                    (clearable && has_value() && !is_disabled())
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="input__clear"
                                    aria-label="Clear input"
                                    tabindex="-1"
                                    on:click=handle_clear
                                >
                                    <svg viewBox="0 0 24 24" class="input__clear-icon">
                                        <path
                                            d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"
                                            fill="currentColor"
                                        />
                                    </svg>
                                </button>
                            }
                        })
                }}
                {suffix
                    .map(|suffix| {
                        view! {
                            <div class="input__suffix" aria-hidden="true">
                                {suffix}
                            </div>
                        }
                    })}
            </div>
            {move || {
                error
                    .get()
                    .filter(|e| !e.is_empty())
                    .map(|e| {
                        view! {
                            <div id=error_id.clone() class="input__error" role="alert">
                                <svg viewBox="0 0 24 24" class="input__error-icon" aria-hidden="true">
                                    <path
                                        d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z"
                                        fill="currentColor"
                                    />
                                </svg>
                                {e}
                            </div>
                        }
                    })
            }}
            {move || {
                hint.clone()
                    .filter(|_| !has_error())
                    .map(|hint| {
                        view! {
                            <div id=hint_id.clone() class="input__hint">
                                {hint}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
