use leptos::prelude::*;

use super::Tab;
use crate::ui::Theme;

#[component]
pub fn Header(
    tab: ReadSignal<Tab>,
    set_tab: WriteSignal<Tab>,
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    let toggle_theme = move |_| {
        let next = theme.get_untracked().toggled();
        log::debug!("switching to {} theme", next.as_str());
        set_theme.set(next);
    };

    view! {
        <header class="sticky top-0 z-40 shadow-lg bg-white/80 dark:bg-slate-900/80 backdrop-blur">
            <nav class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-3 flex flex-wrap items-center justify-between gap-4">
                <div class="flex items-center gap-2">
                    <span class="text-2xl">"🦀"</span>
                    <h2 class="text-xl font-bold">"Portfolio Dashboard"</h2>
                </div>
                <div class="flex flex-wrap items-center gap-1">
                    {Tab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class=move || {
                                        if tab.get() == t {
                                            "px-3 py-2 rounded-md font-medium bg-indigo-500/20 text-indigo-600 dark:text-indigo-300"
                                        } else {
                                            "px-3 py-2 rounded-md font-medium hover:bg-slate-500/10"
                                        }
                                    }
                                    aria-current=move || (tab.get() == t).then_some("page")
                                    on:click=move |_| set_tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="ml-2 px-3 py-2 rounded-md text-lg hover:bg-slate-500/10"
                        aria-label="Toggle theme"
                        on:click=toggle_theme
                    >
                        {move || theme.get().icon()}
                    </button>
                </div>
            </nav>
        </header>
    }
}
