use leptos::{ev::MouseEvent, prelude::*};
use leptos_meta::Title;

use super::{components::Button, load_or_default, mock_delay, Tab};
use crate::data::{self, Stats};
use crate::ui::classes::{ButtonVariant, Size};

const STATS_DELAY_MS: f64 = 500.0;

#[component]
fn StatItem(value: Signal<u32>, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-1 p-6">
            <span class="text-4xl font-bold text-indigo-500 tabular-nums transition-all duration-700">
                {value}
            </span>
            <span class="text-sm text-slate-500 uppercase tracking-wide">{label}</span>
        </div>
    }
}

#[component]
pub fn HomePage(set_tab: WriteSignal<Tab>) -> impl IntoView {
    let stats = RwSignal::new(Stats::default());
    mock_delay("stats", STATS_DELAY_MS, move || {
        stats.set(load_or_default(data::stats()));
    });

    let features = load_or_default(data::features());

    view! {
        <Title text="Home" />
        <section class="flex flex-col lg:flex-row items-center gap-12 py-12">
            <div class="flex-1">
                <h1 class="text-4xl md:text-5xl font-extrabold leading-tight mb-6">
                    "Welcome to a modern "
                    <span class="bg-gradient-to-r from-indigo-500 to-cyan-400 bg-clip-text text-transparent">
                        "Rust web app"
                    </span>
                </h1>
                <p class="text-lg text-slate-600 dark:text-slate-300 mb-8 max-w-xl">
                    "A fast, reactive dashboard compiled to WebAssembly, with a reusable component library and a polished design."
                </p>
                <div class="flex flex-wrap gap-4">
                    <Button size=Size::Large on_click=move |_: MouseEvent| set_tab.set(Tab::Profile)>
                        "Get Started"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=Size::Large
                        on_click=move |_: MouseEvent| set_tab.set(Tab::About)
                    >
                        "Learn More"
                    </Button>
                </div>
            </div>
            <div class="relative flex-1 h-64 w-full hidden md:block" aria-hidden="true">
                <div class="absolute top-0 left-1/4 text-5xl p-6 rounded-2xl shadow-xl bg-white dark:bg-slate-800 animate-bounce">
                    "💡"
                </div>
                <div class="absolute top-1/3 right-1/4 text-5xl p-6 rounded-2xl shadow-xl bg-white dark:bg-slate-800 animate-pulse">
                    "⚡"
                </div>
                <div class="absolute bottom-0 left-1/3 text-5xl p-6 rounded-2xl shadow-xl bg-white dark:bg-slate-800">
                    "🎨"
                </div>
            </div>
        </section>

        <section class="grid grid-cols-1 sm:grid-cols-3 gap-4 my-8 rounded-xl bg-white dark:bg-slate-900 shadow">
            <StatItem value=Signal::derive(move || stats.get().projects) label="Projects" />
            <StatItem value=Signal::derive(move || stats.get().tasks) label="Tasks Done" />
            <StatItem value=Signal::derive(move || stats.get().achievements) label="Achievements" />
        </section>

        <section class="my-12">
            <div class="text-center mb-8">
                <h2 class="text-3xl font-bold mb-2">"Core Features"</h2>
                <p class="text-slate-500">"Explore what this app is built on"</p>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {features
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <div class="p-6 rounded-xl bg-white dark:bg-slate-900 shadow hover:-translate-y-1 transition-transform">
                                <div class="text-4xl mb-4">{feature.icon}</div>
                                <h3 class="text-lg font-semibold mb-2">{feature.title}</h3>
                                <p class="text-sm text-slate-500">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
