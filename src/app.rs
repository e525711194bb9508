mod about;
mod activity_calendar;
pub mod components;
mod header;
mod homepage;
mod profile;
mod projects;
mod showcase;
mod skill_chart;

use codee::string::JsonSerdeWasmCodec;
use leptos::{either::*, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{storage::use_local_storage, use_timeout_fn, UseTimeoutFnReturn};

use crate::data::DataError;
use crate::ui::Theme;

use about::AboutPage;
use header::Header;
use homepage::HomePage;
use profile::ProfilePage;
use projects::ProjectsPage;
use showcase::ShowcasePage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Profile,
    Projects,
    Components,
    About,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Profile,
        Tab::Projects,
        Tab::Components,
        Tab::About,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Profile => "Profile",
            Tab::Projects => "Projects",
            Tab::Components => "Components",
            Tab::About => "About",
        }
    }
}

/// Unwraps mock data, falling back to an empty value. A broken data file shouldn't take
/// the whole page down.
pub(crate) fn load_or_default<T: Default>(res: Result<T, DataError>) -> T {
    res.unwrap_or_else(|e| {
        log::error!("{e}");
        T::default()
    })
}

/// Runs `done` once after `ms` milliseconds of simulated loading. The timer is cleared if
/// the calling view is torn down first.
pub(crate) fn mock_delay<F>(label: &'static str, ms: f64, done: F)
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            log::debug!("{label} loaded after {ms}ms");
            done();
        },
        ms,
    );
    start(());
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Portfolio Dashboard - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Dashboard />
            </Routes>
        </Router>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let (tab, set_tab) = signal(Tab::Home);
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");

    // the class lives on <html> so portaled modals pick up the theme too
    Effect::new(move |_| {
        let theme = theme.get();
        let Some(el) = document().document_element() else {
            return;
        };
        let classes = el.class_list();
        for stale in theme.others() {
            if classes.remove_1(stale.as_str()).is_err() {
                log::warn!("could not remove theme class {}", stale.as_str());
            }
        }
        if classes.add_1(theme.as_str()).is_err() {
            log::warn!("could not add theme class {}", theme.as_str());
        }
    });

    view! {
        <div class="min-h-screen flex flex-col bg-slate-50 text-slate-900 dark:bg-slate-950 dark:text-slate-100 transition-colors">
            <Header tab set_tab theme set_theme />
            <main class="flex flex-col flex-grow mx-auto w-full max-w-6xl px-4 py-8">
                {move || match tab.get() {
                    Tab::Home => EitherOf5::A(view! { <HomePage set_tab /> }),
                    Tab::Profile => EitherOf5::B(view! { <ProfilePage /> }),
                    Tab::Projects => EitherOf5::C(view! { <ProjectsPage /> }),
                    Tab::Components => EitherOf5::D(view! { <ShowcasePage /> }),
                    Tab::About => EitherOf5::E(view! { <AboutPage /> }),
                }}
            </main>
            <footer class="py-6 text-center text-sm text-slate-500">
                "© 2024 Portfolio Dashboard. Built with Leptos + Rust"
            </footer>
        </div>
    }
}
