use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{Badge, Card};
use crate::ui::{classes::BadgeVariant, UI_CONFIG};

const STACK: &[&str] = &[
    "Leptos 0.8 (client-side rendering)",
    "Rust compiled to WebAssembly",
    "Trunk",
    "Tailwind CSS",
];

const HIGHLIGHTS: &[&str] = &[
    "Fine-grained reactivity",
    "Responsive layout",
    "Light and dark themes",
    "Accessible component library",
];

fn list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="list-disc list-inside space-y-1">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <h2 class="text-3xl font-bold text-center mb-8">"About This App"</h2>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <Card title="Tech Stack">{list(STACK)}</Card>
            <Card title="Highlights">{list(HIGHLIGHTS)}</Card>
        </div>
        <div class="flex flex-wrap justify-center gap-3 mt-8 text-sm text-slate-500">
            <Badge variant=BadgeVariant::Info>{format!("UI library v{}", UI_CONFIG.version)}</Badge>
            <Badge variant=BadgeVariant::Gray>{format!("Built {}", env!("BUILD_TIME"))}</Badge>
        </div>
    }
}
