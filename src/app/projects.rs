use leptos::{either::EitherOf3, ev::MouseEvent, prelude::*};
use leptos_meta::Title;

use super::{
    components::{Badge, Button, Card, Modal},
    load_or_default, mock_delay,
};
use crate::data::{self, DataError, ProjectDetail};
use crate::ui::classes::{BadgeStyle, BadgeVariant, ButtonVariant, CardVariant, ModalSize, Size};

const DETAIL_DELAY_MS: f64 = 1000.0;

#[component]
fn DetailSkeleton() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 animate-pulse" aria-busy="true">
            <div class="h-8 w-1/2 rounded bg-slate-500/20"></div>
            <div class="h-4 rounded bg-slate-500/10"></div>
            <div class="h-4 rounded bg-slate-500/10"></div>
            <div class="h-4 w-2/3 rounded bg-slate-500/10"></div>
        </div>
    }
}

#[component]
fn DetailSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="mb-6">
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            {children()}
        </section>
    }
}

#[component]
fn ProjectDetailBody(project: ProjectDetail) -> impl IntoView {
    let ProjectDetail {
        name,
        description,
        tech,
        status,
        progress,
        team,
        timeline,
        features,
        screenshots,
        ..
    } = project;

    view! {
        <div class="flex flex-wrap items-center gap-4 mb-6">
            <h2 class="text-2xl font-bold flex-grow">{name}</h2>
            <Badge variant=status.badge() badge_style=BadgeStyle::Soft>
                {status.label()}
            </Badge>
            <div class="flex items-center gap-2 w-48">
                <div class="flex-grow h-2 rounded-full bg-slate-500/20 overflow-hidden">
                    <div
                        class="h-full rounded-full bg-gradient-to-r from-indigo-500 to-cyan-400"
                        style=format!("width: {progress}%")
                    ></div>
                </div>
                <span class="text-sm tabular-nums">{format!("{progress}%")}</span>
            </div>
        </div>

        <DetailSection title="Description">
            <p class="text-slate-600 dark:text-slate-300">{description}</p>
        </DetailSection>
        <DetailSection title="Tech Stack">
            <div class="flex flex-wrap gap-2">
                {tech
                    .into_iter()
                    .map(|t| {
                        view! {
                            <Badge variant=BadgeVariant::Primary badge_style=BadgeStyle::Outline>
                                {t}
                            </Badge>
                        }
                    })
                    .collect_view()}
            </div>
        </DetailSection>
        <DetailSection title="Team">
            <div class="flex flex-wrap gap-3">
                {team
                    .into_iter()
                    .map(|member| {
                        view! {
                            <div class="flex items-center gap-2 px-3 py-2 rounded-lg bg-slate-500/10">
                                <span>"👤"</span>
                                <span>{member}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </DetailSection>
        <DetailSection title="Features">
            <ul class="flex flex-col gap-1">
                {features
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <li class="flex gap-2">
                                <span class="text-emerald-500">"✓"</span>
                                {feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </DetailSection>
        <DetailSection title="Previews">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                {screenshots
                    .into_iter()
                    .map(|shot| {
                        view! {
                            <div class="flex items-center justify-center h-24 rounded-lg bg-slate-500/10 text-center text-sm">
                                {shot}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </DetailSection>
        <DetailSection title="Timeline">
            <dl class="grid grid-cols-2 gap-2 text-sm">
                <dt class="text-slate-500">"Started"</dt>
                <dd>{timeline.start.format("%Y-%m-%d").to_string()}</dd>
                <dt class="text-slate-500">"Expected completion"</dt>
                <dd>{timeline.end.format("%Y-%m-%d").to_string()}</dd>
            </dl>
        </DetailSection>

        <div class="flex flex-wrap gap-2 pt-4 border-t border-slate-500/20">
            <Button size=Size::Small on_click=move |_: MouseEvent| log::info!("edit project")>
                "Edit Project"
            </Button>
            <Button
                size=Size::Small
                variant=ButtonVariant::Secondary
                on_click=move |_: MouseEvent| log::info!("share project")
            >
                "Share"
            </Button>
            <Button
                size=Size::Small
                variant=ButtonVariant::Outline
                on_click=move |_: MouseEvent| log::info!("archive project")
            >
                "Archive"
            </Button>
        </div>
    }
}

/// Loads one project's details behind a simulated request delay.
#[component]
fn ProjectDetailView(id: u32) -> impl IntoView {
    let detail = RwSignal::new(None::<Result<ProjectDetail, DataError>>);
    mock_delay("project detail", DETAIL_DELAY_MS, move || {
        detail.set(Some(data::project_detail(id)));
    });

    move || match detail.get() {
        None => EitherOf3::A(view! { <DetailSkeleton /> }),
        Some(Ok(project)) => EitherOf3::B(view! { <ProjectDetailBody project /> }),
        Some(Err(e)) => {
            log::error!("{e}");
            EitherOf3::C(view! { <p class="text-red-500">{e.to_string()}</p> })
        }
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = load_or_default(data::projects());
    let selected = RwSignal::new(None::<u32>);

    view! {
        <Title text="Projects" />
        <div class="text-center mb-8">
            <h2 class="text-3xl font-bold mb-2">"My Projects"</h2>
            <p class="text-slate-500">"Everything in flight and everything shipped"</p>
        </div>
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {projects
                .into_iter()
                .map(|project| {
                    let id = project.id;
                    view! {
                        <Card variant=CardVariant::Shadow hoverable=true>
                            <div class="flex items-start justify-between gap-2 mb-2">
                                <h3 class="text-lg font-semibold">{project.name}</h3>
                                <Badge variant=project.status.badge() size=Size::Small>
                                    {project.status.label()}
                                </Badge>
                            </div>
                            <p class="text-sm text-slate-500 mb-4">{project.tech}</p>
                            <div class="flex gap-2">
                                <Button
                                    size=Size::Small
                                    on_click=move |_: MouseEvent| selected.set(Some(id))
                                >
                                    "View"
                                </Button>
                                <Button
                                    size=Size::Small
                                    variant=ButtonVariant::Outline
                                    on_click=move |_: MouseEvent| log::info!("edit project {id}")
                                >
                                    "Edit"
                                </Button>
                            </div>
                        </Card>
                    }
                })
                .collect_view()}
        </div>

        <Modal
            open=Signal::derive(move || selected.get().is_some())
            on_close=move |_: ()| selected.set(None)
            title="Project Details"
            size=ModalSize::Large
        >
            {move || selected.get().map(|id| view! { <ProjectDetailView id /> })}
        </Modal>
    }
}
