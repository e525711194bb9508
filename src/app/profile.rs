use leptos::{either::Either, ev::MouseEvent, prelude::*};
use leptos_meta::Title;

use super::{
    activity_calendar::ActivityCalendar,
    components::{Button, Input},
    load_or_default, mock_delay,
    skill_chart::SkillChart,
};
use crate::data::{self, Achievement, Profile, Skill};
use crate::ui::{
    classes::{ButtonVariant, Size},
    control::ChangeEvent,
};

const SKILLS_DELAY_MS: f64 = 800.0;
const ACHIEVEMENTS_DELAY_MS: f64 = 1000.0;

#[component]
fn StatCard(
    icon: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    gradient: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-5 rounded-xl bg-white dark:bg-slate-900 shadow">
            <div class=format!(
                "flex items-center justify-center w-12 h-12 rounded-xl text-2xl bg-gradient-to-br {gradient}",
            )>{icon}</div>
            <div>
                <div class="text-2xl font-bold">{value}</div>
                <div class="text-sm text-slate-500">{label}</div>
            </div>
        </div>
    }
}

#[component]
fn ProfileEditor(draft: RwSignal<Profile>) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-3">
            <Input
                label="Name"
                full_width=true
                value=Signal::derive(move || draft.with(|d| d.name.clone()))
                on_change=move |ev: ChangeEvent| draft.update(|d| d.name = ev.value)
            />
            <Input
                label="Title"
                full_width=true
                value=Signal::derive(move || draft.with(|d| d.title.clone()))
                on_change=move |ev: ChangeEvent| draft.update(|d| d.title = ev.value)
            />
            <textarea
                class="w-full rounded-md border border-slate-300 dark:border-slate-700 bg-transparent p-2"
                rows="3"
                aria-label="Bio"
                prop:value=move || draft.with(|d| d.bio.clone())
                on:input=move |ev| draft.update(|d| d.bio = event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
fn SkillBars(skills: RwSignal<Vec<Skill>>) -> impl IntoView {
    move || {
        if skills.with(Vec::is_empty) {
            Either::Left(view! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4" aria-busy="true">
                    {(0..8)
                        .map(|_| view! { <div class="h-12 rounded-lg bg-slate-500/10 animate-pulse"></div> })
                        .collect_view()}
                </div>
            })
        } else {
            Either::Right(view! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {skills
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <div>
                                    <div class="flex items-center gap-2 mb-1">
                                        <span>{skill.icon}</span>
                                        <span class="flex-grow font-medium">{skill.name}</span>
                                        <span class="text-sm text-indigo-500">
                                            {format!("{}%", skill.level)}
                                        </span>
                                    </div>
                                    <div class="h-2 rounded-full bg-slate-500/20 overflow-hidden">
                                        <div
                                            class="skill-progress h-full rounded-full bg-gradient-to-r from-indigo-500 to-cyan-400"
                                            style=format!(
                                                "width: {}%; animation-delay: {:.1}s",
                                                skill.level,
                                                i as f64 * 0.1,
                                            )
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            })
        }
    }
}

#[component]
fn AchievementTimeline(achievements: RwSignal<Vec<Achievement>>) -> impl IntoView {
    move || {
        if achievements.with(Vec::is_empty) {
            Either::Left(view! {
                <div class="flex flex-col gap-4" aria-busy="true">
                    {(0..4)
                        .map(|_| view! { <div class="h-20 rounded-lg bg-slate-500/10 animate-pulse"></div> })
                        .collect_view()}
                </div>
            })
        } else {
            Either::Right(view! {
                <ol class="relative border-l-2 border-indigo-500/30 ml-2">
                    {achievements
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, achievement)| {
                            view! {
                                <li
                                    class="achievement mb-6 ml-6"
                                    data-kind=achievement.kind.as_str()
                                    style=format!("animation-delay: {:.1}s", i as f64 * 0.2)
                                >
                                    <span class="absolute -left-[9px] w-4 h-4 rounded-full bg-indigo-500"></span>
                                    <h4 class="font-semibold">{achievement.title}</h4>
                                    <p class="text-sm text-slate-500">{achievement.description}</p>
                                    <time class="text-xs text-slate-400">
                                        {achievement.date.format("%Y-%m-%d").to_string()}
                                    </time>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            })
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = RwSignal::new(load_or_default(data::profile()));
    let draft = RwSignal::new(Profile::default());
    let editing = RwSignal::new(false);

    let skills = RwSignal::new(Vec::<Skill>::new());
    let achievements = RwSignal::new(Vec::<Achievement>::new());
    mock_delay("skills", SKILLS_DELAY_MS, move || {
        skills.set(load_or_default(data::skills()));
    });
    mock_delay("achievements", ACHIEVEMENTS_DELAY_MS, move || {
        achievements.set(load_or_default(data::achievements()));
    });

    let start_edit = move |_: MouseEvent| {
        draft.set(profile.get_untracked());
        editing.set(true);
    };
    let save = move |_: MouseEvent| {
        log::info!("saving profile edits");
        profile.set(draft.get_untracked());
        editing.set(false);
    };
    let cancel = move |_: MouseEvent| editing.set(false);

    let field = move |f: fn(&Profile) -> String| Signal::derive(move || profile.with(f));

    view! {
        <Title text="Profile" />
        <section class="p-6 rounded-xl bg-white dark:bg-slate-900 shadow">
            <div class="flex flex-col md:flex-row gap-6 items-start">
                <div class="relative">
                    <div class="w-24 h-24 flex items-center justify-center text-5xl rounded-full bg-gradient-to-br from-indigo-500 to-cyan-400">
                        {move || profile.with(|p| p.avatar.clone())}
                    </div>
                    <span
                        class="absolute bottom-1 right-1 w-4 h-4 rounded-full bg-emerald-500 ring-2 ring-white dark:ring-slate-900"
                        aria-label="online"
                    ></span>
                </div>
                <div class="flex-grow min-w-0">
                    {move || {
                        if editing.get() {
                            Either::Left(view! { <ProfileEditor draft /> })
                        } else {
                            Either::Right(view! {
                                <h2 class="text-2xl font-bold">{field(|p| p.name.clone())}</h2>
                                <p class="text-indigo-500 font-medium">{field(|p| p.title.clone())}</p>
                                <p class="mt-2 text-slate-600 dark:text-slate-300">
                                    {field(|p| p.bio.clone())}
                                </p>
                            })
                        }
                    }}
                </div>
                <div class="flex gap-2">
                    {move || {
                        if editing.get() {
                            Either::Left(view! {
                                <Button variant=ButtonVariant::Success size=Size::Small on_click=save>
                                    "Save"
                                </Button>
                                <Button variant=ButtonVariant::Ghost size=Size::Small on_click=cancel>
                                    "Cancel"
                                </Button>
                            })
                        } else {
                            Either::Right(view! {
                                <Button
                                    variant=ButtonVariant::Secondary
                                    size=Size::Small
                                    icon="✏️"
                                    on_click=start_edit
                                >
                                    "Edit"
                                </Button>
                            })
                        }
                    }}
                </div>
            </div>
            <div class="flex flex-wrap gap-6 mt-6 pt-6 border-t border-slate-500/20 text-sm">
                <span>"📍 " {field(|p| p.location.clone())}</span>
                <span>"📧 " {field(|p| p.email.clone())}</span>
                <span>"💻 " {field(|p| p.github.clone())}</span>
            </div>
        </section>

        <section class="grid grid-cols-1 md:grid-cols-3 gap-4 my-8">
            <StatCard
                icon="📅"
                label="Years of Experience"
                value=field(|p| format!("{} yrs", p.experience))
                gradient="from-indigo-500 to-cyan-400"
            />
            <StatCard
                icon="🚀"
                label="Projects Shipped"
                value=field(|p| p.projects.to_string())
                gradient="from-emerald-500 to-teal-400"
            />
            <StatCard
                icon="⭐"
                label="Contributions"
                value=field(|p| p.contributions.to_string())
                gradient="from-amber-500 to-yellow-400"
            />
        </section>

        <section class="my-8">
            <h3 class="text-xl font-bold mb-4">"Skills"</h3>
            <SkillBars skills />
        </section>

        <section class="my-8">
            <h3 class="text-xl font-bold mb-4">"Recent Achievements"</h3>
            <AchievementTimeline achievements />
        </section>

        <SkillChart skills />
        <ActivityCalendar contributions=Memo::new(move |_| profile.with(|p| p.contributions)) />
    }
}
