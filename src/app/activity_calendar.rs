use chrono::{Local, NaiveDate, Utc};
use leptos::{either::Either, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};
use rand::{rngs::SmallRng, SeedableRng};

use super::components::Card;
use crate::activity::{self, format_date, level_color, ActivityDay, WEEKDAY_LABELS};

const GENERATE_DELAY_MS: f64 = 300.0;
const SKELETON_WEEKS: usize = 53;

#[component]
fn CalendarStat(value: Signal<u32>, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center">
            <span class="text-2xl font-bold text-indigo-500">{value}</span>
            <span class="text-xs text-slate-500 uppercase">{label}</span>
        </div>
    }
}

#[component]
fn DayCell(
    day: Option<ActivityDay>,
    index: usize,
    hovered: RwSignal<Option<ActivityDay>>,
    selected: RwSignal<Option<NaiveDate>>,
) -> impl IntoView {
    let Some(day) = day else {
        return Either::Left(view! { <div class="calendar-day calendar-day--empty"></div> });
    };
    let title = format!("{}: {} contributions", format_date(day.date), day.count);
    let style = format!(
        "background-color: {}; animation-delay: {}ms",
        level_color(day.level),
        index * 10
    );
    Either::Right(view! {
        <div
            class=move || {
                if selected.get() == Some(day.date) {
                    "calendar-day calendar-day--selected"
                } else {
                    "calendar-day"
                }
            }
            style=style
            title=title
            data-level=day.level.to_string()
            on:mouseenter=move |_| hovered.set(Some(day))
            on:mouseleave=move |_| hovered.set(None)
            on:click=move |_| selected.set(Some(day.date))
        ></div>
    })
}

/// A year of simulated daily contributions, laid out as week columns.
#[component]
pub fn ActivityCalendar(#[prop(into)] contributions: Signal<u32>) -> impl IntoView {
    let days = RwSignal::new(Vec::<ActivityDay>::new());
    let hovered = RwSignal::new(None::<ActivityDay>);
    let selected = RwSignal::new(None::<NaiveDate>);

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| {
            let mut rng = SmallRng::seed_from_u64(Utc::now().timestamp_millis().unsigned_abs());
            let year = activity::generate_year(Local::now().date_naive(), &mut rng);
            log::debug!("generated {} days of activity", year.len());
            days.set(year);
        },
        GENERATE_DELAY_MS,
    );

    // a new contribution total means a fresh calendar
    Effect::watch(
        move || contributions.get(),
        move |current, previous, _| {
            if !activity::contributions_changed(previous.copied(), *current) {
                return;
            }
            stop();
            selected.set(None);
            start(());
        },
        true,
    );

    let weeks = Memo::new(move |_| days.with(|d| activity::weeks(d)));
    let streaks = Memo::new(move |_| days.with(|d| activity::streaks(d)));
    let total = Signal::derive(move || days.with(|d| activity::total(d)));

    let grid = move || {
        let weeks = weeks.get();
        let columns = weeks.len();
        let months = activity::month_labels(&weeks)
            .into_iter()
            .map(|(column, name)| {
                view! {
                    <span class="calendar-month" style=format!("grid-column-start: {}", column + 1)>
                        {name}
                    </span>
                }
            })
            .collect_view();
        let week_columns = weeks
            .iter()
            .enumerate()
            .map(|(w, week)| {
                let cells = (0..7)
                    .map(|row| {
                        let day = week.iter().find(|d| d.row() == row).copied();
                        let index = w * 7 + row;
                        view! { <DayCell day index hovered selected /> }
                    })
                    .collect_view();
                view! { <div class="calendar-week">{cells}</div> }
            })
            .collect_view();

        view! {
            <div class="overflow-x-auto pb-2">
                <div
                    class="calendar-months"
                    style=format!("grid-template-columns: repeat({columns}, var(--calendar-cell))")
                >
                    {months}
                </div>
                <div class="flex gap-2">
                    <div class="calendar-weekdays">
                        {WEEKDAY_LABELS
                            .iter()
                            .map(|label| view! { <span>{*label}</span> })
                            .collect_view()}
                    </div>
                    <div class="calendar-grid">{week_columns}</div>
                </div>
            </div>
        }
    };

    let skeleton = move || {
        view! {
            <div class="calendar-grid animate-pulse" aria-busy="true">
                {(0..SKELETON_WEEKS)
                    .map(|_| {
                        view! {
                            <div class="calendar-week">
                                {(0..7)
                                    .map(|_| view! { <div class="calendar-day calendar-day--loading"></div> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
    };

    view! {
        <Card title="Activity Calendar" class="my-8">
            {move || {
                if days.with(Vec::is_empty) {
                    Either::Left(skeleton())
                } else {
                    Either::Right(
                        view! {
                            <div class="flex justify-around mb-6">
                                <CalendarStat value=total label="Total" />
                                <CalendarStat
                                    value=Signal::derive(move || streaks.get().current)
                                    label="Current Streak"
                                />
                                <CalendarStat
                                    value=Signal::derive(move || streaks.get().longest)
                                    label="Longest Streak"
                                />
                            </div>
                            {grid}
                            <div class="flex items-center justify-end gap-2 mt-4 text-xs text-slate-500">
                                <span>"Less"</span>
                                {(0..=4u8)
                                    .map(|level| {
                                        view! {
                                            <div
                                                class="calendar-day"
                                                style=format!("background-color: {}", level_color(level))
                                            ></div>
                                        }
                                    })
                                    .collect_view()}
                                <span>"More"</span>
                            </div>
                            {move || {
                                hovered
                                    .get()
                                    .map(|day| {
                                        view! {
                                            <div class="calendar-tooltip" role="tooltip">
                                                <div class="font-semibold">{format_date(day.date)}</div>
                                                <div>{format!("{} contributions", day.count)}</div>
                                            </div>
                                        }
                                    })
                            }}
                            {move || {
                                selected
                                    .get()
                                    .map(|date| {
                                        let count = days
                                            .with(|d| activity::find(d, date).map_or(0, |d| d.count));
                                        view! {
                                            <div class="mt-4 p-4 rounded-lg bg-indigo-500/10">
                                                <h4 class="font-semibold mb-1">"Selected day"</h4>
                                                <p>
                                                    {format!(
                                                        "{} had {count} contributions",
                                                        format_date(date),
                                                    )}
                                                </p>
                                            </div>
                                        }
                                    })
                            }}
                        },
                    )
                }
            }}
        </Card>
    }
}
