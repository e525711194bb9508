use leptos::{either::Either, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::components::Card;
use crate::data::Skill;
use crate::radar::{svg_points, RadarLayout, SkillPoint};

const REVEAL_DELAY_MS: f64 = 500.0;

fn coord(v: f64) -> String {
    format!("{v:.2}")
}

/// Radar chart of skill levels. New skills are drawn after a short delay so the area
/// animates in.
#[component]
pub fn SkillChart(#[prop(into)] skills: Signal<Vec<Skill>>) -> impl IntoView {
    let revealed = RwSignal::new(Vec::<Skill>::new());

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| {
            log::debug!("revealing skill chart");
            revealed.set(skills.get_untracked());
        },
        REVEAL_DELAY_MS,
    );

    Effect::watch(
        move || skills.track(),
        move |_, _, _| {
            stop();
            if skills.with_untracked(Vec::is_empty) {
                revealed.set(Vec::new());
            } else {
                start(());
            }
        },
        true,
    );

    let layout = RadarLayout::default();
    let size = layout.size().to_string();

    let chart = move || {
        let center = coord(layout.center);
        let skills = revealed.get();
        let points: Vec<SkillPoint> = skills.iter().map(SkillPoint::from).collect();
        let vertices = layout.vertices(&points);
        let area = svg_points(vertices.iter().map(|v| (v.x, v.y)));

        let rings = layout
            .grid(points.len())
            .into_iter()
            .map(|ring| {
                view! {
                    <polygon
                        points=svg_points(ring.points)
                        data-level=ring.level.to_string()
                        fill="none"
                        stroke="currentColor"
                        stroke-opacity="0.15"
                        stroke-width="1"
                    />
                }
            })
            .collect_view();
        let spokes = layout
            .spokes(points.len())
            .into_iter()
            .map(|(x, y)| {
                view! {
                    <line
                        x1=center.clone()
                        y1=center.clone()
                        x2=coord(x)
                        y2=coord(y)
                        stroke="currentColor"
                        stroke-opacity="0.15"
                        stroke-width="1"
                    />
                }
            })
            .collect_view();
        let dots = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| {
                view! {
                    <circle
                        class="radar__point"
                        cx=coord(v.x)
                        cy=coord(v.y)
                        r="4"
                        fill="#22d3ee"
                        stroke="#6366f1"
                        stroke-width="2"
                        style=format!("animation-delay: {:.1}s", i as f64 * 0.1)
                    />
                }
            })
            .collect_view();
        let labels = vertices
            .iter()
            .zip(points.iter().zip(&skills))
            .map(|(v, (point, skill))| {
                view! {
                    <g class="radar__label">
                        <text
                            x=coord(v.label_x)
                            y=coord(v.label_y)
                            text-anchor="middle"
                            dominant-baseline="middle"
                            fill="currentColor"
                            font-size="12"
                            font-weight="500"
                        >
                            {point.label.clone()}
                        </text>
                        <text
                            x=coord(v.label_x)
                            y=coord(v.label_y + 15.0)
                            text-anchor="middle"
                            dominant-baseline="middle"
                            fill="#6366f1"
                            font-size="10"
                            font-weight="600"
                        >
                            {format!("{}%", skill.level)}
                        </text>
                    </g>
                }
            })
            .collect_view();

        view! {
            <g class="radar__grid">{rings} {spokes}</g>
            <polygon
                class="radar__area"
                points=area
                fill="rgba(99, 102, 241, 0.2)"
                stroke="#6366f1"
                stroke-width="2"
            />
            {dots}
            {labels}
        }
    };

    view! {
        <Card title="Skill Radar" class="my-8">
            {move || {
                if skills.with(Vec::is_empty) {
                    Either::Left(
                        view! { <div class="py-12 text-center text-slate-500">"Loading..."</div> },
                    )
                } else {
                    Either::Right(
                        view! {
                            <div class="flex justify-center overflow-visible">
                                <svg
                                    class="radar overflow-visible"
                                    width=size.clone()
                                    height=size.clone()
                                    viewBox=format!("0 0 {size} {size}")
                                >
                                    {chart}
                                </svg>
                            </div>
                            <div class="flex justify-center gap-6 mt-10 text-sm">
                                <div class="flex items-center gap-2">
                                    <span class="inline-block w-4 h-4 rounded bg-indigo-500/20 border border-indigo-500"></span>
                                    <span>"Skill coverage"</span>
                                </div>
                                <div class="flex items-center gap-2">
                                    <span class="inline-block w-4 h-4 rounded-full bg-cyan-400"></span>
                                    <span>"Skill level"</span>
                                </div>
                            </div>
                        },
                    )
                }
            }}
        </Card>
    }
}
