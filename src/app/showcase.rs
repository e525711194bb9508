use leptos::{ev::MouseEvent, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::components::{Badge, Button, Card, Input, Modal, Spinner};
use crate::ui::{
    classes::{
        BadgeShape, BadgeStyle, BadgeVariant, ButtonVariant, CardVariant, IconPosition,
        InputVariant, Modifier, ModalSize, Size, SpinnerColor, SpinnerKind,
    },
    control::ChangeEvent,
};

const BUTTON_LOADING_MS: f64 = 2000.0;
const CARD_LOADING_MS: f64 = 2000.0;

#[component]
fn ShowcaseSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="my-10">
            <h2 class="text-2xl font-bold mb-6 pb-2 border-b border-slate-500/20">{title}</h2>
            {children()}
        </section>
    }
}

#[component]
fn DemoGroup(
    title: &'static str,
    #[prop(optional)] column: bool,
    children: Children,
) -> impl IntoView {
    let content = if column {
        "flex flex-col gap-4 max-w-md"
    } else {
        "flex flex-wrap items-center gap-4"
    };
    view! {
        <div class="mb-8">
            <h3 class="text-sm font-semibold uppercase tracking-wide text-slate-500 mb-3">{title}</h3>
            <div class=content>{children()}</div>
        </div>
    }
}

#[component]
fn ButtonDemos() -> impl IntoView {
    let loading = RwSignal::new(false);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            log::debug!("primary button finished loading");
            loading.set(false);
        },
        BUTTON_LOADING_MS,
    );

    let variant_button = move |variant: ButtonVariant, label: &'static str| {
        let start = start.clone();
        let on_click = move |_: MouseEvent| {
            log::info!("{} button clicked", variant.as_str());
            if variant == ButtonVariant::Primary {
                loading.set(true);
                start(());
            }
        };
        view! {
            <Button variant loading=Signal::derive(move || variant == ButtonVariant::Primary && loading.get()) on_click>
                {label}
            </Button>
        }
    };

    view! {
        <ShowcaseSection title="🔘 Button">
            <DemoGroup title="Variants">
                {variant_button(ButtonVariant::Primary, "Primary")}
                {variant_button(ButtonVariant::Secondary, "Secondary")}
                {variant_button(ButtonVariant::Success, "Success")}
                {variant_button(ButtonVariant::Warning, "Warning")}
                {variant_button(ButtonVariant::Danger, "Danger")}
                {variant_button(ButtonVariant::Ghost, "Ghost")}
                {variant_button(ButtonVariant::Outline, "Outline")}
            </DemoGroup>
            <DemoGroup title="Sizes">
                <Button size=Size::Small>"Small"</Button>
                <Button size=Size::Medium>"Medium"</Button>
                <Button size=Size::Large>"Large"</Button>
            </DemoGroup>
            <DemoGroup title="States">
                <Button>"Normal"</Button>
                <Button disabled=true>"Disabled"</Button>
                <Button loading=true>"Loading"</Button>
            </DemoGroup>
            <DemoGroup title="Icons">
                <Button icon="🚀">"Launch"</Button>
                <Button icon="→" icon_position=IconPosition::Right variant=ButtonVariant::Secondary>
                    "Next"
                </Button>
                <Button icon="⚙️" variant=ButtonVariant::Ghost />
                <Button full_width=true variant=ButtonVariant::Outline>
                    "Full width"
                </Button>
            </DemoGroup>
        </ShowcaseSection>
    }
}

#[component]
fn InputDemos() -> impl IntoView {
    let text = RwSignal::new(String::new());

    view! {
        <ShowcaseSection title="📝 Input">
            <DemoGroup title="Variants" column=true>
                <Input
                    label="Outline (controlled)"
                    placeholder="Type something..."
                    variant=InputVariant::Outline
                    value=text
                    on_change=move |ev: ChangeEvent| text.set(ev.value)
                    clearable=true
                />
                <p class="text-sm text-slate-500">
                    "Current value: " <code>{move || format!("{:?}", text.get())}</code>
                </p>
                <Input label="Filled" placeholder="Type something..." variant=InputVariant::Filled />
                <Input
                    label="Underline"
                    placeholder="Type something..."
                    variant=InputVariant::Underline
                />
            </DemoGroup>
            <DemoGroup title="Sizes" column=true>
                <Input label="Small" placeholder="Small input" size=Size::Small />
                <Input label="Medium" placeholder="Medium input" size=Size::Medium />
                <Input label="Large" placeholder="Large input" size=Size::Large />
            </DemoGroup>
            <DemoGroup title="Features" column=true>
                <Input label="With hint" placeholder="Plain input" hint="This is a hint" />
                <Input
                    label="Required"
                    placeholder="Required field"
                    required=true
                    hint="This field must be filled in"
                />
                <Input label="Error" placeholder="Invalid input" error="Please enter a valid value" />
                <Input
                    label="Clearable"
                    placeholder="Type to show the clear button"
                    clearable=true
                    hint="A clear button appears once there is a value"
                />
                <Input label="Adornments" placeholder="0.00" prefix="$" suffix="USD" />
                <Input label="Disabled" placeholder="Can't touch this" disabled=true />
            </DemoGroup>
        </ShowcaseSection>
    }
}

#[component]
fn TokenDemos() -> impl IntoView {
    let swatch = |var: &'static str, title: &'static str| {
        view! {
            <div
                class="w-12 h-12 rounded-lg"
                style=format!("background-color: var({var})")
                title=title
            ></div>
        }
    };
    let shadow = |var: &'static str, label: &'static str| {
        view! {
            <div
                class="flex items-center justify-center w-28 h-20 rounded-lg bg-white dark:bg-slate-800"
                style=format!("box-shadow: var({var})")
            >
                {label}
            </div>
        }
    };

    view! {
        <ShowcaseSection title="🎨 Design Tokens">
            <DemoGroup title="Colors">
                {swatch("--color-primary-500", "Primary 500")}
                {swatch("--color-primary-600", "Primary 600")}
                {swatch("--color-primary-700", "Primary 700")}
                {swatch("--color-success-500", "Success")}
                {swatch("--color-warning-500", "Warning")}
                {swatch("--color-danger-500", "Danger")}
            </DemoGroup>
            <DemoGroup title="Shadows">
                {shadow("--shadow-sm", "Small")}
                {shadow("--shadow-md", "Medium")}
                {shadow("--shadow-lg", "Large")}
            </DemoGroup>
        </ShowcaseSection>
    }
}

#[component]
fn ModalDemos() -> impl IntoView {
    let open = RwSignal::new(false);
    let size = RwSignal::new(ModalSize::Medium);
    let open_with = move |s: ModalSize| {
        move |_: MouseEvent| {
            size.set(s);
            open.set(true);
        }
    };
    let close = move |_: MouseEvent| open.set(false);

    view! {
        <ShowcaseSection title="🪟 Modal">
            <DemoGroup title="Sizes">
                <Button on_click=open_with(ModalSize::Small)>"Small"</Button>
                <Button on_click=open_with(ModalSize::Medium)>"Medium"</Button>
                <Button on_click=open_with(ModalSize::Large)>"Large"</Button>
                <Button on_click=open_with(ModalSize::Fullscreen)>"Fullscreen"</Button>
            </DemoGroup>
            {move || {
                let size = size.get();
                view! {
                    <Modal
                        open=open
                        on_close=move |_: ()| open.set(false)
                        title=format!("{} modal", size.as_str())
                        size
                    >
                        <p class="mb-2">
                            "This is an example modal. Put any content you like in here."
                        </p>
                        <p class="mb-4">
                            "Press Escape, click the backdrop or use the buttons below to close it. Tab stays inside while it is open."
                        </p>
                        <div class="flex justify-end gap-2">
                            <Button variant=ButtonVariant::Ghost on_click=close>
                                "Cancel"
                            </Button>
                            <Button on_click=close>"Confirm"</Button>
                        </div>
                    </Modal>
                }
            }}
        </ShowcaseSection>
    }
}

#[component]
fn CardDemos() -> impl IntoView {
    let clicks = RwSignal::new(0u32);
    let card_loading = RwSignal::new(false);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| card_loading.set(false),
        CARD_LOADING_MS,
    );
    let begin_loading = move |_: MouseEvent| {
        card_loading.set(true);
        start(());
    };

    view! {
        <ShowcaseSection title="🃏 Card">
            <DemoGroup title="Variants">
                <Card title="Outline" variant=CardVariant::Outline>
                    <p>"A card with a border."</p>
                </Card>
                <Card title="Filled" variant=CardVariant::Filled>
                    <p>"A card with a filled background."</p>
                </Card>
                <Card title="Shadow" variant=CardVariant::Shadow>
                    <p>"A card with a drop shadow."</p>
                </Card>
                <Card title="Flat" variant=CardVariant::Flat size=Size::Small>
                    <p>"A flat, compact card."</p>
                </Card>
            </DemoGroup>
            <DemoGroup title="Interactive">
                <Card title="Hoverable" hoverable=true>
                    <p>"Lifts when the pointer is over it."</p>
                </Card>
                <Card
                    title="Clickable"
                    variant=CardVariant::Shadow
                    clickable=true
                    on_click=move |_: ()| {
                        clicks.update(|n| *n += 1);
                        log::info!("card clicked");
                    }
                    footer=move || view! { <span class="text-sm">{move || format!("Clicked {} times", clicks.get())}</span> }
                >
                    <p>"Click me, or focus me and press Enter or Space."</p>
                </Card>
                <Card title="Loading" variant=CardVariant::Filled loading=card_loading>
                    <p class="mb-2">"Shows a loading overlay."</p>
                    <Button size=Size::Small on_click=begin_loading>
                        "Start loading"
                    </Button>
                </Card>
                <Card
                    header=|| view! { <h3 class="card__title">"✨ Custom header"</h3> }
                    variant=CardVariant::Outline
                >
                    <p>"The header slot replaces the title."</p>
                </Card>
            </DemoGroup>
        </ShowcaseSection>
    }
}

#[component]
fn BadgeDemos() -> impl IntoView {
    let variants = [
        (BadgeVariant::Primary, "Primary"),
        (BadgeVariant::Secondary, "Secondary"),
        (BadgeVariant::Success, "Success"),
        (BadgeVariant::Warning, "Warning"),
        (BadgeVariant::Danger, "Danger"),
        (BadgeVariant::Info, "Info"),
        (BadgeVariant::Gray, "Gray"),
    ];

    view! {
        <ShowcaseSection title="🏷️ Badge">
            <DemoGroup title="Variants">
                {variants
                    .into_iter()
                    .map(|(variant, label)| view! { <Badge variant>{label}</Badge> })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Styles">
                <Badge badge_style=BadgeStyle::Solid>"Solid"</Badge>
                <Badge badge_style=BadgeStyle::Outline>"Outline"</Badge>
                <Badge badge_style=BadgeStyle::Soft>"Soft"</Badge>
            </DemoGroup>
            <DemoGroup title="Shapes">
                <Badge shape=BadgeShape::Circle count=3u32 />
                <Badge shape=BadgeShape::Rounded>"Rounded"</Badge>
                <Badge shape=BadgeShape::Square>"Square"</Badge>
            </DemoGroup>
            <DemoGroup title="Counts">
                <Badge count=5u32>
                    <Button variant=ButtonVariant::Secondary>"Messages"</Button>
                </Badge>
                <Badge count=99u32>
                    <Button variant=ButtonVariant::Secondary>"Notifications"</Button>
                </Badge>
                <Badge count=1000u32 max=999>
                    <Button variant=ButtonVariant::Secondary>"News"</Button>
                </Badge>
                <Badge dot=true variant=BadgeVariant::Success>
                    <Button variant=ButtonVariant::Secondary>"Status"</Button>
                </Badge>
                <Badge count="new" variant=BadgeVariant::Danger />
                <Badge count=0u32 show_zero=true variant=BadgeVariant::Gray />
            </DemoGroup>
        </ShowcaseSection>
    }
}

#[component]
fn SpinnerDemos() -> impl IntoView {
    view! {
        <ShowcaseSection title="⏳ Spinner">
            <DemoGroup title="Kinds">
                <Spinner kind=SpinnerKind::Spin label="Spin" />
                <Spinner kind=SpinnerKind::Pulse label="Pulse" />
                <Spinner kind=SpinnerKind::Bounce label="Bounce" />
                <Spinner kind=SpinnerKind::Wave label="Wave" />
                <Spinner kind=SpinnerKind::Dots label="Dots" />
            </DemoGroup>
            <DemoGroup title="Sizes">
                <Spinner size=Size::Small label="Small" />
                <Spinner size=Size::Medium label="Medium" />
                <Spinner size=Size::Large label="Large" />
            </DemoGroup>
            <DemoGroup title="Colors">
                <Spinner color=SpinnerColor::Primary label="Primary" />
                <Spinner color=SpinnerColor::Secondary label="Secondary" />
                <Spinner color=SpinnerColor::Gray label="Gray" />
                <div class="p-4 rounded-lg bg-slate-800">
                    <Spinner color=SpinnerColor::White label="White" />
                </div>
            </DemoGroup>
            <DemoGroup title="Overlay">
                <div class="relative w-64 h-32 rounded-lg border border-slate-500/30 p-4">
                    <p>"Content underneath the overlay."</p>
                    <Spinner overlay=true label="Loading..." />
                </div>
            </DemoGroup>
        </ShowcaseSection>
    }
}

#[component]
pub fn ShowcasePage() -> impl IntoView {
    view! {
        <Title text="Components" />
        <div class="text-center mb-8">
            <h1 class="text-3xl font-bold mb-2">"🎨 Component Library"</h1>
            <p class="text-slate-500">
                "Every component in the library, built on one set of design tokens"
            </p>
        </div>
        <ButtonDemos />
        <InputDemos />
        <TokenDemos />
        <ModalDemos />
        <CardDemos />
        <BadgeDemos />
        <SpinnerDemos />
    }
}
