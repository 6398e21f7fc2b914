//! Button catalog app.
//!
//! Renders every story from [`stories`] through the shared `system_ui`
//! primitives, plus a playground whose controls drive the args-based stories
//! and expose the resolved class string for review.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod stories;

use leptos::*;
use system_ui::prelude::*;
use system_ui::{resolve, AppliedFallback};

pub use stories::{PlaygroundArgs, Story, StoryEntry, StoryRow};

/// Parses persisted playground args, keeping defaults when the payload is invalid.
pub fn restore_args(raw: Option<&str>) -> PlaygroundArgs {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return PlaygroundArgs::default();
    };
    match serde_json::from_str::<PlaygroundArgs>(raw) {
        Ok(args) => args,
        Err(err) => {
            logging::warn!("ui showcase args restore failed: {err}");
            PlaygroundArgs::default()
        }
    }
}

#[component]
/// Catalog window contents.
pub fn UiShowcaseApp(
    /// Story to display.
    #[prop(into)]
    story: MaybeSignal<Story>,
    /// Serialized [`PlaygroundArgs`], for example from a shared link.
    #[prop(optional, into)]
    restored_args: Option<String>,
) -> impl IntoView {
    let args = create_rw_signal(restore_args(restored_args.as_deref()));

    view! {
        <div class="flex min-h-dvh gap-8 p-6" data-ui-kind="showcase">
            <nav class="flex w-48 shrink-0 flex-col gap-1" aria-label="Stories">
                {Story::ALL
                    .into_iter()
                    .map(|entry| {
                        let current = move || story.get() == entry;
                        view! {
                            <a
                                href=format!("/stories/{}", entry.slug())
                                class="rounded-md px-3 py-1.5 text-sm"
                                class:font-semibold=current
                                aria-current=move || current().then_some("page")
                            >
                                {entry.title()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <main class="flex flex-1 flex-col gap-6">
                <header>
                    <h1 class="text-xl font-semibold">{move || story.get().title()}</h1>
                    <p class="text-sm text-gray-600">{move || story.get().summary()}</p>
                </header>
                <Stack gap=LayoutGap::Md align=LayoutAlign::Start>
                    {move || {
                        story
                            .get()
                            .rows(&args.get())
                            .into_iter()
                            .map(|row| view! { <StoryRowView row /> })
                            .collect_view()
                    }}
                </Stack>
                <Show when=move || story.get() == Story::Playground fallback=|| ()>
                    <PlaygroundControls args />
                </Show>
            </main>
        </div>
    }
}

#[component]
fn StoryRowView(row: StoryRow) -> impl IntoView {
    view! {
        <Cluster gap=LayoutGap::Md>
            {row.entries.into_iter().map(|entry| view! { <StoryButton entry /> }).collect_view()}
        </Cluster>
    }
}

#[component]
fn StoryButton(entry: StoryEntry) -> impl IntoView {
    let StoryEntry {
        label,
        config,
        leading_icon,
        trailing_icon,
    } = entry;
    let icon = |icon: IconName| view! { <Icon icon /> };

    if config.icon_only {
        view! {
            <Button
                variant=config.variant
                color=config.color
                size=config.size
                shape=config.shape
                icon_only=true
                loading=config.loading
                disabled=config.disabled
                attr:aria-label=label
            >
                {leading_icon.map(icon)}
            </Button>
        }
        .into_view()
    } else {
        view! {
            <Button
                variant=config.variant
                color=config.color
                size=config.size
                shape=config.shape
                loading=config.loading
                disabled=config.disabled
            >
                {leading_icon.map(icon)}
                {label}
                {trailing_icon.map(icon)}
            </Button>
        }
        .into_view()
    }
}

fn axis_select<T: StyleToken>(
    aria_label: &'static str,
    current: Signal<String>,
    on_pick: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1 text-sm">
            {aria_label}
            <SelectField
                aria_label=aria_label
                value=current
                on_change=Callback::new(move |ev| on_pick(event_target_value(&ev)))
            >
                {T::ALL
                    .iter()
                    .map(|value| {
                        let token = value.token();
                        view! { <option value=token>{token}</option> }
                    })
                    .collect_view()}
            </SelectField>
        </label>
    }
}

fn fallback_message(fallback: &AppliedFallback) -> String {
    format!(
        "Unknown {} `{}`, rendered as `{}`.",
        fallback.axis, fallback.original, fallback.substituted
    )
}

#[component]
fn PlaygroundControls(args: RwSignal<PlaygroundArgs>) -> impl IntoView {
    let target = create_node_ref::<html::Button>();
    let axis_value = move |pick: fn(&PlaygroundArgs) -> Option<String>| {
        Signal::derive(move || args.with(|args| pick(args).unwrap_or_default()))
    };
    let resolved_class = move || {
        args.with(|args| {
            let (config, _) = args.config();
            resolve(&config).class()
        })
    };
    let fallbacks = move || args.with(|args| args.config().1);
    let args_json = move || {
        args.with(|args| serde_json::to_string_pretty(args))
            .unwrap_or_else(|err| format!("serialize failed: {err}"))
    };

    view! {
        <section class="flex flex-col gap-4" aria-label="Controls">
            <Cluster gap=LayoutGap::Md align=LayoutAlign::End>
                <label class="flex flex-col gap-1 text-sm">
                    "Label"
                    <input
                        class="rounded-md px-3 py-1.5 text-sm ring-1 ring-inset ring-gray-300"
                        prop:value=move || args.with(|args| args.label.clone())
                        on:input=move |ev| {
                            let next = event_target_value(&ev);
                            args.update(|args| args.label = next);
                        }
                    />
                </label>
                {axis_select::<ButtonVariant>(
                    "Variant",
                    axis_value(|args| args.style.variant.clone()),
                    move |next| args.update(|args| args.style.variant = Some(next)),
                )}
                {axis_select::<ButtonColor>(
                    "Color",
                    axis_value(|args| args.style.color.clone()),
                    move |next| args.update(|args| args.style.color = Some(next)),
                )}
                {axis_select::<ButtonSize>(
                    "Size",
                    axis_value(|args| args.style.size.clone()),
                    move |next| args.update(|args| args.style.size = Some(next)),
                )}
                {axis_select::<ButtonShape>(
                    "Shape",
                    axis_value(|args| args.style.shape.clone()),
                    move |next| args.update(|args| args.style.shape = Some(next)),
                )}
            </Cluster>
            <Cluster gap=LayoutGap::Md>
                <CheckboxField
                    label="Icon only"
                    checked=Signal::derive(move || args.with(|args| args.style.icon_only))
                    on_toggle=Callback::new(move |next| args.update(|args| args.style.icon_only = next))
                />
                <CheckboxField
                    label="Loading"
                    checked=Signal::derive(move || args.with(|args| args.style.loading))
                    on_toggle=Callback::new(move |next| args.update(|args| args.style.loading = next))
                />
                <CheckboxField
                    label="Disabled"
                    checked=Signal::derive(move || args.with(|args| args.style.disabled))
                    on_toggle=Callback::new(move |next| args.update(|args| args.style.disabled = next))
                />
            </Cluster>
            <Cluster gap=LayoutGap::Sm>
                <Button
                    variant=ButtonVariant::Outlined
                    color=ButtonColor::Secondary
                    size=ButtonSize::Sm
                    node_ref=target
                >
                    "Focus target"
                </Button>
                <Button
                    variant=ButtonVariant::Text
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| {
                        if let Some(button) = target.get() {
                            if let Err(err) = button.focus() {
                                logging::warn!("ui showcase focus failed: {err:?}");
                            }
                        }
                    })
                >
                    "Focus it"
                </Button>
            </Cluster>
            <For
                each=fallbacks
                key=|fallback| (fallback.axis, fallback.original.clone())
                children=|fallback| {
                    view! { <p class="text-sm text-warning" role="status">{fallback_message(&fallback)}</p> }
                }
            />
            <pre class="overflow-x-auto rounded-md bg-gray-100 p-3 text-xs" data-ui-slot="resolved-class">
                {resolved_class}
            </pre>
            <pre class="overflow-x-auto rounded-md bg-gray-100 p-3 text-xs" data-ui-slot="args-json">
                {args_json}
            </pre>
        </section>
    }
}
