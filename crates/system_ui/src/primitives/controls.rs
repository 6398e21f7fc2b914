use super::*;
use crate::style::{
    indicator_class, resolve, ButtonColor, ButtonShape, ButtonSize, ButtonVariant, ResolvedStyle,
    StyleConfig, StyleToken,
};

const FIELD_CLASS: &str = "block rounded-md bg-white px-3 py-1.5 text-sm text-gray-900 ring-1 ring-inset ring-gray-300 focus-visible:outline-2 focus-visible:outline-primary";

/// Returns `true` when a pass-through attribute reaches the native `<button>`.
///
/// `disabled`, `type`, and `class` are owned by [`Button`]: `disabled` follows the
/// effective disabled state, `type` comes from `button_type`, and caller
/// classes arrive through the `class` prop so they merge with resolved tokens.
pub fn is_forwarded_attribute(name: &str) -> bool {
    !["disabled", "type", "class"]
        .iter()
        .any(|owned| name.eq_ignore_ascii_case(owned))
}

#[component]
/// Shared button primitive.
///
/// Style props resolve through [`resolve`](crate::resolve); `class` tokens are
/// appended last and win conflicts. `loading` renders a spinner ahead of the
/// content and forces the native `disabled` state. Attributes passed with
/// `attr:` (ARIA, form association, ...) are forwarded untouched, and an
/// optional caller-owned `node_ref` is attached to the `<button>` for
/// imperative access such as focus.
pub fn Button(
    #[prop(default = ButtonVariant::Contained)] variant: ButtonVariant,
    #[prop(default = ButtonColor::Primary)] color: ButtonColor,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonShape::Rounded)] shape: ButtonShape,
    #[prop(optional)] icon_only: bool,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: Option<NodeRef<html::Button>>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let resolved = create_memo(move |_| {
        let config = StyleConfig {
            variant,
            color,
            size,
            shape,
            icon_only,
            loading: loading.get(),
            disabled: disabled.get(),
        };
        class.with(|overrides| resolve(&config).with_overrides(overrides))
    });
    let attributes: Vec<_> = attributes
        .into_iter()
        .filter(|(name, _)| is_forwarded_attribute(name))
        .collect();
    let indicator_size = if icon_only { IconSize::Md } else { IconSize::Sm };

    let button = view! {
        <button
            type=button_type
            class=move || resolved.with(ResolvedStyle::class)
            disabled=move || resolved.with(ResolvedStyle::is_disabled)
            aria-busy=move || loading.get().then_some("true")
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-color=color.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
            data-ui-icon-only=bool_token(icon_only)
            data-ui-loading=move || bool_token(loading.get())
            data-ui-disabled=move || bool_token(resolved.with(ResolvedStyle::is_disabled))
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:focus=move |ev| {
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            {..attributes}
        >
            {move || {
                resolved.with(ResolvedStyle::is_busy).then(|| {
                    view! {
                        <Icon
                            icon=IconName::Spinner
                            size=indicator_size
                            layout_class=indicator_class(icon_only)
                        />
                    }
                })
            }}
            {children()}
        </button>
    };

    match node_ref {
        Some(node_ref) => button.node_ref(node_ref),
        None => button,
    }
}

#[component]
/// Shared native select used by catalog controls.
pub fn SelectField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    children: Children,
) -> impl IntoView {
    view! {
        <select
            class=merge_layout_class(&[FIELD_CLASS], layout_class)
            aria-label=aria_label
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="select"
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        >
            {children()}
        </select>
    }
}

#[component]
/// Shared checkbox with a visible label.
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class(&["inline-flex items-center gap-2 text-sm"], layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-selected=move || bool_token(checked.get())
        >
            <input
                type="checkbox"
                class="size-4 rounded-sm"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(on_toggle) = on_toggle.as_ref() {
                        on_toggle.call(event_target_checked(&ev));
                    }
                }
            />
            {label}
        </label>
    }
}
