use super::{ButtonColor, ButtonShape, ButtonSize, ButtonVariant};

pub(super) const BASE_TOKENS: &str = "inline-flex items-center justify-center font-semibold shadow-xs transition-all focus-visible:outline-2 focus-visible:outline-offset-2 disabled:opacity-50 disabled:pointer-events-none cursor-pointer";

pub(super) const BUSY_TOKENS: &str = "cursor-wait";

// Secondary is a neutral palette: it reads from content/border tokens rather
// than a flat fill like the other semantic colors.
pub(super) fn color_tokens(color: ButtonColor, variant: ButtonVariant) -> &'static str {
    use ButtonColor as C;
    use ButtonVariant as V;

    match (color, variant) {
        (C::Primary, V::Contained) => {
            "bg-primary text-primary-content hover:bg-primary-hover focus-visible:outline-primary"
        }
        (C::Primary, V::Outlined) => "ring-1 ring-inset ring-primary text-primary hover:bg-primary/5",
        (C::Primary, V::Soft) => "bg-primary/10 text-primary hover:bg-primary/20",
        (C::Primary, V::Text) => "text-primary hover:bg-primary/10",

        (C::Secondary, V::Contained) => {
            "bg-secondary text-secondary-content ring-1 ring-inset ring-secondary-border hover:bg-secondary-hover"
        }
        (C::Secondary, V::Outlined) => {
            "ring-1 ring-inset ring-secondary-content text-secondary-content hover:bg-secondary-content/5"
        }
        (C::Secondary, V::Soft) => {
            "bg-secondary-content/10 text-secondary-content hover:bg-secondary-content/20"
        }
        (C::Secondary, V::Text) => "text-secondary-content hover:bg-secondary-content/10",

        (C::Success, V::Contained) => {
            "bg-success text-white hover:bg-success-hover focus-visible:outline-success"
        }
        (C::Success, V::Outlined) => "ring-1 ring-inset ring-success text-success hover:bg-success/10",
        (C::Success, V::Soft) => "bg-success/10 text-success hover:bg-success/20",
        (C::Success, V::Text) => "text-success hover:bg-success/10",

        (C::Error, V::Contained) => "bg-error text-white hover:bg-error-hover focus-visible:outline-error",
        (C::Error, V::Outlined) => "ring-1 ring-inset ring-error text-error hover:bg-error/10",
        (C::Error, V::Soft) => "bg-error/10 text-error hover:bg-error/20",
        (C::Error, V::Text) => "text-error hover:bg-error/10",

        (C::Warning, V::Contained) => {
            "bg-warning text-white hover:bg-warning-hover focus-visible:outline-warning"
        }
        (C::Warning, V::Outlined) => "ring-1 ring-inset ring-warning text-warning hover:bg-warning/10",
        (C::Warning, V::Soft) => "bg-warning/10 text-warning hover:bg-warning/20",
        (C::Warning, V::Text) => "text-warning hover:bg-warning/10",

        (C::Info, V::Contained) => "bg-info text-white hover:bg-info-hover focus-visible:outline-info",
        (C::Info, V::Outlined) => "ring-1 ring-inset ring-info text-info hover:bg-info/10",
        (C::Info, V::Soft) => "bg-info/10 text-info hover:bg-info/20",
        (C::Info, V::Text) => "text-info hover:bg-info/10",

        (C::Black, V::Contained) => {
            "bg-gray-900 text-white hover:bg-gray-800 focus-visible:outline-gray-900"
        }
        (C::Black, V::Outlined) => "ring-1 ring-inset ring-gray-900 text-gray-900 hover:bg-gray-100",
        (C::Black, V::Soft) => "bg-gray-100 text-gray-900 hover:bg-gray-200",
        (C::Black, V::Text) => "text-gray-900 hover:bg-gray-100",

        (C::White, V::Contained) => {
            "bg-white text-gray-900 ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
        }
        (C::White, V::Outlined) => "ring-1 ring-inset ring-white text-white hover:bg-white/10",
        (C::White, V::Soft) => "bg-white/20 text-white hover:bg-white/30",
        (C::White, V::Text) => "text-white hover:bg-white/10",
    }
}

pub(super) fn size_tokens(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Xs => "px-2 py-1 text-xs gap-x-1.5",
        ButtonSize::Sm => "px-2.5 py-1 text-sm gap-x-1.5",
        ButtonSize::Md => "px-3 py-1.5 text-sm gap-x-2",
        ButtonSize::Lg => "px-3.5 py-2 text-base gap-x-2",
        ButtonSize::Xl => "px-4 py-2.5 text-base gap-x-2",
    }
}

pub(super) fn icon_size_tokens(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Xs => "p-1",
        ButtonSize::Sm => "p-1.5",
        ButtonSize::Md => "p-2",
        ButtonSize::Lg => "p-2.5",
        ButtonSize::Xl => "p-3",
    }
}

pub(super) fn shape_tokens(shape: ButtonShape) -> &'static str {
    match shape {
        ButtonShape::Rounded => "rounded-md",
        ButtonShape::Pill | ButtonShape::Circle => "rounded-full",
        ButtonShape::Square => "rounded-none",
    }
}
