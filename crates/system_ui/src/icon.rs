//! Centralized inline-SVG icon set.

use leptos::*;

use crate::style::merge_classes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons available to shared primitives and catalog stories.
pub enum IconName {
    /// Busy indicator ring.
    Spinner,
    /// Plus sign.
    Plus,
    /// Trash can.
    Trash,
    /// Right arrow.
    ArrowRight,
    /// Check mark inside a circle.
    CheckCircle,
    /// Paper airplane.
    PaperAirplane,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Spinner => "spinner",
            Self::Plus => "plus",
            Self::Trash => "trash",
            Self::ArrowRight => "arrow-right",
            Self::CheckCircle => "check-circle",
            Self::PaperAirplane => "paper-airplane",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Spinner => {
                "M10 2a8 8 0 1 0 8 8h-2a6 6 0 1 1-6-6V2Z"
            }
            Self::Plus => {
                "M10.75 4.75a.75.75 0 0 0-1.5 0v4.5h-4.5a.75.75 0 0 0 0 1.5h4.5v4.5a.75.75 0 0 0 1.5 0v-4.5h4.5a.75.75 0 0 0 0-1.5h-4.5v-4.5Z"
            }
            Self::Trash => {
                "M8.75 1A2.75 2.75 0 0 0 6 3.75v.44c-.79.08-1.57.18-2.34.3a.75.75 0 1 0 .23 1.49l.15-.03.84 10.52A1.75 1.75 0 0 0 6.63 18h6.74a1.75 1.75 0 0 0 1.75-1.53l.84-10.52.15.03a.75.75 0 0 0 .23-1.49A41 41 0 0 0 14 4.19v-.44A2.75 2.75 0 0 0 11.25 1h-2.5ZM10 4c.84 0 1.67.03 2.5.08v-.33c0-.69-.56-1.25-1.25-1.25h-2.5c-.69 0-1.25.56-1.25 1.25v.33C8.33 4.03 9.16 4 10 4Z"
            }
            Self::ArrowRight => {
                "M3 10a.75.75 0 0 1 .75-.75h10.64L10.23 5.29a.75.75 0 1 1 1.04-1.08l5.5 5.25a.75.75 0 0 1 0 1.08l-5.5 5.25a.75.75 0 1 1-1.04-1.08l4.16-3.96H3.75A.75.75 0 0 1 3 10Z"
            }
            Self::CheckCircle => {
                "M10 18a8 8 0 1 0 0-16 8 8 0 0 0 0 16Zm3.86-9.81a.75.75 0 0 0-1.22-.88l-3.24 4.53-1.62-1.62a.75.75 0 0 0-1.06 1.06l2.25 2.25a.75.75 0 0 0 1.14-.1l3.75-5.25Z"
            }
            Self::PaperAirplane => {
                "M3.1 2.29a.75.75 0 0 0-.83.95l1.41 4.92a1.5 1.5 0 0 0 1.15 1.06L11.1 10l-6.27.78a1.5 1.5 0 0 0-1.15 1.06l-1.41 4.92a.75.75 0 0 0 .83.95 28.9 28.9 0 0 0 15.29-7.15.75.75 0 0 0 0-1.12A28.9 28.9 0 0 0 3.1 2.29Z"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon box sizes.
pub enum IconSize {
    /// 16px.
    Sm,
    /// 20px.
    Md,
    /// 24px.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Sm => "size-4",
            Self::Md => "size-5",
            Self::Lg => "size-6",
        }
    }
}

#[component]
/// Decorative inline SVG icon; hidden from assistive technology.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let class = merge_classes([size.class(), layout_class.unwrap_or_default()]).join(" ");
    view! {
        <svg
            class=class
            viewBox="0 0 20 20"
            fill="currentColor"
            aria-hidden="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path fill-rule="evenodd" clip-rule="evenodd" d=icon.path() />
        </svg>
    }
}
