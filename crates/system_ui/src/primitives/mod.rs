//! Shared control and layout primitives.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::style::merge_classes;
use crate::{Icon, IconName, IconSize};

mod controls;
mod layout;

pub use controls::{is_forwarded_attribute, Button, CheckboxField, SelectField};
pub use layout::{Cluster, Stack};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::None => "gap-0",
            Self::Sm => "gap-2",
            Self::Md => "gap-4",
            Self::Lg => "gap-6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared cross-axis alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl Default for LayoutAlign {
    fn default() -> Self {
        Self::Stretch
    }
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }

    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::Stretch => "items-stretch",
            Self::Start => "items-start",
            Self::Center => "items-center",
            Self::End => "items-end",
        }
    }
}

/// Joins primitive classes with an optional caller class, caller tokens winning.
pub(crate) fn merge_layout_class(base: &[&'static str], layout_class: Option<&'static str>) -> String {
    merge_classes(base.iter().copied().chain(layout_class)).join(" ")
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
