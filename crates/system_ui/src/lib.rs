//! Shared button style system and UI primitives.
//!
//! The crate owns the button style resolver ([`resolve`]), a utility-class
//! merger, a small inline icon set, and the Leptos primitives that render
//! them. Primitives keep the stable `data-ui-*` DOM contract alongside the
//! resolved utility classes so catalog tooling and tests can select on
//! semantic state instead of class strings.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
pub mod style;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    is_forwarded_attribute, Button, CheckboxField, Cluster, LayoutAlign, LayoutGap, SelectField,
    Stack,
};
pub use style::{
    indicator_class, lookup, merge_classes, parse_token, resolve, AppliedFallback, ButtonColor,
    ButtonShape, ButtonSize, ButtonVariant, Lookup, ParseStyleError, ResolvedStyle, StyleArgs,
    StyleAxis, StyleConfig, StyleToken,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonColor, ButtonShape, ButtonSize, ButtonVariant, CheckboxField, Cluster, Icon,
        IconName, IconSize, LayoutAlign, LayoutGap, SelectField, Stack, StyleArgs, StyleConfig,
        StyleToken,
    };
}
