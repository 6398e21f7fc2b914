//! Style resolution for the shared button primitive.
//!
//! [`resolve`] maps a [`StyleConfig`] onto an ordered, conflict-free list of
//! utility-class tokens. Every axis is a closed enum and every table is an
//! exhaustive `match`, so adding a color or variant without filling in each
//! table fails to compile instead of silently producing an unstyled button.
//!
//! Raw string input (story args, persisted playground state) goes through the
//! lenient [`lookup`] path: unknown values fall back to the axis default and
//! the substitution is reported as [`Lookup::FallbackApplied`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

mod args;
mod merge;
mod tables;

pub use args::{AppliedFallback, StyleArgs};
pub use merge::merge_classes;

/// A closed styling axis whose values have a stable string token.
pub trait StyleToken: Copy + Default + 'static {
    /// Axis this value belongs to.
    const AXIS: StyleAxis;
    /// Every value of the axis, in presentation order.
    const ALL: &'static [Self];

    /// Stable lowercase token used for parsing, `data-ui-*` attributes, and args.
    fn token(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Style axes that accept raw string input.
pub enum StyleAxis {
    /// Visual treatment.
    Variant,
    /// Semantic color.
    Color,
    /// Padding/typography scale.
    Size,
    /// Corner treatment.
    Shape,
}

impl StyleAxis {
    /// Lowercase axis name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Variant => "variant",
            Self::Color => "color",
            Self::Size => "size",
            Self::Shape => "shape",
        }
    }
}

impl fmt::Display for StyleAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Strict parse failures for style axis tokens.
pub enum ParseStyleError {
    /// The value is not a member of the axis.
    #[error("unknown button {axis} `{value}`")]
    Unknown {
        /// Axis being parsed.
        axis: StyleAxis,
        /// Rejected input.
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a lenient axis lookup.
pub enum Lookup<T> {
    /// The input named a known value.
    Resolved(T),
    /// The input was unknown and the axis default was substituted.
    FallbackApplied {
        /// Rejected input.
        original: String,
        /// Value used instead.
        substituted: T,
    },
}

impl<T: Copy> Lookup<T> {
    /// Returns the value to render with, regardless of how it was obtained.
    pub fn value(&self) -> T {
        match self {
            Self::Resolved(value) => *value,
            Self::FallbackApplied { substituted, .. } => *substituted,
        }
    }

    /// Returns `true` when the input was replaced by the axis default.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FallbackApplied { .. })
    }
}

/// Strictly parses `raw` as a value of axis `T`.
///
/// # Errors
///
/// Returns [`ParseStyleError::Unknown`] when `raw` is not one of `T::ALL`'s tokens.
pub fn parse_token<T: StyleToken>(raw: &str) -> Result<T, ParseStyleError> {
    T::ALL
        .iter()
        .copied()
        .find(|value| value.token() == raw)
        .ok_or_else(|| ParseStyleError::Unknown {
            axis: T::AXIS,
            value: raw.to_string(),
        })
}

/// Looks up `raw` on axis `T`, substituting the axis default for unknown input.
pub fn lookup<T: StyleToken>(raw: &str) -> Lookup<T> {
    match parse_token::<T>(raw) {
        Ok(value) => Lookup::Resolved(value),
        Err(_) => Lookup::FallbackApplied {
            original: raw.to_string(),
            substituted: T::default(),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Visual treatment of a button.
pub enum ButtonVariant {
    /// Solid fill.
    Contained,
    /// Inset ring with transparent fill.
    Outlined,
    /// Tinted translucent fill.
    Soft,
    /// Text only, tinted on hover.
    Text,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Contained
    }
}

impl StyleToken for ButtonVariant {
    const AXIS: StyleAxis = StyleAxis::Variant;
    const ALL: &'static [Self] = &[Self::Contained, Self::Outlined, Self::Soft, Self::Text];

    fn token(self) -> &'static str {
        match self {
            Self::Contained => "contained",
            Self::Outlined => "outlined",
            Self::Soft => "soft",
            Self::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic button color.
pub enum ButtonColor {
    /// Brand action color.
    Primary,
    /// Neutral palette built from content/border tokens.
    Secondary,
    /// Positive outcome.
    Success,
    /// Destructive action.
    Error,
    /// Cautionary action.
    Warning,
    /// Informational action.
    Info,
    /// Near-black neutral.
    Black,
    /// White, for dark backgrounds.
    White,
}

impl Default for ButtonColor {
    fn default() -> Self {
        Self::Primary
    }
}

impl StyleToken for ButtonColor {
    const AXIS: StyleAxis = StyleAxis::Color;
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Black,
        Self::White,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Button padding and type scale.
pub enum ButtonSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Default.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl StyleToken for ButtonSize {
    const AXIS: StyleAxis = StyleAxis::Size;
    const ALL: &'static [Self] = &[Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Corner treatment.
///
/// `Pill` and `Circle` render identically; `Circle` marks icon-only intent.
pub enum ButtonShape {
    /// Medium corner radius.
    Rounded,
    /// Fully rounded ends.
    Pill,
    /// Fully rounded, for icon-only buttons.
    Circle,
    /// No corner radius.
    Square,
}

impl Default for ButtonShape {
    fn default() -> Self {
        Self::Rounded
    }
}

impl StyleToken for ButtonShape {
    const AXIS: StyleAxis = StyleAxis::Shape;
    const ALL: &'static [Self] = &[Self::Rounded, Self::Pill, Self::Circle, Self::Square];

    fn token(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Pill => "pill",
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }
}

macro_rules! impl_from_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = ParseStyleError;

                fn from_str(raw: &str) -> Result<Self, Self::Err> {
                    parse_token(raw)
                }
            }
        )+
    };
}

impl_from_str!(ButtonVariant, ButtonColor, ButtonSize, ButtonShape);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Declarative button style input, built fresh for every render.
pub struct StyleConfig {
    /// Visual treatment.
    pub variant: ButtonVariant,
    /// Semantic color.
    pub color: ButtonColor,
    /// Padding/typography scale.
    pub size: ButtonSize,
    /// Corner treatment.
    pub shape: ButtonShape,
    /// Use square icon padding instead of text padding and gap.
    pub icon_only: bool,
    /// Show the busy indicator and block interaction.
    pub loading: bool,
    /// Block interaction.
    pub disabled: bool,
}

impl StyleConfig {
    /// Returns a copy with `variant` replaced.
    pub const fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Returns a copy with `color` replaced.
    pub const fn with_color(mut self, color: ButtonColor) -> Self {
        self.color = color;
        self
    }

    /// Returns a copy with `size` replaced.
    pub const fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Returns a copy with `shape` replaced.
    pub const fn with_shape(mut self, shape: ButtonShape) -> Self {
        self.shape = shape;
        self
    }

    /// Returns a copy with icon-only layout toggled.
    pub const fn with_icon_only(mut self, icon_only: bool) -> Self {
        self.icon_only = icon_only;
        self
    }

    /// Returns a copy with the loading flag set.
    pub const fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Returns a copy with the disabled flag set.
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Interaction-disabled state after `loading` is folded in.
    pub const fn effective_disabled(&self) -> bool {
        self.disabled || self.loading
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Class tokens and interaction state produced by [`resolve`].
pub struct ResolvedStyle {
    tokens: Vec<String>,
    disabled: bool,
    busy: bool,
}

impl ResolvedStyle {
    /// Class tokens in composition order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// Returns `true` when `token` is present verbatim.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|candidate| candidate == token)
    }

    /// Space-separated class attribute value.
    pub fn class(&self) -> String {
        self.tokens.join(" ")
    }

    /// Effective disabled state (`disabled || loading`).
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the busy indicator should render.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Appends caller-supplied class tokens with the highest precedence.
    ///
    /// Earlier tokens in the same utility group are dropped, so an override of
    /// `px-6` replaces the size table's `px-3`.
    pub fn with_overrides(self, overrides: &str) -> Self {
        if overrides.trim().is_empty() {
            return self;
        }
        let tokens = merge_classes(self.tokens().chain(std::iter::once(overrides)))
            .into_iter()
            .map(str::to_owned)
            .collect();
        Self { tokens, ..self }
    }
}

impl fmt::Display for ResolvedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class())
    }
}

/// Resolves `config` into class tokens.
///
/// Composition order is base, color/variant, size, shape, then the busy
/// cursor. Caller overrides go last through [`ResolvedStyle::with_overrides`].
pub fn resolve(config: &StyleConfig) -> ResolvedStyle {
    let size = if config.icon_only {
        tables::icon_size_tokens(config.size)
    } else {
        tables::size_tokens(config.size)
    };
    let fragments = [
        tables::BASE_TOKENS,
        tables::color_tokens(config.color, config.variant),
        size,
        tables::shape_tokens(config.shape),
        if config.loading {
            tables::BUSY_TOKENS
        } else {
            ""
        },
    ];

    ResolvedStyle {
        tokens: merge_classes(fragments)
            .into_iter()
            .map(str::to_owned)
            .collect(),
        disabled: config.effective_disabled(),
        busy: config.loading,
    }
}

/// Class for the busy indicator rendered ahead of button content.
///
/// Icon-only buttons get no extra margin so they stay square or circular.
pub fn indicator_class(icon_only: bool) -> &'static str {
    if icon_only {
        "shrink-0 animate-spin"
    } else {
        "shrink-0 animate-spin -ml-1 mr-2 size-4"
    }
}
