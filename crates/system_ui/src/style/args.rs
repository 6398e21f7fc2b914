use leptos::logging;
use serde::{Deserialize, Serialize};

use super::{
    lookup, ButtonColor, ButtonShape, ButtonSize, ButtonVariant, Lookup, StyleAxis, StyleConfig,
    StyleToken,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Raw, serializable form of a [`StyleConfig`].
///
/// Axis fields hold unchecked strings so story args and persisted playground
/// state can carry values this build does not know about.
pub struct StyleArgs {
    /// Visual treatment token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Semantic color token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Size token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Shape token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Icon-only layout.
    pub icon_only: bool,
    /// Busy state.
    pub loading: bool,
    /// Disabled state.
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A default substituted for an unknown axis value.
pub struct AppliedFallback {
    /// Axis that fell back.
    pub axis: StyleAxis,
    /// Rejected input.
    pub original: String,
    /// Token of the substituted default.
    pub substituted: &'static str,
}

fn resolve_axis<T: StyleToken>(raw: Option<&str>, fallbacks: &mut Vec<AppliedFallback>) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    match lookup::<T>(raw) {
        Lookup::Resolved(value) => value,
        Lookup::FallbackApplied {
            original,
            substituted,
        } => {
            logging::warn!(
                "unknown button {} `{original}`; using `{}`",
                T::AXIS,
                substituted.token()
            );
            fallbacks.push(AppliedFallback {
                axis: T::AXIS,
                original,
                substituted: substituted.token(),
            });
            substituted
        }
    }
}

impl StyleArgs {
    /// Converts the raw args into a [`StyleConfig`], substituting defaults for
    /// unknown axis values.
    ///
    /// Every substitution is logged and returned so callers can surface it.
    pub fn to_config(&self) -> (StyleConfig, Vec<AppliedFallback>) {
        let mut fallbacks = Vec::new();
        let config = StyleConfig {
            variant: resolve_axis::<ButtonVariant>(self.variant.as_deref(), &mut fallbacks),
            color: resolve_axis::<ButtonColor>(self.color.as_deref(), &mut fallbacks),
            size: resolve_axis::<ButtonSize>(self.size.as_deref(), &mut fallbacks),
            shape: resolve_axis::<ButtonShape>(self.shape.as_deref(), &mut fallbacks),
            icon_only: self.icon_only,
            loading: self.loading,
            disabled: self.disabled,
        };
        (config, fallbacks)
    }
}

impl From<StyleConfig> for StyleArgs {
    fn from(config: StyleConfig) -> Self {
        Self {
            variant: Some(config.variant.token().to_string()),
            color: Some(config.color.token().to_string()),
            size: Some(config.size.token().to_string()),
            shape: Some(config.shape.token().to_string()),
            icon_only: config.icon_only,
            loading: config.loading,
            disabled: config.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::style::resolve;

    #[test]
    fn empty_args_produce_defaults() {
        let (config, fallbacks) = StyleArgs::default().to_config();
        assert_eq!(config, StyleConfig::default());
        assert!(fallbacks.is_empty());
    }

    #[test]
    fn unknown_color_resolves_like_primary() {
        let unknown = StyleArgs {
            color: Some("not-a-color".to_string()),
            variant: Some("soft".to_string()),
            ..StyleArgs::default()
        };
        let primary = StyleArgs {
            color: Some("primary".to_string()),
            ..unknown.clone()
        };

        let (unknown_config, fallbacks) = unknown.to_config();
        let (primary_config, _) = primary.to_config();

        assert_eq!(resolve(&unknown_config), resolve(&primary_config));
        assert_eq!(
            fallbacks,
            vec![AppliedFallback {
                axis: StyleAxis::Color,
                original: "not-a-color".to_string(),
                substituted: "primary",
            }]
        );
    }

    #[test]
    fn every_axis_falls_back_to_its_default() {
        let args = StyleArgs {
            variant: Some("ghost".to_string()),
            color: Some("teal".to_string()),
            size: Some("xxl".to_string()),
            shape: Some("blob".to_string()),
            ..StyleArgs::default()
        };
        let (config, fallbacks) = args.to_config();
        assert_eq!(config, StyleConfig::default());
        let axes: Vec<StyleAxis> = fallbacks.iter().map(|fallback| fallback.axis).collect();
        assert_eq!(
            axes,
            vec![
                StyleAxis::Variant,
                StyleAxis::Color,
                StyleAxis::Size,
                StyleAxis::Shape
            ]
        );
    }

    #[test]
    fn args_json_uses_snake_case_keys() {
        let config = StyleConfig::default()
            .with_color(ButtonColor::Warning)
            .with_icon_only(true);
        let json = serde_json::to_value(StyleArgs::from(config)).expect("serialize args");
        assert_eq!(
            json,
            serde_json::json!({
                "variant": "contained",
                "color": "warning",
                "size": "md",
                "shape": "rounded",
                "icon_only": true,
                "loading": false,
                "disabled": false,
            })
        );

        let restored: StyleArgs = serde_json::from_value(json).expect("deserialize args");
        assert_eq!(restored.to_config().0, config);
    }

    #[test]
    fn missing_json_fields_default() {
        let args: StyleArgs =
            serde_json::from_str(r#"{"color":"error"}"#).expect("deserialize partial args");
        let (config, _) = args.to_config();
        assert_eq!(config, StyleConfig::default().with_color(ButtonColor::Error));
    }
}
