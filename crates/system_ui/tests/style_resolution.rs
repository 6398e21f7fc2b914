use pretty_assertions::assert_eq;
use system_ui::{
    lookup, resolve, ButtonColor, ButtonShape, ButtonSize, ButtonVariant, StyleArgs, StyleConfig,
    StyleToken,
};

fn all_configs() -> Vec<StyleConfig> {
    let mut configs = Vec::new();
    for &variant in ButtonVariant::ALL {
        for &color in ButtonColor::ALL {
            for &size in ButtonSize::ALL {
                for &shape in ButtonShape::ALL {
                    for flags in 0..8u8 {
                        configs.push(StyleConfig {
                            variant,
                            color,
                            size,
                            shape,
                            icon_only: flags & 1 != 0,
                            loading: flags & 2 != 0,
                            disabled: flags & 4 != 0,
                        });
                    }
                }
            }
        }
    }
    configs
}

#[test]
fn resolution_is_deterministic() {
    for config in all_configs() {
        assert_eq!(resolve(&config), resolve(&config), "config={config:?}");
    }
}

#[test]
fn loading_always_forces_disabled() {
    for config in all_configs().into_iter().filter(|config| config.loading) {
        let style = resolve(&config);
        assert!(style.is_disabled(), "config={config:?}");
        assert!(style.contains("cursor-wait"), "config={config:?}");
        assert!(!style.contains("cursor-pointer"), "config={config:?}");
    }
}

#[test]
fn resolved_tokens_never_repeat() {
    for config in all_configs() {
        let style = resolve(&config);
        let mut tokens: Vec<&str> = style.tokens().collect();
        let total = tokens.len();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), total, "config={config:?}");
    }
}

#[test]
fn destructive_outlined_uses_ring_not_fill() {
    let style = resolve(
        &StyleConfig::default()
            .with_color(ButtonColor::Error)
            .with_variant(ButtonVariant::Outlined),
    );

    for token in ["ring-1", "ring-inset", "ring-error", "text-error", "hover:bg-error/10"] {
        assert!(style.contains(token), "missing {token}");
    }
    assert!(!style.contains("bg-error"));
    assert!(!style.contains("hover:bg-error-hover"));
}

#[test]
fn icon_only_circle_extra_large() {
    let style = resolve(
        &StyleConfig::default()
            .with_icon_only(true)
            .with_shape(ButtonShape::Circle)
            .with_size(ButtonSize::Xl),
    );

    assert!(style.contains("p-3"));
    assert!(style.contains("rounded-full"));
    assert!(!style.tokens().any(|token| token.starts_with("gap-x-")));
    assert!(!style.contains("px-4"));
}

#[test]
fn default_class_string() {
    let style = resolve(&StyleConfig::default());
    assert_eq!(
        style.to_string(),
        "inline-flex items-center justify-center font-semibold shadow-xs transition-all \
         focus-visible:outline-2 focus-visible:outline-offset-2 disabled:opacity-50 \
         disabled:pointer-events-none cursor-pointer bg-primary text-primary-content \
         hover:bg-primary-hover focus-visible:outline-primary px-3 py-1.5 text-sm gap-x-2 \
         rounded-md"
    );
    assert!(!style.is_disabled());
}

#[test]
fn unknown_color_matches_primary_for_every_variant() {
    for &variant in ButtonVariant::ALL {
        let base = StyleConfig::default().with_variant(variant);
        let fallback = base.with_color(lookup::<ButtonColor>("not-a-color").value());
        assert_eq!(resolve(&fallback), resolve(&base.with_color(ButtonColor::Primary)));
    }
}

#[test]
fn overrides_append_after_busy_cursor() {
    let style = resolve(&StyleConfig::default().with_loading(true)).with_overrides("cursor-progress");
    assert!(style.contains("cursor-progress"));
    assert!(!style.contains("cursor-wait"));
    assert!(style.is_disabled());
}

#[test]
fn unrelated_overrides_keep_resolved_colors() {
    let base = resolve(&StyleConfig::default());
    let cases = [
        "text-nowrap",
        "text-ellipsis",
        "truncate",
        "bg-no-repeat",
        "bg-cover bg-fixed",
        "bg-clip-text",
        "bg-gradient-to-r",
        "shadow-primary",
        "justify-items-start",
        "[&:hover]:bg-black",
    ];

    for overrides in cases {
        let style = base.clone().with_overrides(overrides);
        for kept in ["bg-primary", "text-primary-content", "shadow-xs", "justify-center"] {
            assert!(style.contains(kept), "overrides={overrides:?} kept={kept:?}");
        }
        for added in overrides.split_whitespace() {
            assert!(style.contains(added), "overrides={overrides:?} added={added:?}");
        }
    }
}

#[test]
fn same_group_overrides_replace_resolved_tokens() {
    let style = resolve(&StyleConfig::default()).with_overrides("bg-black shadow-lg justify-start");
    for replaced in ["bg-primary", "shadow-xs", "justify-center"] {
        assert!(!style.contains(replaced), "replaced={replaced:?}");
    }
    assert!(style.contains("hover:bg-primary-hover"));
}

#[test]
fn args_round_trip_through_config() {
    let config = StyleConfig::default()
        .with_variant(ButtonVariant::Soft)
        .with_color(ButtonColor::Warning)
        .with_size(ButtonSize::Xl)
        .with_shape(ButtonShape::Circle)
        .with_icon_only(true);
    let (restored, fallbacks) = StyleArgs::from(config).to_config();
    assert_eq!(restored, config);
    assert!(fallbacks.is_empty());
}
