//! Story definitions: fixed button permutations grouped into catalog pages.

use serde::{Deserialize, Serialize};
use system_ui::{
    AppliedFallback, ButtonColor, ButtonShape, ButtonSize, ButtonVariant, IconName, StyleArgs,
    StyleConfig, StyleToken,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Catalog pages.
pub enum Story {
    /// Single button driven by the controls panel.
    Playground,
    /// Every visual treatment.
    Variants,
    /// Semantic color palette.
    Colors,
    /// Pill sizes and corner treatments.
    ShapesAndSizes,
    /// Disabled and loading states.
    States,
    /// Leading and trailing icons.
    WithIcons,
    /// Icon-only buttons.
    IconOnly,
}

impl Default for Story {
    fn default() -> Self {
        Self::Playground
    }
}

impl Story {
    /// Every story in navigation order.
    pub const ALL: [Self; 7] = [
        Self::Playground,
        Self::Variants,
        Self::Colors,
        Self::ShapesAndSizes,
        Self::States,
        Self::WithIcons,
        Self::IconOnly,
    ];

    /// Route segment for the story.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Playground => "playground",
            Self::Variants => "variants",
            Self::Colors => "colors",
            Self::ShapesAndSizes => "shapes-and-sizes",
            Self::States => "states",
            Self::WithIcons => "with-icons",
            Self::IconOnly => "icon-only",
        }
    }

    /// Parses a route segment.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|story| story.slug() == slug)
    }

    /// Navigation title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Playground => "Playground",
            Self::Variants => "Variants",
            Self::Colors => "Colors",
            Self::ShapesAndSizes => "Shapes & Sizes",
            Self::States => "States",
            Self::WithIcons => "With Icons",
            Self::IconOnly => "Icon Only",
        }
    }

    /// One-line description shown under the title.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Playground => "Adjust every style axis and inspect the resolved classes.",
            Self::Variants => "Contained, outlined, soft, and text treatments with the current args.",
            Self::Colors => "Semantic palette with the current args.",
            Self::ShapesAndSizes => "Pill buttons across the size scale, plus square and rounded corners.",
            Self::States => "Disabled and loading buttons. Loading always blocks interaction.",
            Self::WithIcons => "Icons composed as leading or trailing content.",
            Self::IconOnly => "Square padding for icon content; circle marks icon-only intent.",
        }
    }

    /// Button rows for the story.
    ///
    /// `Playground`, `Variants`, and `Colors` start from `args`; the other
    /// stories are fixed permutations.
    pub fn rows(self, args: &PlaygroundArgs) -> Vec<StoryRow> {
        let (base, _) = args.config();
        match self {
            Self::Playground => vec![StoryRow::new([StoryEntry::text(args.label.clone(), base)])],
            Self::Variants => vec![StoryRow::new(ButtonVariant::ALL.iter().map(|&variant| {
                let label = match variant {
                    ButtonVariant::Contained => "Contained",
                    ButtonVariant::Outlined => "Outlined",
                    ButtonVariant::Soft => "Soft",
                    ButtonVariant::Text => "Text",
                };
                StoryEntry::text(label, base.with_variant(variant))
            }))],
            Self::Colors => {
                let entry = |label: &str, color| StoryEntry::text(label, base.with_color(color));
                vec![
                    StoryRow::new([
                        entry("Primary", ButtonColor::Primary),
                        entry("Secondary", ButtonColor::Secondary),
                        entry("Black", ButtonColor::Black),
                    ]),
                    StoryRow::new([
                        entry("Success", ButtonColor::Success),
                        entry("Error", ButtonColor::Error),
                        entry("Warning", ButtonColor::Warning),
                        entry("Info", ButtonColor::Info),
                    ]),
                ]
            }
            Self::ShapesAndSizes => {
                let pill = StyleConfig::default().with_shape(ButtonShape::Pill);
                vec![
                    StoryRow::new([
                        StoryEntry::text("XS", pill.with_size(ButtonSize::Xs)),
                        StoryEntry::text("Small", pill.with_size(ButtonSize::Sm)),
                        StoryEntry::text("Medium", pill.with_size(ButtonSize::Md)),
                        StoryEntry::text("Large", pill.with_size(ButtonSize::Lg)),
                        StoryEntry::text("Extra Large", pill.with_size(ButtonSize::Xl)),
                    ]),
                    StoryRow::new([
                        StoryEntry::text(
                            "Square Button",
                            StyleConfig::default()
                                .with_shape(ButtonShape::Square)
                                .with_variant(ButtonVariant::Outlined),
                        ),
                        StoryEntry::text("Default Rounded", StyleConfig::default()),
                    ]),
                ]
            }
            Self::States => vec![StoryRow::new([
                StoryEntry::text("Disabled", StyleConfig::default().with_disabled(true)),
                StoryEntry::text("Loading", StyleConfig::default().with_loading(true)),
                StoryEntry::text(
                    "Processing",
                    StyleConfig::default()
                        .with_loading(true)
                        .with_variant(ButtonVariant::Outlined)
                        .with_color(ButtonColor::Secondary),
                ),
            ])],
            Self::WithIcons => vec![
                StoryRow::new([
                    StoryEntry::text("Create New", StyleConfig::default()).leading(IconName::Plus),
                    StoryEntry::text(
                        "Read More",
                        StyleConfig::default()
                            .with_variant(ButtonVariant::Soft)
                            .with_color(ButtonColor::Info),
                    )
                    .trailing(IconName::ArrowRight),
                ]),
                StoryRow::new([
                    StoryEntry::text(
                        "Delete",
                        StyleConfig::default()
                            .with_color(ButtonColor::Error)
                            .with_variant(ButtonVariant::Outlined),
                    )
                    .leading(IconName::Trash),
                    StoryEntry::text(
                        "Completed",
                        StyleConfig::default()
                            .with_color(ButtonColor::Success)
                            .with_shape(ButtonShape::Pill),
                    )
                    .leading(IconName::CheckCircle),
                ]),
            ],
            Self::IconOnly => {
                let icon_only = StyleConfig::default().with_icon_only(true);
                vec![StoryRow::new([
                    StoryEntry::icon(
                        "Add",
                        IconName::Plus,
                        icon_only.with_shape(ButtonShape::Circle),
                    ),
                    StoryEntry::icon(
                        "Delete",
                        IconName::Trash,
                        icon_only
                            .with_shape(ButtonShape::Square)
                            .with_variant(ButtonVariant::Outlined)
                            .with_color(ButtonColor::Secondary),
                    ),
                    StoryEntry::icon(
                        "Send",
                        IconName::PaperAirplane,
                        icon_only
                            .with_size(ButtonSize::Xl)
                            .with_shape(ButtonShape::Circle)
                            .with_color(ButtonColor::Warning)
                            .with_variant(ButtonVariant::Soft),
                    ),
                ])]
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One button in a story row.
pub struct StoryEntry {
    /// Visible text, or the accessible label for icon-only entries.
    pub label: String,
    /// Style input.
    pub config: StyleConfig,
    /// Icon rendered before the label (the only content when icon-only).
    pub leading_icon: Option<IconName>,
    /// Icon rendered after the label.
    pub trailing_icon: Option<IconName>,
}

impl StoryEntry {
    fn text(label: impl Into<String>, config: StyleConfig) -> Self {
        Self {
            label: label.into(),
            config,
            leading_icon: None,
            trailing_icon: None,
        }
    }

    fn icon(label: &str, icon: IconName, config: StyleConfig) -> Self {
        Self::text(label, config).leading(icon)
    }

    fn leading(mut self, icon: IconName) -> Self {
        self.leading_icon = Some(icon);
        self
    }

    fn trailing(mut self, icon: IconName) -> Self {
        self.trailing_icon = Some(icon);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A horizontal group of story entries.
pub struct StoryRow {
    /// Buttons in display order.
    pub entries: Vec<StoryEntry>,
}

impl StoryRow {
    fn new(entries: impl IntoIterator<Item = StoryEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Controls-panel state shared by the playground and the args-driven stories.
pub struct PlaygroundArgs {
    /// Button text.
    pub label: String,
    /// Style axes.
    #[serde(flatten)]
    pub style: StyleArgs,
}

impl Default for PlaygroundArgs {
    fn default() -> Self {
        Self {
            label: "Button Text".to_string(),
            style: StyleArgs::from(StyleConfig::default()),
        }
    }
}

impl PlaygroundArgs {
    /// Resolved style input and any defaults substituted for unknown values.
    pub fn config(&self) -> (StyleConfig, Vec<AppliedFallback>) {
        self.style.to_config()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use system_ui::{resolve, StyleAxis};

    use super::*;

    #[test]
    fn slugs_round_trip() {
        for story in Story::ALL {
            assert_eq!(Story::from_slug(story.slug()), Some(story), "story={story:?}");
        }
        assert_eq!(Story::from_slug("missing"), None);
    }

    #[test]
    fn every_story_has_buttons() {
        let args = PlaygroundArgs::default();
        for story in Story::ALL {
            let rows = story.rows(&args);
            assert!(!rows.is_empty(), "story={story:?}");
            assert!(
                rows.iter().all(|row| !row.entries.is_empty()),
                "story={story:?}"
            );
        }
    }

    #[test]
    fn variants_follow_args() {
        let mut args = PlaygroundArgs::default();
        args.style.color = Some("success".to_string());
        args.style.size = Some("lg".to_string());

        let rows = Story::Variants.rows(&args);
        let configs: Vec<StyleConfig> = rows[0].entries.iter().map(|entry| entry.config).collect();
        assert_eq!(configs.len(), 4);
        assert!(configs
            .iter()
            .all(|config| config.color == ButtonColor::Success && config.size == ButtonSize::Lg));
        let variants: Vec<ButtonVariant> = configs.iter().map(|config| config.variant).collect();
        assert_eq!(variants, ButtonVariant::ALL.to_vec());
    }

    #[test]
    fn colors_cover_every_semantic_color_but_white() {
        let rows = Story::Colors.rows(&PlaygroundArgs::default());
        let colors: HashSet<ButtonColor> = rows
            .iter()
            .flat_map(|row| row.entries.iter().map(|entry| entry.config.color))
            .collect();
        assert_eq!(colors.len(), 7);
        assert!(!colors.contains(&ButtonColor::White));
    }

    #[test]
    fn loading_states_block_interaction() {
        for entry in &Story::States.rows(&PlaygroundArgs::default())[0].entries {
            assert!(resolve(&entry.config).is_disabled(), "entry={}", entry.label);
        }
    }

    #[test]
    fn icon_only_entries_carry_an_icon_and_label() {
        for entry in &Story::IconOnly.rows(&PlaygroundArgs::default())[0].entries {
            assert!(entry.config.icon_only);
            assert!(entry.leading_icon.is_some());
            assert!(!entry.label.is_empty());
        }
    }

    #[test]
    fn with_icons_entries_place_icons_around_label() {
        let placements: Vec<_> = Story::WithIcons
            .rows(&PlaygroundArgs::default())
            .into_iter()
            .flat_map(|row| row.entries)
            .map(|entry| (entry.label, entry.leading_icon, entry.trailing_icon))
            .collect();

        assert_eq!(
            placements,
            vec![
                ("Create New".to_string(), Some(IconName::Plus), None),
                ("Read More".to_string(), None, Some(IconName::ArrowRight)),
                ("Delete".to_string(), Some(IconName::Trash), None),
                ("Completed".to_string(), Some(IconName::CheckCircle), None),
            ]
        );
    }

    #[test]
    fn playground_args_json_is_flat() {
        let json = serde_json::to_value(PlaygroundArgs::default()).expect("serialize args");
        assert_eq!(json["label"], "Button Text");
        assert_eq!(json["variant"], "contained");
        assert_eq!(json["icon_only"], false);
    }

    #[test]
    fn playground_reports_unknown_color() {
        let args: PlaygroundArgs =
            serde_json::from_str(r#"{"label":"Go","color":"teal"}"#).expect("deserialize args");
        let (config, fallbacks) = args.config();
        assert_eq!(config.color, ButtonColor::Primary);
        assert_eq!(fallbacks.len(), 1);
        assert_eq!(fallbacks[0].axis, StyleAxis::Color);
        assert_eq!(args.label, "Go");
    }
}
