//! Utility-class merging with last-wins conflict resolution.
//!
//! Tokens are grouped by the utility they set (padding-x, text color, ring
//! width, cursor, ...) under their modifier prefix (`hover:`, `disabled:`).
//! Walking from the end, the first token seen for a group is kept and every
//! earlier token in that group is dropped. Tokens without a known group are
//! only de-duplicated.

use std::collections::HashSet;

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "hidden",
];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const RADII: &[&str] = &["none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

const OUTLINE_STYLES: &[&str] = &["none", "solid", "dashed", "dotted", "double", "hidden"];

const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];

const TEXT_OVERFLOW: &[&str] = &["ellipsis", "clip"];

const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

const BG_ATTACHMENT: &[&str] = &["fixed", "local", "scroll"];

const BG_SIZE: &[&str] = &["auto", "cover", "contain"];

const BG_POSITION: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];

const BG_REPEAT: &[&str] = &[
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "repeat-round",
    "repeat-space",
];

// Longest prefixes first so `gap-x-` wins over `gap-`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("m-", "m"),
    ("size-", "size"),
    ("w-", "w"),
    ("h-", "h"),
    ("items-", "items"),
    ("justify-items-", "justify-items"),
    ("justify-self-", "justify-self"),
    ("justify-", "justify"),
    ("cursor-", "cursor"),
    ("opacity-", "opacity"),
    ("pointer-events-", "pointer-events"),
    ("animate-", "animate"),
    ("duration-", "duration"),
    ("whitespace-", "whitespace"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
];

// Broad utilities also clear the axis-specific ones they cover.
fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        _ => &[],
    }
}

fn starts_with_digit(value: &str) -> bool {
    value.chars().next().is_some_and(|ch| ch.is_ascii_digit())
}

/// Splits `token` into its modifier prefix and bare utility.
///
/// Only colons outside `[...]` separate modifiers, so arbitrary variants such
/// as `[&:hover]:` and arbitrary values such as `bg-[url(a:b)]` stay intact.
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split = None;
    for (index, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = Some(index),
            _ => {}
        }
    }
    match split {
        Some(index) => (&token[..index], &token[index + 1..]),
        None => ("", token),
    }
}

fn background_group(rest: &str) -> &'static str {
    if BG_ATTACHMENT.contains(&rest) {
        "bg-attachment"
    } else if BG_SIZE.contains(&rest) {
        "bg-size"
    } else if BG_POSITION.contains(&rest) {
        "bg-position"
    } else if BG_REPEAT.contains(&rest) {
        "bg-repeat"
    } else if rest.starts_with("clip-") {
        "bg-clip"
    } else if rest.starts_with("origin-") {
        "bg-origin"
    } else if rest.starts_with("blend-") {
        "bg-blend"
    } else if rest == "none" || rest.starts_with("gradient-") || rest.starts_with("linear-") {
        "bg-image"
    } else {
        "bg-color"
    }
}

/// Returns the conflict group for a bare utility, if it has one.
fn utility_group(utility: &str) -> Option<&'static str> {
    let utility = utility.trim_start_matches('!').trim_start_matches('-');

    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if utility == "shadow" {
        return Some("shadow");
    }
    if let Some(rest) = utility.strip_prefix("shadow-") {
        return Some(if SHADOW_SIZES.contains(&rest) {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if utility == "truncate" {
        return Some("text-overflow");
    }
    if utility == "transition" || utility.starts_with("transition-") {
        return Some("transition");
    }
    if utility == "shrink" || utility.starts_with("shrink-") {
        return Some("shrink");
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        return Some(if TEXT_SIZES.contains(&rest) {
            "text-size"
        } else if TEXT_ALIGN.contains(&rest) {
            "text-align"
        } else if TEXT_WRAP.contains(&rest) {
            "text-wrap"
        } else if TEXT_OVERFLOW.contains(&rest) {
            "text-overflow"
        } else {
            "text-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return FONT_WEIGHTS.contains(&rest).then_some("font-weight");
    }
    if utility == "rounded" {
        return Some("rounded");
    }
    if let Some(rest) = utility.strip_prefix("rounded-") {
        return RADII.contains(&rest).then_some("rounded");
    }
    if utility == "ring" {
        return Some("ring-width");
    }
    if utility == "ring-inset" {
        return Some("ring-inset");
    }
    if let Some(rest) = utility.strip_prefix("ring-offset-") {
        return Some(if starts_with_digit(rest) {
            "ring-offset-width"
        } else {
            "ring-offset-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("ring-") {
        return Some(if starts_with_digit(rest) {
            "ring-width"
        } else {
            "ring-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("bg-") {
        return Some(background_group(rest));
    }
    if utility == "outline" {
        return Some("outline-width");
    }
    if utility.starts_with("outline-offset-") {
        return Some("outline-offset");
    }
    if let Some(rest) = utility.strip_prefix("outline-") {
        return Some(if starts_with_digit(rest) {
            "outline-width"
        } else if OUTLINE_STYLES.contains(&rest) {
            "outline-style"
        } else {
            "outline-color"
        });
    }

    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

/// Merges whitespace-separated class fragments, later tokens winning conflicts.
///
/// Empty fragments are skipped. The surviving tokens keep their original
/// relative order.
pub fn merge_classes<'a, I>(fragments: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<&'a str> = fragments
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect();

    let mut claimed: HashSet<(&str, &str)> = HashSet::new();
    let mut seen_tokens: HashSet<&str> = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());

    for &token in tokens.iter().rev() {
        if !seen_tokens.insert(token) {
            continue;
        }
        let (modifiers, utility) = split_modifiers(token);
        if let Some(group) = utility_group(utility) {
            if !claimed.insert((modifiers, group)) {
                continue;
            }
            for covered in covered_groups(group) {
                claimed.insert((modifiers, *covered));
            }
        }
        kept.push(token);
    }

    kept.reverse();
    kept
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{merge_classes, split_modifiers, utility_group};

    #[test]
    fn merge_classes_matches_expected_cases() {
        let cases = [
            ("", ""),
            ("  px-3   py-1 ", "px-3 py-1"),
            ("cursor-pointer cursor-wait", "cursor-wait"),
            ("px-3 py-1.5 p-4", "p-4"),
            ("p-4 px-2", "p-4 px-2"),
            ("text-sm text-primary text-base", "text-primary text-base"),
            ("ring-1 ring-inset ring-primary ring-2", "ring-inset ring-primary ring-2"),
            (
                "focus-visible:outline-2 focus-visible:outline-primary",
                "focus-visible:outline-2 focus-visible:outline-primary",
            ),
            ("bg-primary hover:bg-primary-hover bg-black", "hover:bg-primary-hover bg-black"),
            ("rounded-md rounded-full", "rounded-full"),
            ("gap-x-2 gap-3", "gap-3"),
            ("w-full w-full", "w-full"),
            ("custom-a custom-b custom-a", "custom-b custom-a"),
            ("-ml-1 ml-2", "ml-2"),
            ("text-primary-content text-nowrap", "text-primary-content text-nowrap"),
            ("text-primary-content text-ellipsis", "text-primary-content text-ellipsis"),
            ("text-primary-content text-balance text-wrap", "text-primary-content text-wrap"),
            ("text-primary-content truncate", "text-primary-content truncate"),
            ("bg-primary bg-no-repeat", "bg-primary bg-no-repeat"),
            ("bg-primary bg-cover bg-fixed", "bg-primary bg-cover bg-fixed"),
            ("bg-primary bg-clip-text", "bg-primary bg-clip-text"),
            ("bg-primary bg-gradient-to-r", "bg-primary bg-gradient-to-r"),
            ("bg-primary bg-center bg-white", "bg-center bg-white"),
            ("shadow-xs shadow-primary", "shadow-xs shadow-primary"),
            ("shadow-xs shadow-lg", "shadow-lg"),
            ("justify-center justify-items-start", "justify-center justify-items-start"),
            ("justify-center justify-self-end justify-start", "justify-self-end justify-start"),
            ("[&:hover]:bg-primary [&:hover]:bg-black", "[&:hover]:bg-black"),
            ("bg-primary [&:hover]:bg-black", "bg-primary [&:hover]:bg-black"),
            ("whitespace-normal whitespace-nowrap", "whitespace-nowrap"),
        ];

        for (input, expected) in cases {
            assert_eq!(merge_classes([input]).join(" "), expected, "input={input:?}");
        }
    }

    #[test]
    fn split_modifiers_keeps_stacked_prefixes() {
        assert_eq!(split_modifiers("hover:bg-primary"), ("hover", "bg-primary"));
        assert_eq!(
            split_modifiers("dark:hover:text-white"),
            ("dark:hover", "text-white")
        );
        assert_eq!(split_modifiers("px-2"), ("", "px-2"));
    }

    #[test]
    fn split_modifiers_ignores_colons_inside_brackets() {
        let cases = [
            ("[&:hover]:bg-primary", ("[&:hover]", "bg-primary")),
            ("md:[&:focus]:ring-2", ("md:[&:focus]", "ring-2")),
            ("bg-[url(a:b)]", ("", "bg-[url(a:b)]")),
            ("hover:bg-[url(a:b)]", ("hover", "bg-[url(a:b)]")),
        ];

        for (input, expected) in cases {
            assert_eq!(split_modifiers(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn background_keywords_do_not_share_the_color_group() {
        let cases = [
            ("bg-primary", Some("bg-color")),
            ("bg-primary-hover", Some("bg-color")),
            ("bg-white", Some("bg-color")),
            ("bg-no-repeat", Some("bg-repeat")),
            ("bg-cover", Some("bg-size")),
            ("bg-fixed", Some("bg-attachment")),
            ("bg-left-top", Some("bg-position")),
            ("bg-clip-text", Some("bg-clip")),
            ("bg-origin-border", Some("bg-origin")),
            ("bg-gradient-to-r", Some("bg-image")),
            ("bg-none", Some("bg-image")),
            ("text-nowrap", Some("text-wrap")),
            ("text-clip", Some("text-overflow")),
            ("shadow-sm", Some("shadow")),
            ("shadow-primary", Some("shadow-color")),
            ("justify-items-start", Some("justify-items")),
            ("justify-self-auto", Some("justify-self")),
        ];

        for (input, expected) in cases {
            assert_eq!(utility_group(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn text_size_and_color_are_separate_groups() {
        assert_eq!(utility_group("text-sm"), Some("text-size"));
        assert_eq!(utility_group("text-primary-content"), Some("text-color"));
        assert_eq!(utility_group("font-sans"), None);
        assert_eq!(utility_group("font-semibold"), Some("font-weight"));
    }
}
