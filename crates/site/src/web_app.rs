use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use ui_showcase::{Story, UiShowcaseApp};

/// Maps a route slug to a story; unknown or missing slugs open the playground.
pub fn story_for_slug(slug: Option<&str>) -> Story {
    match slug {
        Some(slug) => Story::from_slug(slug).unwrap_or_else(|| {
            logging::warn!("unknown story `{slug}`; opening the playground");
            Story::Playground
        }),
        None => Story::Playground,
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Button Catalog" />
        <Meta name="description" content="Variant, color, size, and shape permutations of the shared button." />

        <Router>
            <Routes>
                <Route path="" view=StoryRoute />
                <Route path="/stories/:slug" view=StoryRoute />
            </Routes>
        </Router>
    }
}

#[component]
fn StoryRoute() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let story = Signal::derive(move || {
        params.with(|map| story_for_slug(map.get("slug").map(String::as_str)))
    });
    // Args are read once per mount; later edits live in the playground state.
    let restored_args = query.with_untracked(|map| map.get("args").cloned());

    view! {
        <UiShowcaseApp story restored_args=restored_args.unwrap_or_default() />
    }
}

#[cfg(test)]
mod tests {
    use super::story_for_slug;
    use ui_showcase::Story;

    #[test]
    fn story_for_slug_matches_expected_cases() {
        let cases = [
            (None, Story::Playground),
            (Some("colors"), Story::Colors),
            (Some("icon-only"), Story::IconOnly),
            (Some("nope"), Story::Playground),
        ];

        for (slug, expected) in cases {
            assert_eq!(story_for_slug(slug), expected, "slug={slug:?}");
        }
    }
}
