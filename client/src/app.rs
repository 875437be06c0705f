//! Root application component with routing and the appearance handle.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::cursor_glow::CursorGlow;
use crate::components::grid_background::GridBackground;
use crate::pages::{blog::BlogPage, home::HomePage};
use crate::state::appearance::Theme;
use crate::state::content::PROFILE;
use crate::util::preference::{LocalStorageStore, theme_boot_script};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                // Runs before first paint so a stored dark preference never flashes light.
                <script inner_html=theme_boot_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single `Theme` handle and passes it to each page, which hands it
/// on to the header toggle.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = Theme::new(Arc::new(LocalStorageStore));

    view! {
        <Stylesheet id="leptos" href="/pkg/xevrion.css"/>
        <Title text=PROFILE.name/>
        <Meta name="description" content=PROFILE.bio/>

        <GridBackground/>
        <CursorGlow/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <HomePage theme=theme/> }/>
                <Route path=StaticSegment("blog") view=move || view! { <BlogPage theme=theme/> }/>
            </Routes>
        </Router>
    }
}
