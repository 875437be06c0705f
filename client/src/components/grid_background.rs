//! Fixed decorative backdrop: a faint line grid and one blurred violet glow.
//!
//! Purely presentational. The layer sits behind all content and never
//! receives pointer events; colors switch with the `dark` class in CSS.

use leptos::prelude::*;

#[component]
pub fn GridBackground() -> impl IntoView {
    view! {
        <div class="grid-background" aria-hidden="true">
            <div class="grid-background__lines"></div>
            <div class="grid-background__glow"></div>
        </div>
    }
}
