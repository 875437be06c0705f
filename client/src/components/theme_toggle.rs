//! Light/dark toggle button shown in the page header.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::state::appearance::{Theme, ToggleIcon};

/// Appearance toggle.
///
/// Renders a fixed 36px placeholder until the preference store has been read
/// on mount, then a button showing exactly one of the sun or moon icons.
#[component]
pub fn ThemeToggle(theme: Theme) -> impl IntoView {
    // Effects only run in the browser, after hydration, and are disposed with
    // this component.
    Effect::new(move || theme.resolve());

    move || {
        match theme.state.get().icon() {
            None => view! {
                <div class="theme-toggle theme-toggle--placeholder" aria-hidden="true"></div>
            }
            .into_any(),
            Some(icon) => view! {
                <button
                    type="button"
                    class="theme-toggle"
                    aria-label=toggle_label(icon)
                    title=toggle_label(icon)
                    on:click=move |_| theme.toggle()
                >
                    {icon_view(icon)}
                </button>
            }
            .into_any(),
        }
    }
}

fn icon_view(icon: ToggleIcon) -> AnyView {
    match icon {
        ToggleIcon::Sun => view! {
            <svg class=icon_class(icon) viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="12" cy="12" r="4"></circle>
                <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"></path>
            </svg>
        }
        .into_any(),
        ToggleIcon::Moon => view! {
            <svg class=icon_class(icon) viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path>
            </svg>
        }
        .into_any(),
    }
}

fn icon_class(icon: ToggleIcon) -> &'static str {
    match icon {
        ToggleIcon::Sun => "icon theme-toggle__icon theme-toggle__icon--sun",
        ToggleIcon::Moon => "icon theme-toggle__icon theme-toggle__icon--moon",
    }
}

fn toggle_label(icon: ToggleIcon) -> &'static str {
    match icon {
        ToggleIcon::Sun => "Switch to light mode",
        ToggleIcon::Moon => "Switch to dark mode",
    }
}
