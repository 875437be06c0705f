//! Fixed page header with the site title, optional navigation, and the
//! appearance toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::appearance::Theme;
use crate::state::content::PROFILE;
use crate::util::motion::{Entrance, Motion};

/// Secondary header link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Header shared by every page. Slides down on load.
#[component]
pub fn SiteHeader(
    theme: Theme,
    #[prop(default = "/")] title_href: &'static str,
    #[prop(optional)] nav: Option<NavLink>,
) -> impl IntoView {
    view! {
        <header class="site-header" style=Motion::new(Entrance::SlideDown).style()>
            <div class="site-header__inner">
                <a href=title_href class="site-header__title">
                    {PROFILE.name}
                </a>
                <div class="site-header__actions">
                    {nav.map(|link| {
                        view! {
                            <a href=link.href class="site-header__nav">
                                {link.label}
                            </a>
                        }
                    })}
                    <ThemeToggle theme=theme/>
                </div>
            </div>
        </header>
    }
}
