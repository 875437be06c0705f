//! Page footer.

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

use leptos::prelude::*;

use crate::state::content::{PROFILE, Profile};
use crate::util::motion::{Entrance, Motion};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer" style=Motion::new(Entrance::Fade).style()>
            <p class="site-footer__text">{footer_text(&PROFILE)}</p>
        </footer>
    }
}

fn footer_text(profile: &Profile) -> String {
    format!("\u{a9} {} {}. Built with Leptos.", profile.copyright_year, profile.name)
}
