//! Home page: hero, projects, skills.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::{NavLink, SiteHeader};
use crate::state::appearance::Theme;
use crate::state::content::{PROFILE, PROJECTS, Project, SKILLS, SOCIAL_LINKS};
use crate::util::motion::{Entrance, Motion, Row, Stagger, staggered};

/// Each section's heading takes slot 0; items follow from slot 1.
const SECTION_STAGGER: Stagger = Stagger::new(Entrance::FadeUp);

const BLOG_LINK: NavLink = NavLink { href: "/blog", label: "Blog" };

#[component]
pub fn HomePage(theme: Theme) -> impl IntoView {
    view! {
        <div class="page">
            <SiteHeader theme=theme title_href="#" nav=BLOG_LINK/>
            <main class="page__main page__main--home">
                <Hero/>
                <ProjectsSection projects=PROJECTS/>
                <SkillsSection skills=SKILLS/>
                <SiteFooter/>
            </main>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let socials = SOCIAL_LINKS
        .iter()
        .map(|link| {
            let label = link.kind.label();
            view! {
                <a
                    href=link.href
                    class="hero__social"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=label
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <section class="hero">
            <div class="hero__avatar" style=Motion::new(Entrance::ScaleIn).style()>
                {PROFILE.initial}
            </div>
            <h1 class="page__title" style=Motion::new(Entrance::FadeUp).delayed(0.2).style()>
                {PROFILE.headline}
            </h1>
            <AnimatedText text=PROFILE.bio class="hero__bio" delay=0.4/>
            <div class="hero__socials" style=Motion::new(Entrance::FadeUp).delayed(0.8).style()>
                {socials}
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    let rows = project_rows(projects)
        .into_iter()
        .map(|row| {
            view! {
                <a href=row.item.link class="project" style=row.motion.style()>
                    <div class="project__body">
                        <h3 class="project__title">{row.item.title}</h3>
                        <p class="project__description">{row.item.description}</p>
                    </div>
                    <span class="project__arrow" aria-hidden="true">
                        "\u{2197}"
                    </span>
                </a>
            }
        })
        .collect_view();

    view! {
        <section class="section">
            <h2 class="section__title" style=SECTION_STAGGER.motion_for(0).style()>
                "Projects"
            </h2>
            <div class="project-list">{rows}</div>
        </section>
    }
}

#[component]
fn SkillsSection(skills: &'static [&'static str]) -> impl IntoView {
    let pills = skill_rows(skills)
        .into_iter()
        .map(|row| view! { <span class="skill" style=row.motion.style()>{row.item}</span> })
        .collect_view();

    view! {
        <section class="section">
            <h2 class="section__title" style=SECTION_STAGGER.motion_for(0).style()>
                "Skills"
            </h2>
            <div class="skill-list">{pills}</div>
        </section>
    }
}

fn project_rows(projects: &[Project]) -> Vec<Row<Project>> {
    staggered(projects, SECTION_STAGGER, 1)
}

fn skill_rows(skills: &[&'static str]) -> Vec<Row<&'static str>> {
    staggered(skills, SECTION_STAGGER, 1)
}
