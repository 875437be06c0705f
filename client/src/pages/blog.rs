//! Blog index page.
//!
//! Lists posts in authored order with a staggered entrance. Individual post
//! routes are linked but not rendered by this site.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::appearance::Theme;
use crate::state::content::{POSTS, Post};
use crate::util::motion::{Entrance, Motion, Row, Stagger, staggered};

const POST_STAGGER: Stagger = Stagger::new(Entrance::FadeUp);

#[component]
pub fn BlogPage(theme: Theme) -> impl IntoView {
    view! {
        <div class="page">
            <SiteHeader theme=theme/>
            <main class="page__main page__main--blog">
                <div style=Motion::new(Entrance::SlideRight).style()>
                    <a href="/" class="back-link">
                        "\u{2190} Back to home"
                    </a>
                </div>
                <h1 class="page__title" style=Motion::new(Entrance::FadeUp).delayed(0.2).style()>
                    "Blog"
                </h1>
                <p class="page__subtitle" style=Motion::new(Entrance::FadeUp).delayed(0.3).style()>
                    "Thoughts on technology, development, and design."
                </p>
                <PostList posts=POSTS/>
                <SiteFooter/>
            </main>
        </div>
    }
}

#[component]
fn PostList(posts: &'static [Post]) -> impl IntoView {
    let articles = post_rows(posts)
        .into_iter()
        .map(|row| {
            let post = row.item;
            view! {
                <article class="post" style=row.motion.style()>
                    <a href=post.href() class="post__link">
                        <h2 class="post__title">{post.title}</h2>
                        <p class="post__excerpt">{post.excerpt}</p>
                        <div class="post__meta">
                            <time class="post__date" datetime=post.date>
                                {post.display_date()}
                            </time>
                            <span class="post__read-time">{post.read_time}</span>
                        </div>
                    </a>
                </article>
            }
        })
        .collect_view();

    view! { <div class="post-list">{articles}</div> }
}

fn post_rows(posts: &[Post]) -> Vec<Row<Post>> {
    staggered(posts, POST_STAGGER, 0)
}
