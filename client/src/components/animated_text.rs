//! Sentence revealed one word at a time.

#[cfg(test)]
#[path = "animated_text_test.rs"]
mod animated_text_test;

use leptos::prelude::*;

use crate::util::motion::{Entrance, Motion, Stagger};

/// Gap between consecutive words.
pub const WORD_INTERVAL_SECS: f64 = 0.03;

/// Paragraph whose words fade up in sequence after `delay` seconds.
#[component]
pub fn AnimatedText(
    #[prop(into)] text: String,
    #[prop(into, optional)] class: String,
    #[prop(optional)] delay: f64,
) -> impl IntoView {
    let words = word_reveals(&text, delay)
        .into_iter()
        .map(|(word, motion)| {
            view! { <span class="animated-text__word" style=motion.style()>{word}</span> }
        })
        .collect_view();

    view! { <p class=format!("animated-text {class}")>{words}</p> }
}

/// Split on whitespace and schedule each word.
pub fn word_reveals(text: &str, delay_secs: f64) -> Vec<(String, Motion)> {
    let stagger = Stagger::new(Entrance::FadeUp)
        .starting_at(delay_secs)
        .every(WORD_INTERVAL_SECS);
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| (word.to_owned(), stagger.motion_for(i)))
        .collect()
}
