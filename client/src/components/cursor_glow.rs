//! Soft radial glow that follows the pointer.
//!
//! Hidden until the first pointer move, so server output and the first
//! hydrate pass carry no position.

#[cfg(test)]
#[path = "cursor_glow_test.rs"]
mod cursor_glow_test;

use leptos::prelude::*;

/// Glow radius in CSS pixels.
const GLOW_RADIUS_PX: u32 = 600;

#[component]
pub fn CursorGlow() -> impl IntoView {
    let position = RwSignal::new(None::<(f64, f64)>);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            position.set(Some((f64::from(ev.client_x()), f64::from(ev.client_y()))));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div
            class="cursor-glow"
            aria-hidden="true"
            style:opacity=move || glow_opacity(position.get())
            style:background=move || glow_background(position.get())
        ></div>
    }
}

fn glow_opacity(position: Option<(f64, f64)>) -> &'static str {
    if position.is_some() { "1" } else { "0" }
}

fn glow_background(position: Option<(f64, f64)>) -> String {
    match position {
        Some((x, y)) => format!(
            "radial-gradient({GLOW_RADIUS_PX}px circle at {x:.0}px {y:.0}px, rgba(139, 92, 246, 0.15), transparent 40%)"
        ),
        None => "none".to_owned(),
    }
}
