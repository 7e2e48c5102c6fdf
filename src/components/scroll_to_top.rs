//! Scroll-to-Top Button

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config::secs_to_ms;
use crate::icons::{Glyph, Icon};
use crate::motion::POP;
use crate::store::{store_past_top_button, use_scroll_store};
use leptos_motion::{use_gesture, use_presence};

/// Floating button shown once the page is scrolled past the top-button threshold
#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let store = use_scroll_store();
    let presence = use_presence(move || store_past_top_button(&store), secs_to_ms(POP.exit_duration()));
    let gesture = use_gesture();

    let scroll_to_top = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <Show when=move || presence.is_mounted()>
            <button
                class="scroll-top"
                aria-label="Scroll to top"
                style=move || POP.style_gesture(presence.state(), gesture.active())
                on:pointerenter=gesture.on_pointerenter()
                on:pointerleave=gesture.on_pointerleave()
                on:pointercancel=gesture.on_pointerleave()
                on:pointerdown=gesture.on_pointerdown()
                on:pointerup=gesture.on_pointerup()
                on:click=scroll_to_top
            >
                <Glyph icon=Icon::ArrowUp />
            </button>
        </Show>
    }
}
