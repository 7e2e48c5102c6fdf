//! Hero Section
//!
//! Headline revealed character by character, then the tagline and chips.

use leptos::prelude::*;

use crate::components::reveal::{use_entered, visual};
use crate::context::use_app_context;
use crate::icons::{Glyph, Icon};
use crate::motion::{VisualState, CHARACTER, FADE_UP};

/// Seconds between consecutive headline characters
const CHAR_STAGGER: f64 = 0.05;

/// Split `text` into words of `(index, char)`, where `index` counts
/// characters across the whole text so the stagger runs continuously
/// from word to word.
pub fn split_glyphs(text: &str) -> Vec<Vec<(usize, char)>> {
    let mut index = 0;
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .map(|ch| {
                    let glyph = (index, ch);
                    index += 1;
                    glyph
                })
                .collect()
        })
        .collect()
}

#[component]
pub fn Hero() -> impl IntoView {
    let hero = use_app_context().portfolio.hero.clone();
    let entered = use_entered();
    let state = Signal::derive(move || visual(entered.get()));

    view! {
        <section class="hero">
            <div class="hero-glow" aria-hidden="true"></div>
            <div class="hero-body">
                <h1 class="hero-headline">
                    <AnimatedText text=hero.headline state=state />
                </h1>
                <p class="hero-tagline" style=move || FADE_UP.style_delayed(state.get(), 0.4)>
                    {hero.tagline}
                </p>
                <div class="hero-chips" style=move || FADE_UP.style_delayed(state.get(), 0.6)>
                    {hero.chips.into_iter().map(|chip| view! { <span class="chip">{chip}</span> }).collect_view()}
                </div>
            </div>
            <a href="#about" class="hero-scroll-cue" aria-label="Scroll to about">
                <Glyph icon=Icon::ArrowDown size=32 />
            </a>
        </section>
    }
}

/// Screen readers get the plain text; the animated copy is hidden from them
#[component]
fn AnimatedText(
    #[prop(into)] text: String,
    state: Signal<VisualState>,
) -> impl IntoView {
    let words = split_glyphs(&text);

    view! {
        <span class="sr-only">{text}</span>
        <span aria-hidden="true">
            {words
                .into_iter()
                .map(|word| {
                    view! {
                        <span class="word">
                            {word
                                .into_iter()
                                .map(|(i, ch)| {
                                    let delay = i as f64 * CHAR_STAGGER;
                                    view! {
                                        <span class="char" style=move || CHARACTER.style_delayed(state.get(), delay)>
                                            {ch.to_string()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </span>
                        " "
                    }
                })
                .collect_view()}
        </span>
    }
}
