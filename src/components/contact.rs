//! Contact Footer

use leptos::prelude::*;
use leptos_motion::use_gesture;

use crate::context::use_app_context;
use crate::icons::Glyph;
use crate::motion::{VisualState, SOCIAL_ICON};

#[component]
pub fn Contact() -> impl IntoView {
    let contact = use_app_context().portfolio.contact.clone();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer id="contact" class="site-footer">
            <div class="container">
                <h2>{contact.heading}</h2>
                <p class="footer-blurb">{contact.blurb}</p>
                <ul class="social-links">
                    {contact
                        .links
                        .into_iter()
                        .map(|link| {
                            let gesture = use_gesture();
                            view! {
                                <li>
                                    <a
                                        href=link.href
                                        aria-label=link.name.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        style=move || SOCIAL_ICON.style_gesture(VisualState::Visible, gesture.active())
                                        on:pointerenter=gesture.on_pointerenter()
                                        on:pointerleave=gesture.on_pointerleave()
                                        on:pointercancel=gesture.on_pointerleave()
                                        on:pointerdown=gesture.on_pointerdown()
                                        on:pointerup=gesture.on_pointerup()
                                    >
                                        <Glyph icon=link.icon />
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <p class="copyright">{format!("© {year} {}. Built with Rust and Leptos.", contact.owner)}</p>
            </div>
        </footer>
    }
}
