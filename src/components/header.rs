//! Site Header and Mobile Menu
//!
//! The header owns the menu state; the overlay only reads it and sends
//! intents back through the setter.

use leptos::prelude::*;
use leptos_motion::{use_gesture, use_presence};

use crate::config::secs_to_ms;
use crate::context::use_app_context;
use crate::icons::{Glyph, Icon};
use crate::menu::{MenuIntent, MenuState};
use crate::models::NavItem;
use crate::motion::{menu_panel, stagger_delay, VisualState, BRAND, NAV_LINK};
use crate::store::{store_past_header, use_scroll_store};

fn send_intent(set_menu: WriteSignal<MenuState>, intent: MenuIntent) {
    set_menu.update(|menu| {
        let next = menu.apply(&intent);
        if next != *menu {
            log::debug!("[MENU] {intent:?}: {menu:?} -> {next:?}");
        }
        *menu = next;
    });
}

/// Fixed header: transparent at the top of the page, solid once scrolled
/// or while the menu is open
#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_scroll_store();
    let (menu, set_menu) = signal(MenuState::Closed);

    let header_class = move || {
        if store_past_header(&store) || menu.get().is_open() {
            "site-header solid"
        } else {
            "site-header"
        }
    };

    let brand = ctx.portfolio.brand.clone();
    let brand_gesture = use_gesture();
    let nav = ctx.portfolio.nav.clone();

    view! {
        <header class=header_class>
            <nav class="site-nav">
                <a
                    href="#"
                    class="brand"
                    style=move || BRAND.style_gesture(VisualState::Visible, brand_gesture.active())
                    on:pointerenter=brand_gesture.on_pointerenter()
                    on:pointerleave=brand_gesture.on_pointerleave()
                    on:pointercancel=brand_gesture.on_pointerleave()
                    on:pointerdown=brand_gesture.on_pointerdown()
                    on:pointerup=brand_gesture.on_pointerup()
                >
                    {brand}
                </a>
                <ul class="nav-links">
                    {nav
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a href=item.anchor.clone()>{item.label.clone()}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="menu-button"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| send_intent(set_menu, MenuIntent::Toggle)
                >
                    <Glyph icon=Icon::Menu size=28 />
                </button>
            </nav>
        </header>
        <MobileMenu menu=menu set_menu=set_menu nav=nav />
    }
}

/// Full-screen nav overlay. Links enter one after another; on close
/// they drop out at once while the panel fades.
#[component]
fn MobileMenu(
    menu: ReadSignal<MenuState>,
    set_menu: WriteSignal<MenuState>,
    nav: Vec<NavItem>,
) -> impl IntoView {
    let config = use_app_context().config.menu;
    let panel = menu_panel(config.panel_duration);
    let presence = use_presence(move || menu.get().is_open(), secs_to_ms(config.panel_duration));
    let nav = StoredValue::new(nav);

    view! {
        <Show when=move || presence.is_mounted()>
            <div
                class="menu-overlay"
                role="dialog"
                aria-modal="true"
                style=move || panel.style(presence.state())
            >
                <button
                    class="menu-close"
                    aria-label="Close menu"
                    on:click=move |_| send_intent(set_menu, MenuIntent::Close)
                >
                    <Glyph icon=Icon::Close size=32 />
                </button>
                <ul class="menu-links">
                    {nav
                        .get_value()
                        .into_iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let delay = stagger_delay(i, config.link_delay_base, config.link_delay_step);
                            let anchor = item.anchor.clone();
                            view! {
                                <li style=move || NAV_LINK.style_delayed(presence.state(), delay)>
                                    <a
                                        href=item.anchor
                                        on:click=move |_| {
                                            send_intent(set_menu, MenuIntent::Navigate(anchor.clone()))
                                        }
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Show>
    }
}
