//! Portfolio App
//!
//! Root component: provides the site context and the scroll store, starts
//! scroll tracking and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{About, Contact, Hero, ProjectGallery, Sandbox, ScrollProgressBar, ScrollToTopButton, SiteHeader};
use crate::content::Portfolio;
use crate::context::AppContext;
use crate::scroll::{use_scroll_tracker, ScrollState};
use crate::store::ScrollStore;

#[component]
pub fn App(portfolio: Portfolio) -> impl IntoView {
    let ctx = AppContext::new(portfolio);
    let scroll_config = ctx.config.scroll;
    provide_context(ctx);

    let store: ScrollStore = Store::new(ScrollState::default());
    provide_context(store);
    use_scroll_tracker(store, scroll_config);

    view! {
        <ScrollProgressBar />
        <SiteHeader />
        <main>
            <Hero />
            <About />
            <ProjectGallery />
            <Sandbox />
        </main>
        <Contact />
        <ScrollToTopButton />
    }
}

/// Shown instead of the site when the bundled content fails validation
#[component]
pub fn ContentErrorView(message: String) -> impl IntoView {
    view! {
        <main class="content-error">
            <h1>"Something went wrong"</h1>
            <p>"The site content could not be loaded."</p>
            <pre>{message}</pre>
        </main>
    }
}
