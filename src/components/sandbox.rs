//! Sandbox Section
//!
//! Interactive demos, each in its own card.

use leptos::prelude::*;

use crate::components::draggable_card::DraggableCard;
use crate::components::live_chart::LiveChart;
use crate::components::reveal::{use_in_view, visual, SectionHeading};
use crate::context::use_app_context;
use crate::models::DemoKind;
use crate::motion::{stagger_delay, SECTION};

#[component]
pub fn Sandbox() -> impl IntoView {
    let sandbox = use_app_context().portfolio.sandbox.clone();

    let demos = sandbox
        .demos
        .into_iter()
        .enumerate()
        .map(|(i, demo)| {
            let id = format!("sandbox-demo-{i}");
            let seen = use_in_view(id.clone(), 0.3);
            let delay = stagger_delay(i, 0.0, 0.2);
            let body = match demo.demo {
                DemoKind::LiveChart => view! { <LiveChart /> }.into_any(),
                DemoKind::DraggableCard => view! { <DraggableCard /> }.into_any(),
            };
            view! {
                <article id=id class="demo-card" style=move || SECTION.style_delayed(visual(seen.get()), delay)>
                    <h3>{demo.title}</h3>
                    <p class="demo-description">{demo.description}</p>
                    <div class="demo-body">{body}</div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="sandbox" class="section">
            <div class="container">
                <SectionHeading section="sandbox" title="The Sandbox" />
                <p class="section-intro">{sandbox.intro}</p>
                <div class="demo-grid">{demos}</div>
            </div>
        </section>
    }
}
