//! About Section
//!
//! Career timeline and the skills grid.

use leptos::prelude::*;

use crate::components::reveal::{use_in_view, visual, SectionHeading};
use crate::context::use_app_context;
use crate::icons::{Glyph, Icon};
use crate::motion::{stagger_delay, SECTION};

/// Timeline markers alternate between work and study
pub fn timeline_marker(index: usize) -> Icon {
    if index % 2 == 0 {
        Icon::Briefcase
    } else {
        Icon::GraduationCap
    }
}

#[component]
pub fn About() -> impl IntoView {
    let portfolio = use_app_context().portfolio;
    let seen = use_in_view("about-body".to_string(), 0.1);
    let state = move || visual(seen.get());

    let timeline = portfolio
        .timeline
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let delay = stagger_delay(i, 0.0, 0.1);
            view! {
                <li class="timeline-item" style=move || SECTION.style_delayed(state(), delay)>
                    <span class="timeline-marker">
                        <Glyph icon=timeline_marker(i) size=14 />
                    </span>
                    <h4>
                        {event.title.clone()}
                        <span class="timeline-year">{event.year.clone()}</span>
                    </h4>
                    <p>{event.description.clone()}</p>
                </li>
            }
        })
        .collect_view();

    let skills = portfolio
        .skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let delay = stagger_delay(i, 0.2, 0.05);
            view! {
                <div class="skill-card" style=move || SECTION.style_delayed(state(), delay)>
                    <span class="skill-icon">
                        <Glyph icon=skill.icon size=28 />
                    </span>
                    <h4>{skill.name.clone()}</h4>
                    <p>{skill.description.clone()}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="section">
            <div class="container">
                <SectionHeading section="about" title="About the Architect" />
                <div id="about-body" class="about-body">
                    <div class="timeline">
                        <h3>"My Journey"</h3>
                        <ol class="timeline-track">{timeline}</ol>
                    </div>
                    <div class="skills">
                        <h3>"Core Competencies"</h3>
                        <div class="skills-grid">{skills}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
