//! Project Gallery
//!
//! Card grid plus a detail modal. Opening or closing a project moves its
//! image, title and category between the card and the modal with a
//! shared-layout transition; the modal backdrop fades in and out.

use leptos::ev;
use leptos::prelude::*;
use leptos_motion::{flip, use_gesture, use_presence, LayoutSnapshots};

use crate::components::reveal::{use_in_view, visual, SectionHeading};
use crate::config::secs_to_ms;
use crate::context::use_app_context;
use crate::gallery::{shared_dom_id, GallerySelection, Layout, ModalEvent, SharedKey, SharedPart};
use crate::icons::{Glyph, Icon};
use crate::lifecycle::MountGuard;
use crate::models::Project;
use crate::motion::{backdrop, stagger_delay, VisualState, CARD_LIFT, SECTION};

type Snapshots = StoredValue<LayoutSnapshots<SharedKey>, LocalStorage>;

/// Record the boxes of project `id`'s shared parts as rendered in `layout`
fn capture(snapshots: Snapshots, layout: Layout, id: u32) {
    snapshots.update_value(|snaps| {
        for part in SharedPart::ALL {
            let key = (id, part);
            if let Some(rect) = flip::measure(&shared_dom_id(layout, key)) {
                snaps.record(key, rect);
            }
        }
    });
}

/// Animate project `id`'s shared parts in `layout` from their recorded boxes
fn play(snapshots: Snapshots, layout: Layout, id: u32, duration: f64) {
    snapshots.try_update_value(|snaps| {
        for part in SharedPart::ALL {
            let key = (id, part);
            if let Some(first) = snaps.take(&key) {
                flip::play_from(&shared_dom_id(layout, key), first, duration);
            }
        }
    });
}

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let ctx = use_app_context();
    let portfolio = ctx.portfolio.clone();
    let config = ctx.config.gallery;

    let (selection, set_selection) = signal(GallerySelection::default());
    let snapshots: Snapshots = StoredValue::new_local(LayoutSnapshots::default());

    let open = Callback::new(move |id: u32| {
        capture(snapshots, Layout::Card, id);
        set_selection.update(|g| {
            if let Some(previous) = g.select(id) {
                log::debug!("[GALLERY] project {previous} replaced by {id}");
            }
        });
        log::debug!("[GALLERY] opened project {id}");
    });

    let dismiss = Callback::new(move |event: ModalEvent| {
        let mut next = selection.get_untracked();
        let Some(id) = next.handle(event) else {
            return;
        };
        capture(snapshots, Layout::Modal, id);
        set_selection.set(next);
        log::debug!("[GALLERY] closed project {id} via {event:?}");
        // the card is visible again on the next frame; fly it home
        request_animation_frame(move || play(snapshots, Layout::Card, id, config.layout_duration));
    });

    // Escape closes the modal
    let guard = MountGuard::mounted();
    let keydown = window_event_listener(ev::keydown, {
        let guard = guard.clone();
        move |ev| {
            if ev.key() == "Escape" && guard.is_mounted() {
                dismiss.run(ModalEvent::Escape);
            }
        }
    });
    let keydown = StoredValue::new_local(Some(keydown));
    on_cleanup(move || {
        guard.unmount();
        keydown.try_update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.remove();
            }
        });
    });

    let backdrop_variants = backdrop(config.fade_duration);
    let presence = use_presence(
        move || selection.with(|g| g.selected().is_some()),
        secs_to_ms(config.fade_duration),
    );

    let seen = use_in_view("projects-grid".to_string(), 0.1);
    let cards = portfolio
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let id = project.id;
            let delay = stagger_delay(i, 0.0, 0.1);
            view! {
                <div class="card-slot" style=move || SECTION.style_delayed(visual(seen.get()), delay)>
                    <ProjectCard
                        project=project.clone()
                        selected=Signal::derive(move || selection.with(|g| g.is_selected(id)))
                        on_open=open
                    />
                </div>
            }
        })
        .collect_view();

    let modal = move || {
        selection.with(|g| g.project(&portfolio).cloned()).map(|project| {
            view! {
                <ProjectModal
                    project=project
                    snapshots=snapshots
                    duration=config.layout_duration
                    on_event=dismiss
                />
            }
        })
    };

    view! {
        <section id="projects" class="section section-alt">
            <div class="container">
                <SectionHeading section="projects" title="Project Excellence" />
                <div id="projects-grid" class="projects-grid">{cards}</div>
            </div>
            <Show when=move || presence.is_mounted()>
                <div
                    class="modal-backdrop"
                    style=move || backdrop_variants.style(presence.state())
                    on:click=move |_| dismiss.run(ModalEvent::BackdropClick)
                >
                    {modal.clone()}
                </div>
            </Show>
        </section>
    }
}

/// Grid card; hidden while its project is open so only one copy of the
/// shared parts is ever visible. The lift sits on a wrapper so it never
/// fights the layout transition's transform on the card itself.
#[component]
fn ProjectCard(
    project: Project,
    #[prop(into)] selected: Signal<bool>,
    on_open: Callback<u32>,
) -> impl IntoView {
    let id = project.id;
    let dom_id = move |part| shared_dom_id(Layout::Card, (id, part));
    let label = format!("Open {}", project.title);
    let alt = project.title.clone();
    let gesture = use_gesture();

    view! {
        <div
            class="card-lift"
            style=move || CARD_LIFT.style_gesture(VisualState::Visible, gesture.active())
            on:pointerenter=gesture.on_pointerenter()
            on:pointerleave=gesture.on_pointerleave()
            on:pointercancel=gesture.on_pointerleave()
            on:pointerdown=gesture.on_pointerdown()
            on:pointerup=gesture.on_pointerup()
        >
            <button
                id=dom_id(SharedPart::Container)
                class="project-card"
                style=move || if selected.get() { "visibility: hidden;" } else { "" }
                aria-label=label
                on:click=move |_| on_open.run(id)
            >
                <img
                    id=dom_id(SharedPart::Image)
                    class="project-image"
                    src=project.image_url
                    alt=alt
                />
                <div class="project-card-body">
                    <span id=dom_id(SharedPart::Category) class="project-category">{project.category}</span>
                    <h3 id=dom_id(SharedPart::Title) class="project-title">{project.title}</h3>
                </div>
            </button>
        </div>
    }
}

#[component]
fn ProjectModal(
    project: Project,
    snapshots: Snapshots,
    duration: f64,
    on_event: Callback<ModalEvent>,
) -> impl IntoView {
    let id = project.id;
    let dom_id = move |part| shared_dom_id(Layout::Modal, (id, part));

    let alt = project.title.clone();

    // the modal's boxes are laid out after this frame
    request_animation_frame(move || play(snapshots, Layout::Modal, id, duration));

    let live = project.live_url.map(|url| {
        view! {
            <a href=url target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                <Glyph icon=Icon::ExternalLink size=18 />
                "Live Demo"
            </a>
        }
    });
    let code = project.code_url.map(|url| {
        view! {
            <a href=url target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                <Glyph icon=Icon::Github size=18 />
                "View Code"
            </a>
        }
    });

    view! {
        <div
            id=dom_id(SharedPart::Container)
            class="modal"
            role="dialog"
            aria-modal="true"
            on:click=move |ev| {
                ev.stop_propagation();
                on_event.run(ModalEvent::BodyClick);
            }
        >
            <button
                class="modal-close"
                aria-label="Close"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_event.run(ModalEvent::CloseButton);
                }
            >
                <Glyph icon=Icon::Close />
            </button>
            <img
                id=dom_id(SharedPart::Image)
                class="modal-image"
                src=project.image_url
                alt=alt
            />
            <div class="modal-content">
                <h3 id=dom_id(SharedPart::Title) class="modal-title">{project.title}</h3>
                <p id=dom_id(SharedPart::Category) class="modal-category">{project.category}</p>
                <div class="modal-details">
                    <h4>"The Problem"</h4>
                    <p>{project.problem}</p>
                    <h4>"My Role"</h4>
                    <p>{project.role}</p>
                    <h4>"Technical Challenges"</h4>
                    <p>{project.challenges}</p>
                    <h4>"Tech Stack"</h4>
                    <div class="stack-chips">
                        {project.stack.into_iter().map(|tech| view! { <span class="chip">{tech}</span> }).collect_view()}
                    </div>
                </div>
                <div class="modal-links">{live}{code}</div>
            </div>
        </div>
    }
}
