//! Reveal-on-Scroll
//!
//! Hooks that flip an element from its hidden variant to its visible one:
//! once after mount, or once when it first scrolls into view.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::lifecycle::MountGuard;
use crate::motion::{VisualState, HEADING};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// True two frames after mount, so the hidden style is painted first
pub fn use_entered() -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);
    request_animation_frame(move || {
        request_animation_frame(move || {
            set_entered.try_set(true);
        });
    });
    entered
}

/// True once the element with `id` has been at least `threshold` visible.
/// Reveals once; the observer is disconnected after the first hit.
pub fn use_in_view(id: String, threshold: f64) -> ReadSignal<bool> {
    let (seen, set_seen) = signal(false);
    let guard = MountGuard::mounted();
    let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    // the element exists once this component's view is in the document
    request_animation_frame({
        let guard = guard.clone();
        move || {
            if !guard.is_mounted() {
                return;
            }
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(&id))
            else {
                log::warn!("[REVEAL] #{id} not found, showing immediately");
                set_seen.set(true);
                return;
            };

            let hit_guard = guard.clone();
            let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, obs: IntersectionObserver| {
                let hit = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if hit {
                    obs.disconnect();
                    hit_guard.run(|| set_seen.set(true));
                }
            });

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(obs) => {
                    obs.observe(&el);
                    observer.set_value(Some((obs, callback)));
                }
                Err(e) => {
                    log::warn!("[REVEAL] observer unavailable: {e:?}");
                    set_seen.set(true);
                }
            }
        }
    });

    on_cleanup(move || {
        guard.unmount();
        observer.try_update_value(|slot| {
            if let Some((obs, _callback)) = slot.take() {
                obs.disconnect();
            }
        });
    });

    seen
}

pub fn visual(on: bool) -> VisualState {
    if on {
        VisualState::Visible
    } else {
        VisualState::Hidden
    }
}

/// Section title that slides down when half of it is visible
#[component]
pub fn SectionHeading(
    #[prop(into)] section: String,
    #[prop(into)] title: String,
) -> impl IntoView {
    let id = format!("{section}-heading");
    let seen = use_in_view(id.clone(), 0.5);

    view! {
        <h2 id=id class="section-title" style=move || HEADING.style(visual(seen.get()))>
            {title}
            <span class="section-title-bar"></span>
        </h2>
    }
}
