//! Scroll Progress Bar
//!
//! Thin bar across the top of the page. Its width follows scroll progress
//! through a spring, so fast scrolling is smoothed rather than mirrored.

use leptos::prelude::*;
use leptos_motion::{FrameLoop, Spring};

use crate::context::use_app_context;
use crate::store::{store_progress, use_scroll_store};

#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let config = use_app_context().config.scroll;
    let store = use_scroll_store();

    let start = store_progress(&store);
    let (shown, set_shown) = signal(start);
    let spring = StoredValue::new_local(Spring::new(config.progress_spring, start));

    let frames = FrameLoop::new(move |dt| {
        let Some((moving, value)) = spring.try_update_value(|s| (s.step(dt), s.value())) else {
            return false;
        };
        set_shown.try_set(value);
        moving
    });
    let frames = StoredValue::new_local(Some(frames));

    // retarget on every progress change; the running spring keeps its velocity
    Effect::new(move |_| {
        let target = store_progress(&store);
        spring.update_value(|s| s.set_target(target));
        frames.with_value(|f| {
            if let Some(f) = f {
                f.wake();
            }
        });
    });

    on_cleanup(move || {
        frames.try_update_value(|f| {
            f.take();
        });
    });

    view! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", shown.get() * 100.0)
            style=move || format!("transform: scaleX({:.4});", shown.get())
        ></div>
    }
}
