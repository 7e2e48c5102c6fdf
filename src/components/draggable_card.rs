//! Draggable Card Demo

use leptos::prelude::*;
use leptos_motion::use_drag;

use crate::context::use_app_context;

/// Card that can be thrown around inside its box and springs back
/// inside the bounds when released past them
#[component]
pub fn DraggableCard() -> impl IntoView {
    let drag = use_drag(use_app_context().config.drag);

    view! {
        <div class="drag-surface">
            <p class="drag-hint">"Drag the card within this container"</p>
            <div
                class="drag-card"
                class:grabbing=move || drag.is_pressed()
                style=move || drag.transform()
                on:pointerdown=drag.on_pointerdown()
                on:pointermove=drag.on_pointermove()
                on:pointerup=drag.on_pointerup()
                on:pointercancel=drag.on_pointerup()
            >
                "Drag Me"
            </div>
        </div>
    }
}
